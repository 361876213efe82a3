use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One mood diary record. Entries accumulate in arrival order and are never
/// mutated after they reach the diary; the CSV columns mirror these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub stress: f64,
    pub sleep_hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The fixed mood label set offered by the diary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Anxious,
    Depressed,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    /// Defaults to today when omitted.
    pub date: Option<NaiveDate>,

    pub mood: Mood,

    #[validate(range(min = 1.0, max = 10.0, message = "Stress must be between 1 and 10"))]
    pub stress: f64,

    #[validate(range(min = 0.0, max = 12.0, message = "Sleep must be between 0 and 12 hours"))]
    pub sleep_hours: f64,

    #[validate(length(max = 5000, message = "Note must be under 5000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stress: f64, sleep_hours: f64) -> CreateEntryRequest {
        CreateEntryRequest {
            date: None,
            mood: Mood::Neutral,
            stress,
            sleep_hours,
            notes: None,
        }
    }

    #[test]
    fn accepts_in_range_values() {
        assert!(request(1.0, 0.0).validate().is_ok());
        assert!(request(10.0, 12.0).validate().is_ok());
        assert!(request(5.5, 7.25).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_stress() {
        assert!(request(0.5, 8.0).validate().is_err());
        assert!(request(10.1, 8.0).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_sleep() {
        assert!(request(5.0, -0.1).validate().is_err());
        assert!(request(5.0, 12.5).validate().is_err());
    }

    #[test]
    fn mood_labels_are_lowercase_in_json() {
        assert_eq!(serde_json::to_string(&Mood::Depressed).unwrap(), "\"depressed\"");
        let mood: Mood = serde_json::from_str("\"anxious\"").unwrap();
        assert_eq!(mood, Mood::Anxious);
    }
}
