use anyhow::anyhow;

use crate::error::{AppError, AppResult};
use crate::models::entry::MoodEntry;

pub const EXPECTED_COLUMNS: &str = "date, mood, stress, sleep_hours, notes";

/// Parse a whole diary from CSV text. All-or-nothing: any malformed row,
/// unknown mood label, or out-of-range value fails the import.
pub fn parse_diary(text: &str) -> AppResult<Vec<MoodEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for (i, record) in reader.deserialize::<MoodEntry>().enumerate() {
        let row = i + 1;
        let entry = record.map_err(|e| {
            AppError::Validation(format!(
                "Invalid CSV at row {row}: {e}. Expected columns: {EXPECTED_COLUMNS}"
            ))
        })?;

        if !(1.0..=10.0).contains(&entry.stress) {
            return Err(AppError::Validation(format!(
                "Row {row}: stress must be between 1 and 10"
            )));
        }
        if !(0.0..=12.0).contains(&entry.sleep_hours) {
            return Err(AppError::Validation(format!(
                "Row {row}: sleep_hours must be between 0 and 12"
            )));
        }

        entries.push(entry);
    }

    Ok(entries)
}

/// Serialize the diary back to CSV, mirroring the input schema.
pub fn write_diary(entries: &[MoodEntry]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow!("flushing CSV writer: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(anyhow!("CSV was not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::Mood;

    const SAMPLE: &str = "\
date,mood,stress,sleep_hours,notes
2025-11-08,happy,3.2,7.5,good day
2025-11-09,anxious,7.8,5.2,work stress
2025-11-10,neutral,4.1,6.8,
";

    #[test]
    fn parses_a_well_formed_diary() {
        let entries = parse_diary(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].mood, Mood::Happy);
        assert_eq!(entries[1].stress, 7.8);
        assert_eq!(entries[1].notes.as_deref(), Some("work stress"));
        assert_eq!(entries[2].notes, None);
    }

    #[test]
    fn notes_column_is_optional() {
        let text = "date,mood,stress,sleep_hours\n2025-11-08,happy,3.2,7.5\n";
        let entries = parse_diary(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].notes, None);
    }

    #[test]
    fn unknown_mood_label_fails_the_import() {
        let text = "date,mood,stress,sleep_hours,notes\n2025-11-08,elated,3.2,7.5,\n";
        let err = parse_diary(text).unwrap_err();
        assert!(err.to_string().contains("Expected columns"));
    }

    #[test]
    fn missing_required_column_fails_the_import() {
        let text = "date,mood,stress\n2025-11-08,happy,3.2\n";
        let err = parse_diary(text).unwrap_err();
        assert!(err.to_string().contains("Expected columns"));
    }

    #[test]
    fn out_of_range_stress_fails_the_import() {
        let text = "date,mood,stress,sleep_hours,notes\n2025-11-08,happy,11.0,7.5,\n";
        let err = parse_diary(text).unwrap_err();
        assert!(err.to_string().contains("stress"));
    }

    #[test]
    fn out_of_range_sleep_fails_the_import() {
        let text = "date,mood,stress,sleep_hours,notes\n2025-11-08,happy,3.0,13.0,\n";
        let err = parse_diary(text).unwrap_err();
        assert!(err.to_string().contains("sleep_hours"));
    }

    #[test]
    fn export_then_import_round_trips() {
        let entries = parse_diary(SAMPLE).unwrap();
        let written = write_diary(&entries).unwrap();
        let reread = parse_diary(&written).unwrap();
        assert_eq!(entries, reread);
    }

    #[test]
    fn written_header_mirrors_the_input_schema() {
        let entries = parse_diary(SAMPLE).unwrap();
        let written = write_diary(&entries).unwrap();
        assert!(written.starts_with("date,mood,stress,sleep_hours,notes\n"));
    }
}
