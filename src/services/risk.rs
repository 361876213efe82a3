use rand::Rng;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::entry::MoodEntry;

const BASE: f64 = 40.0;
const STRESS_COEF: f64 = 6.2;
const SLEEP_COEF: f64 = 3.8;
const JITTER_RANGE: f64 = 8.0;

const CRISIS_THRESHOLD: f64 = 75.0;
const ELEVATED_THRESHOLD: f64 = 50.0;
const ANXIETY_HIGH_THRESHOLD: f64 = 70.0;

pub const CRISIS_ALERT: &str =
    "Crisis detected. You are not alone. Please contact a therapist now.";

/// Depression-risk percentage from averaged stress and sleep, clamped to
/// [0, 100].
pub fn risk_score(avg_stress: f64, avg_sleep: f64) -> f64 {
    raw_score(avg_stress, avg_sleep).clamp(0.0, 100.0)
}

/// Risk of a single diary entry, for the trend series. Never jittered.
pub fn daily_risk(entry: &MoodEntry) -> f64 {
    risk_score(entry.stress, entry.sleep_hours)
}

fn raw_score(avg_stress: f64, avg_sleep: f64) -> f64 {
    BASE + avg_stress * STRESS_COEF - avg_sleep * SLEEP_COEF
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub risk: f64,
    pub avg_stress: f64,
    pub avg_sleep: f64,
    pub entries: usize,
}

/// The diary-level risk model. Jitter reproduces the noisy variant of the
/// formula; leave it off for reproducible assessments.
pub struct RiskModel {
    jitter: bool,
}

impl RiskModel {
    pub fn new(jitter: bool) -> Self {
        Self { jitter }
    }

    /// Average stress and sleep across the diary and score the result.
    /// An empty diary has no averages to take and is rejected.
    pub fn assess(&self, entries: &[MoodEntry]) -> AppResult<RiskAssessment> {
        if entries.is_empty() {
            return Err(AppError::EmptyDiary);
        }

        let count = entries.len() as f64;
        let avg_stress = entries.iter().map(|e| e.stress).sum::<f64>() / count;
        let avg_sleep = entries.iter().map(|e| e.sleep_hours).sum::<f64>() / count;

        let mut raw = raw_score(avg_stress, avg_sleep);
        if self.jitter {
            raw += rand::thread_rng().gen_range(-JITTER_RANGE..=JITTER_RANGE);
        }
        let risk = raw.clamp(0.0, 100.0);

        tracing::info!(entries = entries.len(), risk, "Digital twin built");

        Ok(RiskAssessment {
            risk,
            avg_stress,
            avg_sleep,
            entries: entries.len(),
        })
    }
}

pub fn is_crisis(risk: f64) -> bool {
    risk > CRISIS_THRESHOLD
}

pub fn anxiety_level(risk: f64) -> &'static str {
    if risk > ANXIETY_HIGH_THRESHOLD {
        "High"
    } else {
        "Moderate"
    }
}

pub fn recommendation(risk: f64) -> &'static str {
    if risk > CRISIS_THRESHOLD {
        "Immediate CBT session"
    } else if risk > ELEVATED_THRESHOLD {
        "Mindfulness app (Headspace)"
    } else {
        "Daily journal + exercise"
    }
}

pub fn therapy_tips(risk: f64) -> [&'static str; 2] {
    if risk > CRISIS_THRESHOLD {
        [
            "Practice 4-7-8 breathing now: inhale 4s, hold 7s, exhale 8s.",
            "Write down 3 things you're grateful for.",
        ]
    } else if risk > ELEVATED_THRESHOLD {
        [
            "Try a 10-minute guided meditation.",
            "Journal prompt: what triggered your stress today?",
        ]
    } else {
        [
            "Reward yourself with a 15-minute walk in nature.",
            "Keep sleep above 7 hours tonight.",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::Mood;

    fn entry(stress: f64, sleep_hours: f64) -> MoodEntry {
        MoodEntry {
            date: "2025-11-08".parse().unwrap(),
            mood: Mood::Neutral,
            stress,
            sleep_hours,
            notes: None,
        }
    }

    #[test]
    fn score_is_bounded_over_the_input_domain() {
        for stress in 1..=10 {
            for sleep in 0..=12 {
                let risk = risk_score(stress as f64, sleep as f64);
                assert!((0.0..=100.0).contains(&risk), "risk {risk} out of bounds");
            }
        }
    }

    #[test]
    fn clamps_at_the_high_end() {
        // 40 + 62 - 0 = 102
        assert_eq!(risk_score(10.0, 0.0), 100.0);
    }

    #[test]
    fn clamps_at_the_low_end() {
        // 40 + 0 - 45.6 = -5.6
        assert_eq!(risk_score(0.0, 12.0), 0.0);
    }

    #[test]
    fn near_zero_inputs_stay_unclamped() {
        // 40 + 6.2 - 45.6 = 0.6 — inside the range, not clipped away
        let risk = risk_score(1.0, 12.0);
        assert!((risk - 0.6).abs() < 1e-9);
    }

    #[test]
    fn assessment_averages_the_diary() {
        let diary = vec![entry(4.0, 8.0), entry(6.0, 6.0)];
        let assessment = RiskModel::new(false).assess(&diary).unwrap();

        assert_eq!(assessment.entries, 2);
        assert!((assessment.avg_stress - 5.0).abs() < 1e-9);
        assert!((assessment.avg_sleep - 7.0).abs() < 1e-9);
        // 40 + 31 - 26.6 = 44.4
        assert!((assessment.risk - 44.4).abs() < 1e-9);
    }

    #[test]
    fn assessment_without_jitter_is_idempotent() {
        let diary = vec![entry(7.8, 5.2), entry(3.2, 7.5), entry(9.2, 3.1)];
        let model = RiskModel::new(false);
        let first = model.assess(&diary).unwrap();
        let second = model.assess(&diary).unwrap();
        assert_eq!(first.risk, second.risk);
    }

    #[test]
    fn jittered_assessment_stays_bounded() {
        let model = RiskModel::new(true);
        let high = vec![entry(10.0, 0.0)];
        let low = vec![entry(1.0, 12.0)];
        for _ in 0..50 {
            assert!((0.0..=100.0).contains(&model.assess(&high).unwrap().risk));
            assert!((0.0..=100.0).contains(&model.assess(&low).unwrap().risk));
        }
    }

    #[test]
    fn empty_diary_is_rejected() {
        let err = RiskModel::new(false).assess(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyDiary));
    }

    #[test]
    fn threshold_branches() {
        assert!(!is_crisis(75.0));
        assert!(is_crisis(75.1));

        assert_eq!(anxiety_level(70.0), "Moderate");
        assert_eq!(anxiety_level(70.1), "High");

        assert_eq!(recommendation(80.0), "Immediate CBT session");
        assert_eq!(recommendation(60.0), "Mindfulness app (Headspace)");
        assert_eq!(recommendation(50.0), "Daily journal + exercise");

        assert!(therapy_tips(80.0)[0].contains("4-7-8"));
        assert!(therapy_tips(60.0)[0].contains("meditation"));
        assert!(therapy_tips(20.0)[0].contains("walk"));
    }
}
