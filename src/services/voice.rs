use rand::seq::SliceRandom;
use serde::Serialize;

use crate::services::risk;

// Substring tables for the transcript classifier. Checked in order; stressed
// wording wins over calm wording when both appear.
const ANXIOUS_WORDS: [&str; 8] = [
    "anxious",
    "sad",
    "depressed",
    "stress",
    "bad",
    "worried",
    "angry",
    "frustrated",
];
const CALM_WORDS: [&str; 6] = ["happy", "good", "great", "calm", "relaxed", "excited"];

// Diary inputs imputed from the detected tone, fed back through the risk
// formula as the "speech-triggered risk".
const HIGH_TONE_INPUTS: (f64, f64) = (8.0, 4.0);
const LOW_TONE_INPUTS: (f64, f64) = (3.0, 8.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Anxious,
    Calm,
    Neutral,
    Depressed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToneReading {
    pub tone: Tone,
    pub risk_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_risk: Option<f64>,
    pub message: String,
}

/// Keyword-match a transcript into a tone. This is the whole "voice model":
/// a case-insensitive substring scan, nothing learned.
pub fn classify_transcript(transcript: &str) -> ToneReading {
    let text = transcript.to_lowercase();

    if ANXIOUS_WORDS.iter().any(|w| text.contains(w)) {
        let (stress, sleep) = HIGH_TONE_INPUTS;
        ToneReading {
            tone: Tone::Anxious,
            risk_level: "high",
            speech_risk: Some(risk::risk_score(stress, sleep)),
            message: "Voice indicates high stress or anxiety.".into(),
        }
    } else if CALM_WORDS.iter().any(|w| text.contains(w)) {
        let (stress, sleep) = LOW_TONE_INPUTS;
        ToneReading {
            tone: Tone::Calm,
            risk_level: "low",
            speech_risk: Some(risk::risk_score(stress, sleep)),
            message: "Voice analysis shows a calm demeanor.".into(),
        }
    } else {
        let (stress, sleep) = LOW_TONE_INPUTS;
        ToneReading {
            tone: Tone::Neutral,
            risk_level: "moderate",
            speech_risk: Some(risk::risk_score(stress, sleep)),
            message: "Voice shows a neutral mood.".into(),
        }
    }
}

/// Tone reading without a transcript: a uniform draw over the three canned
/// labels, mirroring the demo button.
pub fn random_tone() -> ToneReading {
    let tone = *[Tone::Anxious, Tone::Calm, Tone::Depressed]
        .choose(&mut rand::thread_rng())
        .unwrap_or(&Tone::Calm);

    let (risk_level, message) = match tone {
        Tone::Anxious => ("high", "Voice confirms high stress!"),
        Tone::Calm => ("low", "Voice analysis shows a calm demeanor."),
        _ => ("high", "Voice suggests a depressed mood."),
    };

    ToneReading {
        tone,
        risk_level,
        speech_risk: None,
        message: message.into(),
    }
}
