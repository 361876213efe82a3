use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::voice::{self, ToneReading};

#[derive(Debug, Deserialize)]
pub struct VoiceAnalyzeRequest {
    /// Transcribed speech. When absent or blank the tone is drawn at random,
    /// like the demo button with no mic input.
    pub transcript: Option<String>,
}

pub async fn analyze_voice(
    Json(body): Json<VoiceAnalyzeRequest>,
) -> AppResult<Json<ToneReading>> {
    let reading = match body
        .transcript
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        Some(text) => voice::classify_transcript(text),
        None => voice::random_tone(),
    };

    Ok(Json(reading))
}
