use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::entry::{CreateEntryRequest, EntryRangeQuery, MoodEntry};
use crate::AppState;

pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateEntryRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = MoodEntry {
        date: body.date.unwrap_or_else(|| Utc::now().date_naive()),
        mood: body.mood,
        stress: body.stress,
        sleep_hours: body.sleep_hours,
        notes: body.notes,
    };

    state.diary.append(entry.clone()).await;
    tracing::debug!(date = %entry.date, "Mood entry added");

    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryRangeQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.diary.snapshot().await;

    let filtered: Vec<MoodEntry> = entries
        .into_iter()
        .filter(|e| {
            query.start_date.map_or(true, |start| e.date >= start)
                && query.end_date.map_or(true, |end| e.date <= end)
        })
        .collect();

    Ok(Json(filtered))
}
