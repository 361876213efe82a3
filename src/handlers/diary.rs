use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::services::diary_csv;
use crate::AppState;

/// CSV import replaces the whole diary, like uploading a new file replaced
/// the working frame in the dashboard. The body is the raw CSV text.
pub async fn import_diary(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<Value>> {
    let entries = diary_csv::parse_diary(&body)?;
    if entries.is_empty() {
        return Err(AppError::Validation(format!(
            "CSV contained no diary entries. Expected columns: {}",
            diary_csv::EXPECTED_COLUMNS
        )));
    }

    let imported = state.diary.replace(entries).await;
    tracing::info!(imported, "Mood diary replaced from CSV import");

    Ok(Json(json!({ "imported": imported })))
}

pub async fn export_diary(State(state): State<AppState>) -> AppResult<Response> {
    let entries = state.diary.snapshot().await;
    let csv_text = diary_csv::write_diary(&entries)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"neurotwin_diary.csv\"",
            ),
        ],
        csv_text,
    )
        .into_response())
}
