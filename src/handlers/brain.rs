use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::brain::{self, BrainView};
use crate::services::risk::RiskModel;
use crate::AppState;

/// Brain view-model for the current diary risk.
pub async fn get_brain_view(State(state): State<AppState>) -> AppResult<Json<BrainView>> {
    let entries = state.diary.snapshot().await;
    let assessment = RiskModel::new(state.config.risk_jitter).assess(&entries)?;

    Ok(Json(brain::brain_view(assessment.risk)))
}
