use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::risk::{self, RiskModel};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RiskSummaryResponse {
    pub risk: f64,
    pub avg_stress: f64,
    pub avg_sleep: f64,
    pub entries: usize,
    pub anxiety_level: &'static str,
    pub recommendation: &'static str,
    pub tips: Vec<&'static str>,
    pub crisis: CrisisInfo,
}

#[derive(Debug, Serialize)]
pub struct CrisisInfo {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub risk: f64,
}

pub async fn get_risk_summary(
    State(state): State<AppState>,
) -> AppResult<Json<RiskSummaryResponse>> {
    let entries = state.diary.snapshot().await;
    let assessment = RiskModel::new(state.config.risk_jitter).assess(&entries)?;

    let crisis = risk::is_crisis(assessment.risk);

    Ok(Json(RiskSummaryResponse {
        risk: assessment.risk,
        avg_stress: assessment.avg_stress,
        avg_sleep: assessment.avg_sleep,
        entries: assessment.entries,
        anxiety_level: risk::anxiety_level(assessment.risk),
        recommendation: risk::recommendation(assessment.risk),
        tips: risk::therapy_tips(assessment.risk).to_vec(),
        crisis: CrisisInfo {
            active: crisis,
            alert: crisis.then_some(risk::CRISIS_ALERT),
        },
    }))
}

/// Per-entry risk series in diary order. Always the plain formula; jitter
/// never applies row-wise.
pub async fn get_risk_trend(State(state): State<AppState>) -> AppResult<Json<Vec<TrendPoint>>> {
    let entries = state.diary.snapshot().await;
    if entries.is_empty() {
        return Err(AppError::EmptyDiary);
    }

    let points = entries
        .iter()
        .map(|e| TrendPoint {
            date: e.date,
            risk: risk::daily_risk(e),
        })
        .collect();

    Ok(Json(points))
}
