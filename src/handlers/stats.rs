use axum::{extract::State, Json};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AppResult;
use crate::AppState;

/// Ideal nightly sleep the debt tracker measures against.
const IDEAL_SLEEP_HOURS: f64 = 7.5;

/// How many trailing entries the stress heatmap shows.
const HEATMAP_WINDOW: usize = 7;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Serialize)]
pub struct SleepDebtResponse {
    pub entries: usize,
    pub total_sleep: f64,
    pub expected_sleep: f64,
    /// Positive when sleep is owed, negative when ahead of the ideal.
    pub sleep_debt: f64,
}

#[derive(Debug, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub stress: f64,
}

pub async fn get_sleep_debt(State(state): State<AppState>) -> AppResult<Json<SleepDebtResponse>> {
    let entries = state.diary.snapshot().await;

    let total_sleep: f64 = entries.iter().map(|e| e.sleep_hours).sum();
    let expected_sleep = entries.len() as f64 * IDEAL_SLEEP_HOURS;

    Ok(Json(SleepDebtResponse {
        entries: entries.len(),
        total_sleep,
        expected_sleep,
        sleep_debt: expected_sleep - total_sleep,
    }))
}

/// Stress cells for the last seven diary entries, weekday-labelled for the
/// day-by-date grid.
pub async fn get_stress_heatmap(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HeatmapCell>>> {
    let entries = state.diary.snapshot().await;
    let tail_start = entries.len().saturating_sub(HEATMAP_WINDOW);

    let cells = entries[tail_start..]
        .iter()
        .map(|e| HeatmapCell {
            date: e.date,
            weekday: DAY_NAMES[e.date.weekday().num_days_from_monday() as usize],
            stress: e.stress,
        })
        .collect();

    Ok(Json(cells))
}
