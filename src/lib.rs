use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use config::Config;
use store::DiaryStore;

#[derive(Clone)]
pub struct AppState {
    pub diary: DiaryStore,
    pub config: Arc<Config>,
}

/// Build the API router. Exported so integration tests can drive the real
/// routes without binding a listener.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Diary entries
        .route("/api/entries", get(handlers::entries::list_entries))
        .route("/api/entries", post(handlers::entries::create_entry))
        // CSV in/out
        .route("/api/diary/import", post(handlers::diary::import_diary))
        .route("/api/diary/export", get(handlers::diary::export_diary))
        // Risk
        .route("/api/risk", get(handlers::risk::get_risk_summary))
        .route("/api/risk/trend", get(handlers::risk::get_risk_trend))
        // Brain view-model
        .route("/api/brain", get(handlers::brain::get_brain_view))
        // Voice tone
        .route("/api/voice/analyze", post(handlers::voice::analyze_voice))
        // Stats
        .route("/api/stats/sleep-debt", get(handlers::stats::get_sleep_debt))
        .route("/api/stats/heatmap", get(handlers::stats::get_stress_heatmap))
        .with_state(state)
}
