use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use neurotwin_api::config::Config;
use neurotwin_api::services::diary_csv;
use neurotwin_api::store::DiaryStore;
use neurotwin_api::{app, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neurotwin_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    let diary = DiaryStore::new();
    seed_sample_diary(&diary, &config.sample_data_path).await;

    let state = AppState {
        diary,
        config: config.clone(),
    };

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = app(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Seed the diary from the sample CSV when one is present. A missing or
/// unreadable sample is a degraded start, not a fatal one.
async fn seed_sample_diary(diary: &DiaryStore, path: &str) {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => {
            tracing::info!(path, "No sample diary found; starting empty");
            return;
        }
    };

    match diary_csv::parse_diary(&text) {
        Ok(entries) if !entries.is_empty() => {
            let seeded = diary.replace(entries).await;
            tracing::info!(seeded, path, "Seeded diary from sample data");
        }
        Ok(_) => tracing::warn!(path, "Sample diary has no rows; starting empty"),
        Err(e) => tracing::warn!(error = %e, path, "Sample diary failed to parse; starting empty"),
    }
}
