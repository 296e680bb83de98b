pub mod calculate;
pub mod example;
pub mod export;
pub mod health;
pub mod rates;
pub mod share;

use crate::config::Config;
use crate::engine::UnitCalculator;
use crate::error::AppError;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub calculator: Arc<UnitCalculator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let calculator = Arc::new(UnitCalculator::new(config.rates.clone()));
        Self { config, calculator }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/rates", get(rates::get_rates))
        .route("/v1/example", get(example::get_example))
        .route("/v1/calculate", post(calculate::post_calculate))
        .route("/v1/export", post(export::post_export))
        .route("/v1/share", post(share::post_share))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}
