use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload. The auth service is not probed here.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub route_rules: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: state.app_name.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        route_rules: state.rules.len(),
    })
}
