//! Axum router wiring for the port-range admin API.

use axum::{
    routing::{get, put},
    Router,
};

use crate::{api, app_state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(api::healthz))
        .route("/v1/port-ranges", get(api::list_ranges))
        .route("/v1/port-ranges/:scope/:protocol", put(api::put_range))
        .route("/v1/port-ranges/:scope/:protocol/effective", get(api::get_effective))
        .with_state(state)
}
