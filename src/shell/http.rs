use axum::{
    Json, Router,
    routing::{any, get, patch},
};
use serde::Serialize;

use crate::modules::workshops::use_cases::manage_membership::inbound::http as membership_http;
use crate::modules::workshops::use_cases::manage_workshops::inbound::http as workshops_http;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Service is healthy",
        service: "Workshop",
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health))
        .route(
            "/workshop",
            get(workshops_http::list_all).post(workshops_http::create),
        )
        .route("/workshop/{creator_id}", get(workshops_http::list_by_organizer))
        .route(
            "/workshop/{creator_id}/{creation_timestamp}",
            patch(workshops_http::patch).delete(workshops_http::delete),
        )
        .route(
            "/workshop/register/{creator_id}/{creation_timestamp}",
            patch(membership_http::register),
        )
        .route(
            "/workshop/withdraw/{creator_id}/{creation_timestamp}",
            patch(membership_http::withdraw),
        )
        .with_state(state)
}
