use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::modules::workshops::adapters::inbound::http_response::{INVALID_REQUEST_DATA, message};
use crate::modules::workshops::core::workshop::WorkshopKey;
use crate::shell::state::AppState;

pub const USER_ID: &str = "User_Id";

pub async fn register(
    State(state): State<AppState>,
    Path((creator_id, creation_timestamp)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let participant_id = match participant_id(&body) {
        Ok(participant_id) => participant_id,
        Err(response) => return response,
    };
    let key = WorkshopKey::new(creator_id, creation_timestamp);
    match state.membership.join(&key, &participant_id).await {
        Ok(_) => message(StatusCode::OK, "Registration successful!"),
        Err(error) => error.into_response(),
    }
}

pub async fn withdraw(
    State(state): State<AppState>,
    Path((creator_id, creation_timestamp)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let participant_id = match participant_id(&body) {
        Ok(participant_id) => participant_id,
        Err(response) => return response,
    };
    let key = WorkshopKey::new(creator_id, creation_timestamp);
    match state.membership.leave(&key, &participant_id).await {
        Ok(_) => message(StatusCode::OK, "Withdrawal successful!"),
        Err(error) => error.into_response(),
    }
}

/// The body is read as JSON whatever its declared content type.
fn participant_id(body: &[u8]) -> Result<String, Response> {
    let fields: Map<String, Value> = serde_json::from_slice(body).map_err(|error| {
        debug!(%error, "rejected membership body");
        message(StatusCode::BAD_REQUEST, INVALID_REQUEST_DATA)
    })?;
    fields
        .get(USER_ID)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| message(StatusCode::BAD_REQUEST, "User_Id given is not a string!"))
}
