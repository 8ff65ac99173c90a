use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::modules::workshops::adapters::inbound::http_response::{INVALID_REQUEST_DATA, message};
use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::field_patch::parse_field_patch;
use crate::modules::workshops::core::workshop::{NewWorkshop, WorkshopKey};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateWorkshopResponse {
    pub message: String,
    #[serde(rename = "Creation_Timestamp")]
    pub creation_timestamp: String,
}

pub async fn list_all(State(state): State<AppState>) -> Response {
    match state.workshops.list_all().await {
        Ok(workshops) => Json(workshops).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list_by_organizer(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
) -> Response {
    match state.workshops.list_by_organizer(&creator_id).await {
        Ok(workshops) => Json(workshops).into_response(),
        Err(WorkshopError::Store(_)) => message(
            StatusCode::NOT_FOUND,
            format!("Error querying items with Creator_Id: {creator_id}"),
        ),
        Err(error) => error.into_response(),
    }
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> Response {
    let new_workshop = match decode_new_workshop(&body) {
        Ok(new_workshop) => new_workshop,
        Err(error) => {
            debug!(%error, "rejected create workshop body");
            return error.into_response();
        }
    };

    match state.workshops.create(new_workshop).await {
        Ok(workshop) => {
            info!(workshop = %workshop.key(), "workshop created");
            (
                StatusCode::CREATED,
                Json(CreateWorkshopResponse {
                    message: "Workshop created successfully.".into(),
                    creation_timestamp: workshop.creation_timestamp,
                }),
            )
                .into_response()
        }
        Err(error) => error.into_response(),
    }
}

/// Field names match case-insensitively, an exact match taking precedence.
/// A missing organizer is reported before any other decoding problem, so a
/// body that is not a JSON object counts as missing its organizer.
fn decode_new_workshop(body: &[u8]) -> Result<NewWorkshop, WorkshopError> {
    let missing_organizer = || WorkshopError::Validation("Missing creator_ID".into());
    let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
        return Err(missing_organizer());
    };
    let fields = canonical_field_names(fields);
    let has_organizer = fields
        .get("Creator_Id")
        .and_then(Value::as_str)
        .is_some_and(|organizer_id| !organizer_id.is_empty());
    if !has_organizer {
        return Err(missing_organizer());
    }
    serde_json::from_value(Value::Object(fields))
        .map_err(|_| WorkshopError::Validation("Invalid request data.".into()))
}

fn canonical_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    let mut canonical = Map::new();
    let mut folded = Vec::new();
    for (name, value) in fields {
        match NewWorkshop::FIELD_NAMES
            .iter()
            .find(|field| field.eq_ignore_ascii_case(&name))
        {
            Some(field) if *field != name => folded.push((field.to_string(), value)),
            _ => {
                canonical.insert(name, value);
            }
        }
    }
    for (name, value) in folded {
        canonical.entry(name).or_insert(value);
    }
    canonical
}

pub async fn patch(
    State(state): State<AppState>,
    Path((creator_id, creation_timestamp)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let fields: Map<String, Value> = match serde_json::from_slice(&body) {
        Ok(fields) => fields,
        Err(error) => {
            debug!(%error, "rejected patch workshop body");
            return message(StatusCode::BAD_REQUEST, INVALID_REQUEST_DATA);
        }
    };
    let patch = match parse_field_patch(fields) {
        Ok(patch) => patch,
        Err(error) => {
            debug!(?error, "rejected patch workshop fields");
            return error.into_response();
        }
    };

    let key = WorkshopKey::new(creator_id, creation_timestamp);
    match state.workshops.patch_fields(&key, patch).await {
        Ok(()) => message(StatusCode::OK, "Workshop updated successfully."),
        Err(error) => error.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path((creator_id, creation_timestamp)): Path<(String, String)>,
) -> Response {
    let key = WorkshopKey::new(creator_id, creation_timestamp);
    match state.workshops.delete(&key).await {
        Ok(()) => message(
            StatusCode::OK,
            format!(
                "Workshop with creator_id {} and creation_timestamp {} deleted successfully.",
                key.organizer_id, key.creation_timestamp
            ),
        ),
        Err(error) => error.into_response(),
    }
}
