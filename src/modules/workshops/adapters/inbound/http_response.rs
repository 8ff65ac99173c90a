use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::workshops::core::errors::WorkshopError;

pub const INVALID_REQUEST_DATA: &str = "Invalid Request Data.";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

impl WorkshopError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkshopError::NotFound => StatusCode::NOT_FOUND,
            WorkshopError::Validation(_)
            | WorkshopError::AlreadyRegistered
            | WorkshopError::NotRegistered
            | WorkshopError::UnsupportedFieldType(_) => StatusCode::BAD_REQUEST,
            WorkshopError::Conflict => StatusCode::CONFLICT,
            WorkshopError::NoVacancy | WorkshopError::Decode(_) | WorkshopError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WorkshopError {
    fn into_response(self) -> Response {
        message(self.status_code(), self.to_string())
    }
}
