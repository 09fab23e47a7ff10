//! Error responses for the REST API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::FieldErrors;

/// Message returned with every 500. Causes are logged, never sent.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Body of a 400 response: field name → messages.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

/// Body of a 500 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures a handler can turn into an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// Payload violated one or more field rules (400)
    Validation(FieldErrors),
    /// Body was not valid JSON for the expected shape (400)
    MalformedBody(String),
    /// Request did not declare a JSON body (415)
    UnsupportedMediaType(String),
    /// Identifier does not exist (404, empty body)
    NotFound,
    /// Anything unexpected (500, generic message)
    Internal,
}

fn validation_problem(errors: FieldErrors) -> Response {
    let body = ValidationProblem {
        title: VALIDATION_TITLE.to_string(),
        status: StatusCode::BAD_REQUEST.as_u16(),
        errors,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => validation_problem(errors),
            Self::MalformedBody(message) => {
                validation_problem(FieldErrors::from([("Body".to_string(), vec![message])]))
            }
            Self::UnsupportedMediaType(message) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal => {
                let body = ErrorResponse {
                    error: GENERIC_ERROR_MESSAGE.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
