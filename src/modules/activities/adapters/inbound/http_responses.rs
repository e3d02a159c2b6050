use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::EmailError;

#[derive(Debug, PartialEq, Eq)]
pub struct EmailQuery {
    pub email: String,
}

impl EmailQuery {
    /// Reads `email` from a raw query string. Only `%XX` escapes are decoded,
    /// so a literal `+` stays part of the address.
    pub fn from_raw(query: Option<&str>) -> Result<Self, HttpError> {
        let raw = query
            .unwrap_or_default()
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| *key == "email")
            .map(|(_, value)| value)
            .ok_or_else(|| {
                HttpError::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Missing required query parameter: email",
                )
            })?;
        let email = urlencoding::decode(raw)
            .map_err(|_| HttpError::new(StatusCode::BAD_REQUEST, "Invalid email address"))?;
        Ok(Self {
            email: email.into_owned(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error returned by every activities endpoint, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub detail: String,
}

impl HttpError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal(error: anyhow::Error) -> Self {
        tracing::error!(error = %error, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(error: ApplicationError) -> Self {
        let status = match &error {
            ApplicationError::Domain(DecideError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            _ => {
                tracing::error!(error = %error, "command failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, error.client_message())
    }
}

impl From<EmailError> for HttpError {
    fn from(error: EmailError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error.to_string())
    }
}
