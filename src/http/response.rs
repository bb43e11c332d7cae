//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - Define the JSON message body shared by every non-record response
//! - Map catalog failures to HTTP status codes
//!
//! # Design Decisions
//! - Not-found is a fixed message, never fatal
//! - Unexpected failures carry a `detail` string derived from the cause

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Equipo no encontrado";
pub const CREATE_FAILED_MESSAGE: &str = "Error al crear el disco";
pub const DELETE_FAILED_MESSAGE: &str = "Error al eliminar el disco";
pub const DELETED_MESSAGE: &str = "Disco eliminado correctamente";

/// `{ "message": ..., "detail"?: ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Errors surfaced by the catalog HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested id does not exist (or is not an id at all).
    #[error("record not found")]
    NotFound,

    /// Creating a record failed; carries the underlying cause.
    #[error("create failed: {0}")]
    Create(String),

    /// Deleting a record failed; carries the underlying cause.
    #[error("delete failed: {0}")]
    Delete(String),
}

impl ApiError {
    /// Classify a store failure raised while creating a record.
    pub fn from_create(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Create(other.to_string()),
        }
    }

    /// Classify a store failure raised while deleting a record.
    pub fn from_delete(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Delete(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Create(_) | ApiError::Delete(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> MessageBody {
        match self {
            ApiError::NotFound => MessageBody::new(NOT_FOUND_MESSAGE),
            ApiError::Create(detail) => MessageBody::with_detail(CREATE_FAILED_MESSAGE, detail),
            ApiError::Delete(detail) => MessageBody::with_detail(DELETE_FAILED_MESSAGE, detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
