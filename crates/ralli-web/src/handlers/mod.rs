//! Request handlers

pub mod admin;
pub mod health;
pub mod pages;

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Error body for failed reads
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

/// Error half of a JSON handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<ralli_core::Error> for ErrorResponse {
    fn from(error: ralli_core::Error) -> Self {
        Self {
            error: error.to_string(),
            code: "STORE_ERROR".to_string(),
        }
    }
}
