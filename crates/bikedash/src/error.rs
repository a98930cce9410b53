//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use bikedash_common::DashError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A query parameter could not be used.
    #[error("Invalid '{field}' parameter: {message}")]
    BadRequest {
        /// Parameter name.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Failure inside the dashboard pipeline.
    #[error(transparent)]
    Dash(#[from] DashError),
}

impl AppError {
    /// Status code the error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Dash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Dash(DashError::Graph { .. }) => "GRAPH_ERROR",
            Self::Dash(_) => "INTERNAL_ERROR",
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            error!(error = %self, "request failed");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = ApiError {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// An [`AppError`] rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        let status = self.0.status();
        let body = crate::page::render_error(status, &self.0.to_string());
        (status, Html(body)).into_response()
    }
}
