use crate::board::BoardError;
use crate::config::ConfigError;
use crate::insights::export::ExportError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Body returned whenever the board cannot be read, whatever the cause.
pub const UPSTREAM_ERROR_MESSAGE: &str = "An error occurred retrieving the data.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("upstream board unavailable: {0}")]
    Upstream(#[from] BoardError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Upstream(_) => UPSTREAM_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({ "message": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
