use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Dataset contains no measurements")]
    EmptyDataset,

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
