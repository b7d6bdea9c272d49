// errors.rs
use astra::Response;
use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors surfaced to the person using the search form,
/// either from request validation or from the dataset layer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The listing table could not be loaded; the filter never runs.
    #[error("Dataset not loaded.")]
    DatasetUnavailable(String),

    #[error("{field} must be a number (got \"{value}\").")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::InvalidNumericInput { .. } => 400,
            ServerError::DatasetUnavailable(_) => 503,
            ServerError::InternalError => 500,
        }
    }

    /// Message shown to the user. Dataset detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ServerError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<DatasetError> for ServerError {
    fn from(err: DatasetError) -> Self {
        ServerError::DatasetUnavailable(err.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
