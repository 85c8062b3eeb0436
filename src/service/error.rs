use crate::error::{ErrorMessage, HttpError};
use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Project {0} not found")]
    ProjectNotFound(Uuid),

    #[error("Phase {0} not found")]
    PhaseNotFound(Uuid),

    #[error("Payment node {0} not found")]
    PaymentNodeNotFound(Uuid),

    #[error("{}", ErrorMessage::InvalidContractAmount)]
    InvalidContractAmount,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ProjectNotFound(_)
            | ServiceError::PhaseNotFound(_)
            | ServiceError::PaymentNodeNotFound(_) => HttpError::not_found(error.to_string()),

            ServiceError::InvalidContractAmount | ServiceError::Validation(_) => {
                HttpError::bad_request(error.to_string())
            }

            _ => HttpError::server_error(error.to_string()),
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ProjectNotFound(_)
            | ServiceError::PhaseNotFound(_)
            | ServiceError::PaymentNodeNotFound(_) => StatusCode::NOT_FOUND,

            ServiceError::InvalidContractAmount | ServiceError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }

            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
