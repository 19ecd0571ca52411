use thiserror::Error;

use crate::errors::domain::DomainError;

/// Application-level error for the CLI and configuration boundary.
///
/// Domain rejections stay as `DomainError` inside the engine; they are
/// converted here only when crossing into the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_, detail) => AppError::Validation { detail },
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            DomainError::Infra(_, detail) => AppError::Storage { detail },
        }
    }
}
