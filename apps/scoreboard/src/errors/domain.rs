//! Domain-level error type used across services and storage.
//!
//! This error type is UI- and storage-agnostic. The CLI returns
//! `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for user-input rejections.
///
/// Every rejection maps to exactly one kind; callers decide whether the kind
/// warrants a transient row-scoped message (see `ValidationKind::row_message`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Editing is locked; no state may change.
    EditLocked,
    /// Input is not an optionally-signed decimal integer.
    NotANumber,
    /// Festa value outside [-15, 25].
    FestaRangeExceeded,
    /// Standard value outside [0, max] or row sum would exceed max.
    LimitOrSumExceeded,
    /// Round id string did not parse.
    ParseRound,
    /// Seat outside 0..=3.
    InvalidSeat,
    /// Operation requires a festa round.
    NotAFestaRound,
    /// Saving requires an active, fully-scored game.
    GameNotFinished,
    Other(String),
}

impl ValidationKind {
    /// Transient row-scoped message for kinds the table surfaces inline.
    ///
    /// Kinds that are not row-scoped (locked edits, parse failures at the
    /// command boundary) return `None`.
    pub fn row_message(&self) -> Option<&'static str> {
        match self {
            ValidationKind::NotANumber => Some("Numbers only."),
            ValidationKind::FestaRangeExceeded => Some("Festa: only between -15 and 25."),
            ValidationKind::LimitOrSumExceeded => Some("Invalid value (limit/sum)."),
            _ => None,
        }
    }
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Round,
    HistoryEntry,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StorageUnavailable,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Kind accessor for validation errors (None otherwise).
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
