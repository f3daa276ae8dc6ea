// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Failure reported by the driver or the database, passed through as-is.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
    #[error("article update requires at least one field")]
    EmptyPatch,
}

/// Schema constraint classes, keyed on the `PostgreSQL` SQLSTATE code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    NotNull,
    Unique,
    Check,
    ForeignKey,
}

impl ConstraintViolation {
    #[must_use]
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23502" => Some(Self::NotNull),
            "23505" => Some(Self::Unique),
            "23514" => Some(Self::Check),
            "23503" => Some(Self::ForeignKey),
            _ => None,
        }
    }
}

impl DomainError {
    /// Inspects a storage error for a schema constraint violation without
    /// altering it.
    #[must_use]
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        match self {
            Self::Storage(sqlx::Error::Database(db_err)) => db_err
                .code()
                .and_then(|code| ConstraintViolation::from_sqlstate(code.as_ref())),
            _ => None,
        }
    }

    /// Name of the violated constraint, when the database reports one.
    #[must_use]
    pub fn constraint_name(&self) -> Option<&str> {
        match self {
            Self::Storage(sqlx::Error::Database(db_err)) => db_err.constraint(),
            _ => None,
        }
    }
}
