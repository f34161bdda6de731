use thiserror::Error;

/// Error type shared by the domain, services, and storage layers.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Goal not found: {0}")]
    GoalNotFound(u64),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(i64),
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Structured rejection of user supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;
