use thiserror::Error;

/// Errors that can occur while serving CRM operations.
#[derive(Debug, Error)]
pub enum CrmError {
    /// The record store answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected record shape: {0}")]
    InvalidRecord(String),
    #[error("this lead is already assigned to this account")]
    ActiveRelationExists,
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("column already exists: {0}")]
    ColumnExists(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl CrmError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_record(err: impl std::fmt::Display) -> Self {
        Self::InvalidRecord(err.to_string())
    }
}
