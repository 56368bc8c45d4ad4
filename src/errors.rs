use crate::entities::ComplaintStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("An account with email {email} already exists")]
    EmailTaken { email: String },

    #[error("Account not found: {id}")]
    AccountNotFound { id: String },

    #[error("Complaint not found: {id}")]
    ComplaintNotFound { id: String },

    #[error("Report not found: {id}")]
    ReportNotFound { id: String },

    #[error("Complaint {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ComplaintStatus,
        to: ComplaintStatus,
    },

    #[error("Insufficient credits: balance {balance}, required {required}")]
    InsufficientCredits { balance: i64, required: i64 },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
