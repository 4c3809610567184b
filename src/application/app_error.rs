use thiserror::Error;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Unable to join waitlist right now. Please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream responded with status {status}")]
    Upstream { status: u16 },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidEmail => ErrorCode::InvalidEmail,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Transport(_) => ErrorCode::TransportError,
            AppError::Upstream { .. } => ErrorCode::UpstreamError,
        }
    }

    /// The fixed message shown to the submitter. Never carries internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            AppError::Upstream { .. } => UPSTREAM_FAILURE_MESSAGE,
            AppError::Database(_) | AppError::Transport(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidEmail,
    DatabaseError,
    TransportError,
    UpstreamError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::TransportError => "TRANSPORT_ERROR",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
