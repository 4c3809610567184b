use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failure body shared by every waitlist error: `{success:false, error, code}`.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Database(_) | AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::InvalidEmail => tracing::debug!(error = %self, "Rejected submission"),
            _ => tracing::error!(error = ?self, "Request failed"),
        }

        let body = ErrorBody {
            success: false,
            error: self.user_message(),
            code: self.code().as_str(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
