use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{State, rejection::FormRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    use_cases::waitlist::WaitlistUseCases,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(join))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
struct JoinForm {
    email: Option<String>,
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/waitlist
/// Form-encoded `email`. A body that is not a form counts as a missing email.
async fn join(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    form: Result<Form<JoinForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let email = match form {
        Ok(Form(form)) => form.email,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable waitlist form");
            None
        }
    };

    let outcome = waitlist.submit(email.as_deref()).await?;

    Ok(Json(JoinResponse {
        success: true,
        message: outcome.message(),
    }))
}
