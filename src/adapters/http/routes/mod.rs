pub mod health;
pub mod landing;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// Routes served under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/waitlist", waitlist::router())
        .nest("/health", health::router())
}
