use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    infra::config::SiteConfig,
    use_cases::{health::HealthUseCases, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub health_use_cases: Arc<HealthUseCases>,
}

impl FromRef<AppState> for Arc<WaitlistUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist_use_cases.clone()
    }
}
