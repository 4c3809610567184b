//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` wired to in-memory mocks so
//! routes can be exercised without Postgres or a remote collector.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        health::HealthUseCases,
        waitlist::{WaitlistBackend, WaitlistUseCases},
    },
    infra::config::SiteConfig,
    test_utils::{FailingWaitlistRepo, InMemoryWaitlistRepo, RecordingForwarder},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new().build_with_store();
/// let server = TestServer::new(router().with_state(app_state)).unwrap();
/// ```
pub struct TestAppStateBuilder {
    site: SiteConfig,
    environment: String,
    public_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            site: SiteConfig {
                title: "Test Waitlist".to_string(),
                description: "Testing the waitlist.".to_string(),
                public_url: "http://localhost:3000/".parse().unwrap(),
            },
            environment: "test".to_string(),
            public_url: "http://localhost:3000/".to_string(),
        }
    }

    /// Set the landing page copy.
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Backed by an empty in-memory store. Returns the store for assertions.
    pub fn build_with_store(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = self.build(WaitlistBackend::Store(repo.clone()));
        (app_state, repo)
    }

    /// Backed by a store that fails every call.
    pub fn build_with_failing_store(self) -> AppState {
        self.build(WaitlistBackend::Store(Arc::new(FailingWaitlistRepo)))
    }

    /// Backed by the given forwarder. Returns it for assertions.
    pub fn build_with_forwarder(
        self,
        forwarder: RecordingForwarder,
    ) -> (AppState, Arc<RecordingForwarder>) {
        let forwarder = Arc::new(forwarder);
        let app_state = self.build(WaitlistBackend::Forward(forwarder.clone()));
        (app_state, forwarder)
    }

    /// Build the AppState around an explicit backend.
    pub fn build(self, backend: WaitlistBackend) -> AppState {
        let health_use_cases =
            HealthUseCases::new(backend.clone(), self.environment, self.public_url);

        AppState {
            site: Arc::new(self.site),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(backend)),
            health_use_cases: Arc::new(health_use_cases),
        }
    }
}
