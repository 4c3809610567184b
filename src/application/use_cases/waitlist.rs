use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        backend_kind::BackendKind,
        waitlist_entry::{JoinOutcome, WaitlistEntry},
    },
    validators::is_plausible_email,
};

// ============================================================================
// Ports
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Exact-string lookup. No case folding, no trimming.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// Inserts the email unless it already exists. Returns `None` when the
    /// unique constraint swallowed the insert.
    async fn insert_if_absent(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// Round-trip to the store, used by the health check.
    async fn ping(&self) -> AppResult<()>;
}

#[async_trait]
pub trait WaitlistForwarder: Send + Sync {
    /// Sends one signup to the remote collector. Exactly one attempt.
    async fn forward(&self, email: &str) -> AppResult<JoinOutcome>;

    fn target(&self) -> ForwardingTarget;
}

/// Non-secret description of the remote collector, safe to expose on health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingTarget {
    pub host: String,
    pub source: String,
}

/// The configured destination for signups. Chosen once at startup.
#[derive(Clone)]
pub enum WaitlistBackend {
    Store(Arc<dyn WaitlistRepo>),
    Forward(Arc<dyn WaitlistForwarder>),
}

impl WaitlistBackend {
    pub fn kind(&self) -> BackendKind {
        match self {
            WaitlistBackend::Store(_) => BackendKind::Postgres,
            WaitlistBackend::Forward(_) => BackendKind::Forward,
        }
    }
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    backend: WaitlistBackend,
}

impl WaitlistUseCases {
    pub fn new(backend: WaitlistBackend) -> Self {
        Self { backend }
    }

    /// Validate, de-duplicate and record a signup.
    ///
    /// Duplicates are reported as `JoinOutcome::AlreadyListed`, never as an
    /// error, so resubmitting is always safe.
    #[instrument(skip(self))]
    pub async fn submit(&self, email: Option<&str>) -> AppResult<JoinOutcome> {
        let email = match email {
            Some(email) if is_plausible_email(email) => email,
            _ => return Err(AppError::InvalidEmail),
        };

        let outcome = match &self.backend {
            WaitlistBackend::Store(repo) => store_signup(repo.as_ref(), email).await?,
            WaitlistBackend::Forward(forwarder) => forwarder.forward(email).await?,
        };

        tracing::info!(outcome = ?outcome, backend = %self.backend.kind(), "Waitlist signup handled");
        Ok(outcome)
    }
}

async fn store_signup(repo: &dyn WaitlistRepo, email: &str) -> AppResult<JoinOutcome> {
    // Best-effort pre-check; the unique constraint decides concurrent races.
    if repo.find_by_email(email).await?.is_some() {
        return Ok(JoinOutcome::AlreadyListed);
    }

    match repo.insert_if_absent(email).await? {
        Some(entry) => {
            tracing::debug!(entry_id = entry.id, "Inserted waitlist entry");
            Ok(JoinOutcome::Added)
        }
        None => Ok(JoinOutcome::AlreadyListed),
    }
}
