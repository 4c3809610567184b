//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{ForwardingTarget, WaitlistForwarder, WaitlistRepo},
    domain::entities::waitlist_entry::{JoinOutcome, WaitlistEntry},
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Enforces the unique email constraint inside `insert_if_absent`, the same
/// way the Postgres table does.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    hidden: HashSet<String>,
    lookups: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `find_by_email` miss this address, simulating a concurrent insert
    /// that lands between the duplicate check and the insert.
    pub fn hiding_from_lookup(mut self, email: &str) -> Self {
        self.hidden.insert(email.to_string());
        self
    }

    /// Insert a row directly, bypassing the use case.
    pub fn seed(&self, email: &str) -> WaitlistEntry {
        let mut entries = self.entries.lock().unwrap();
        let entry = WaitlistEntry {
            id: entries.len() as i32 + 1,
            email: email.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        entries.push(entry.clone());
        entry
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of duplicate checks performed.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.hidden.contains(email) {
            return Ok(None);
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert_if_absent(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == email) {
            return Ok(None);
        }
        let entry = WaitlistEntry {
            id: entries.len() as i32 + 1,
            email: email.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        entries.push(entry.clone());
        Ok(Some(entry))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Repo whose every call fails like an unreachable database.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn insert_if_absent(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::Database("connection refused".into()))
    }
}

#[derive(Clone, Copy)]
enum ForwardReply {
    Outcome(JoinOutcome),
    UpstreamStatus(u16),
    TransportFailure,
}

/// Forwarder that records every email it is given and replies with a fixed answer.
pub struct RecordingForwarder {
    sent: Mutex<Vec<String>>,
    reply: ForwardReply,
}

impl RecordingForwarder {
    pub fn answering(outcome: JoinOutcome) -> Self {
        Self::with_reply(ForwardReply::Outcome(outcome))
    }

    pub fn failing_upstream(status: u16) -> Self {
        Self::with_reply(ForwardReply::UpstreamStatus(status))
    }

    pub fn unreachable() -> Self {
        Self::with_reply(ForwardReply::TransportFailure)
    }

    fn with_reply(reply: ForwardReply) -> Self {
        Self {
            sent: Mutex::new(vec![]),
            reply,
        }
    }

    /// Emails forwarded so far (for test assertions).
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistForwarder for RecordingForwarder {
    async fn forward(&self, email: &str) -> AppResult<JoinOutcome> {
        self.sent.lock().unwrap().push(email.to_string());
        match self.reply {
            ForwardReply::Outcome(outcome) => Ok(outcome),
            ForwardReply::UpstreamStatus(status) => Err(AppError::Upstream { status }),
            ForwardReply::TransportFailure => {
                Err(AppError::Transport("connection timed out".into()))
            }
        }
    }

    fn target(&self) -> ForwardingTarget {
        ForwardingTarget {
            host: "collector.test".into(),
            source: "test-src".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_repo_round_trip() {
        let repo = InMemoryWaitlistRepo::new();

        let inserted = repo.insert_if_absent("a@b.com").await.unwrap().unwrap();
        let found = repo.find_by_email("a@b.com").await.unwrap();

        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn in_memory_repo_enforces_uniqueness() {
        let repo = InMemoryWaitlistRepo::new();

        assert!(repo.insert_if_absent("a@b.com").await.unwrap().is_some());
        assert!(repo.insert_if_absent("a@b.com").await.unwrap().is_none());
        assert_eq!(repo.get_all().len(), 1);
    }
}
