use chrono::NaiveDateTime;
use serde::Serialize;

/// A single stored signup. Rows are only ever inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: i32,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Successful result of a submission. Both variants are reported as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Added,
    AlreadyListed,
}

impl JoinOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            JoinOutcome::Added => "Welcome to the community! You've been added to the waitlist.",
            JoinOutcome::AlreadyListed => "You're already on the list! We'll be in touch soon.",
        }
    }
}
