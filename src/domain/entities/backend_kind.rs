use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Where waitlist signups end up: a local Postgres table or a remote collector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BackendKind {
    #[default]
    Postgres,
    Forward,
}

impl BackendKind {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}
