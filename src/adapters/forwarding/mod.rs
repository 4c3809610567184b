use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{ForwardingTarget, WaitlistForwarder},
    domain::entities::waitlist_entry::JoinOutcome,
};

const MAX_BODY_LOG_LEN: usize = 200;

/// Forwards signups to an external waitlist-collection service.
#[derive(Clone)]
pub struct HttpWaitlistForwarder {
    client: Client,
    api_url: Url,
    source: String,
}

impl HttpWaitlistForwarder {
    /// `client` should come from `infra::http_client` so the call is time-bounded.
    pub fn new(client: Client, api_url: Url, source: String) -> Self {
        Self {
            client,
            api_url,
            source,
        }
    }
}

#[derive(Serialize)]
struct ForwardReq<'a> {
    email: &'a str,
    src: &'a str,
}

#[async_trait]
impl WaitlistForwarder for HttpWaitlistForwarder {
    async fn forward(&self, email: &str) -> AppResult<JoinOutcome> {
        let body = ForwardReq {
            email,
            src: &self.source,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, timeout = e.is_timeout(), "Waitlist API request failed");
                AppError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(JoinOutcome::Added);
        }

        // A body that fails mid-read is a transport failure, not a rejection.
        let text = response.text().await.map_err(|e| {
            tracing::error!(error = %e, status = status.as_u16(), "Waitlist API body read failed");
            AppError::Transport(e.to_string())
        })?;
        classify_rejection(status, &text)
    }

    fn target(&self) -> ForwardingTarget {
        ForwardingTarget {
            host: self.api_url.host_str().unwrap_or_default().to_string(),
            source: self.source.clone(),
        }
    }
}

/// Map a non-2xx response from the collector. 409 or any body mentioning
/// "already" (any case) means the email is on the list.
fn classify_rejection(status: StatusCode, body: &str) -> AppResult<JoinOutcome> {
    if status == StatusCode::CONFLICT || body.to_lowercase().contains("already") {
        return Ok(JoinOutcome::AlreadyListed);
    }

    let truncated: String = body.chars().take(MAX_BODY_LOG_LEN).collect();
    tracing::error!(status = status.as_u16(), body = %truncated, "Waitlist API error");
    Err(AppError::Upstream {
        status: status.as_u16(),
    })
}
