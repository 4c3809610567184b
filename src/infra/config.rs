use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

use crate::domain::entities::backend_kind::BackendKind;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Environment name reported by the health check (e.g., "production").
    pub environment: String,
    pub public_url: Url,
    pub cors_origin: HeaderValue,
    pub site: SiteConfig,
    pub backend: BackendConfig,
}

/// Copy rendered on the landing page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Canonical address used for `<link rel="canonical">` and `og:url`.
    pub public_url: Url,
}

pub enum BackendConfig {
    Postgres {
        /// Contains credentials; never log it.
        database_url: SecretString,
        max_connections: u32,
    },
    Forward {
        api_url: Url,
        /// Static tag sent as `src` with every forwarded signup.
        source: String,
        timeout: Duration,
    },
}

impl BackendConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendConfig::Postgres { .. } => BackendKind::Postgres,
            BackendConfig::Forward { .. } => BackendKind::Forward,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3000".parse().unwrap());
        let environment: String = get_env_default("APP_ENV", "development".to_string());
        let public_url: Url = get_env_default("PUBLIC_URL", "http://localhost:3000".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let site = SiteConfig {
            title: get_env_default("SITE_TITLE", "Join the waitlist".to_string()),
            description: get_env_default(
                "SITE_DESCRIPTION",
                "Be the first to know when we launch.".to_string(),
            ),
            public_url: public_url.clone(),
        };

        let backend_kind: BackendKind = get_env_default("WAITLIST_BACKEND", BackendKind::Postgres);
        let backend = match backend_kind {
            BackendKind::Postgres => BackendConfig::Postgres {
                database_url: SecretString::new(get_env::<String>("DATABASE_URL").into()),
                max_connections: get_env_default("DATABASE_MAX_CONNECTIONS", 5),
            },
            BackendKind::Forward => {
                let timeout_secs: u64 = get_env_default("WAITLIST_API_TIMEOUT_SECS", 10);
                BackendConfig::Forward {
                    api_url: get_env("WAITLIST_API_URL"),
                    source: get_env_default("WAITLIST_SRC", "landing-page".to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                }
            }
        };

        Self {
            bind_addr,
            environment,
            public_url,
            cors_origin,
            site,
            backend,
        }
    }
}
