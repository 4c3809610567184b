use std::fs::File;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{
        forwarding::HttpWaitlistForwarder, http::app_state::AppState,
        persistence::PostgresPersistence,
    },
    infra::{
        config::{AppConfig, BackendConfig},
        error::InfraError,
        http_client::try_build_client_with_timeout,
        postgres_persistence,
    },
    use_cases::{
        health::HealthUseCases,
        waitlist::{WaitlistBackend, WaitlistUseCases},
    },
};

const LOG_FILE: &str = "app.log";

/// Everything built at startup. Owns the persistence handle so it can be
/// closed explicitly once the server has drained.
pub struct AppRuntime {
    pub config: AppConfig,
    pub app_state: AppState,
    persistence: Option<PostgresPersistence>,
}

impl AppRuntime {
    pub async fn shutdown(self) {
        if let Some(persistence) = self.persistence {
            persistence.close().await;
            info!("Database pool closed");
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppRuntime> {
    let config = AppConfig::from_env();

    let (backend, persistence) = match &config.backend {
        BackendConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let persistence = postgres_persistence(database_url, *max_connections).await?;
            (
                WaitlistBackend::Store(Arc::new(persistence.clone())),
                Some(persistence),
            )
        }
        BackendConfig::Forward {
            api_url,
            source,
            timeout,
        } => {
            if api_url.host_str().is_none() {
                return Err(InfraError::ForwardingUrl.into());
            }
            let client = try_build_client_with_timeout(*timeout).map_err(InfraError::HttpClient)?;
            let forwarder = HttpWaitlistForwarder::new(client, api_url.clone(), source.clone());
            (WaitlistBackend::Forward(Arc::new(forwarder)), None)
        }
    };

    info!(backend = %config.backend.kind(), "Waitlist backend configured");

    let waitlist_use_cases = WaitlistUseCases::new(backend.clone());
    let health_use_cases = HealthUseCases::new(
        backend,
        config.environment.clone(),
        config.public_url.to_string(),
    );

    let app_state = AppState {
        site: Arc::new(config.site.clone()),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        health_use_cases: Arc::new(health_use_cases),
    };

    Ok(AppRuntime {
        config,
        app_state,
        persistence,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped if the file can't be created
    let json_layer = File::create(LOG_FILE).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
