use dotenvy::dotenv;
use tracing::info;

use waitlist::infra::{
    app::create_app,
    error::InfraError,
    setup::{init_app_state, init_tracing, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let runtime = init_app_state().await?;

    let bind_addr = runtime.config.bind_addr;
    let app = create_app(runtime.app_state.clone(), runtime.config.cors_origin.clone());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!("Backend listening at {}", &listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InfraError::Server);

    // Close the pool whether or not the server exited cleanly.
    runtime.shutdown().await;
    served?;

    Ok(())
}
