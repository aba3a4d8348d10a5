//! Gateway runtime — tracing, bind, serve, graceful shutdown.

use std::sync::Arc;

use clipper_core::Config;
use clipper_github::{GithubContents, RemoteContents};

use crate::error::ServerError;
use crate::gateway::{router, AppState};

/// Start the gateway and block the current thread until it exits.
pub fn start_blocking(config: Config) -> Result<(), ServerError> {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;
    runtime.block_on(run(config))
}

/// Run the gateway against the real GitHub contents API.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let host: Arc<dyn RemoteContents + Send + Sync> = Arc::new(GithubContents::new(&config));
    serve(config, host).await
}

/// Run the gateway against an arbitrary contents host.
pub async fn serve(
    config: Config,
    host: Arc<dyn RemoteContents + Send + Sync>,
) -> Result<(), ServerError> {
    let state = AppState::new(&config, host)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source: e,
        })?;
    tracing::info!(
        addr = %config.bind_addr,
        repo = %config.repo,
        branch = %config.branch,
        "clip gateway listening",
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down gateway"),
        Err(err) => tracing::error!(error = %err, "ctrl-c handler failed"),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
