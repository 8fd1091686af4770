//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

async fn ctrl_c() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

    Ok("ctrl_c")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok("terminate")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for Ctrl+C or SIGTERM, then let in-flight checkout requests finish
/// before the server stops.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = tokio::select! {
        result = ctrl_c() => result?,
        result = terminate() => result?,
    };

    info!(signal, "shutdown signal received");

    handle.stop_graceful(None);

    Ok(())
}
