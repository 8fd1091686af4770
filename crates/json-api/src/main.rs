//! Vitrine JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use vitrine_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod quotes;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Vitrine JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app = AppContext::in_memory(config.app_settings());

    let router = router::with_docs(router::app_router(State::from_app_context(app)));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router::service(router)).await;

    observability.shutdown();
}
