//! Trade share HTTP server.
//!
//! Serves a read-only trade summary card for any `GET` request whose query
//! carries a `t` parameter. The trade lives entirely in that parameter: there
//! is no storage and no upstream call. Requests are handled by an axum router
//! on the tokio runtime; Ctrl+C stops accepting and lets in-flight requests
//! finish.
//!
//! Usage example:
//! ```bash
//! trade_share_server --bind 127.0.0.1 --port 8090
//! ```
#![warn(missing_docs)]
use crate::args::Args;
use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;
use trade_share_common::net::addr;
use trade_share_common::{Result, ShareError};

mod args;
mod routes;

#[tokio::main]
async fn main() -> Result<(), ShareError> {
    init_logger();
    let args = Args::parse();

    let listener = TcpListener::bind(addr(&args.bind, args.port)).await?;
    info!("Listening on: {}", listener.local_addr()?);

    axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Error setting Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
