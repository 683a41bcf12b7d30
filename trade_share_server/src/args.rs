//! Command-line arguments for the share server.
use clap::Parser;
use trade_share_common::net::DEFAULT_PORT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Serves read-only trade summary cards", long_about = None)]
pub struct Args {
    /// Interface address to listen on.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// TCP port for HTTP requests.
    #[clap(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
