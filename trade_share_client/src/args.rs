//! Command-line arguments for the share client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use trade_share_common::net::DEFAULT_BASE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a share link for a single trade.
    Link {
        /// Trade date as displayed on the card. Defaults to today (UTC).
        #[clap(long)]
        date: Option<String>,

        /// Profit or loss, e.g. `125.5` or `-40`.
        #[clap(long, allow_hyphen_values = true)]
        pnl: String,

        /// Holding duration, e.g. `2h`.
        #[clap(long)]
        duration: Option<String>,

        /// Free-form notes.
        #[clap(long)]
        notes: Option<String>,

        /// Screenshot URI.
        #[clap(long)]
        image: Option<String>,

        /// Page the link points at.
        #[clap(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Preview a share link (or a bare token) in the terminal.
    Show {
        /// Full share link, `?t=...` query, or raw token.
        input: String,
    },
}
