//! Trade Share Client — builds shareable trade links and previews them in the
//! terminal. A link carries the whole trade in its `t` query parameter, so no
//! server round-trip is needed to read one back.
//!
//! Usage example (CLI):
//! ```bash
//! trade_share_client link --date 2024-01-01 --pnl 125.5 --duration 2h --notes "good trade"
//! trade_share_client show "http://localhost:8090/?t=eyJkYXRlIjoi..."
//! ```
#![warn(missing_docs)]
mod args;
mod share;

use crate::args::{Args, Command};
use clap::Parser;
use trade_share_common::Result;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    match args.command {
        Command::Link {
            date,
            pnl,
            duration,
            notes,
            image,
            base_url,
        } => {
            let draft = share::draft(date, pnl, duration, notes, image);
            println!("{}", share::build_link(&draft, &base_url)?);
        }
        Command::Show { input } => {
            print!("{}", share::preview(&input));
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
