//! Building share links and previewing them.
//!
//! `build_link` is the producer side of a share token; `preview` runs the
//! same decode and view lifecycle the server uses and renders the card as
//! text once the reveal delay has passed.
use chrono::Utc;
use log::{debug, info, warn};
use std::thread;
use std::time::Instant;
use trade_share_common::codec::try_decode;
use trade_share_common::render::render_text;
use trade_share_common::view::{INVALID_MESSAGE, share_link, token_from_query, token_from_url};
use trade_share_common::{Result, ShareView, TradeDraft, encode};

/// Fill in defaults for a draft: a missing date becomes today's UTC date.
pub fn draft(
    date: Option<String>,
    pnl: String,
    duration: Option<String>,
    notes: Option<String>,
    image: Option<String>,
) -> TradeDraft {
    let date = date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
    TradeDraft {
        date,
        pnl,
        duration: duration.filter(|s| !s.is_empty()),
        notes: notes.filter(|s| !s.is_empty()),
        image: image.filter(|s| !s.is_empty()),
    }
}

/// Encode `draft` and attach it to `base_url` as the `t` parameter.
pub fn build_link(draft: &TradeDraft, base_url: &str) -> Result<String> {
    let token = encode(draft)?;
    debug!("Encoded token: {}", token);
    let link = share_link(base_url, &token)?;
    info!("Share link built for trade on {}", draft.date);
    Ok(link)
}

/// Pull the token out of whatever the user pasted.
///
/// Accepts a full link, a query string starting with `?`, or a bare token.
pub fn extract_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.starts_with('?') {
        return token_from_query(input);
    }
    match token_from_url(input) {
        Ok(token) => token,
        Err(_) => Some(input.to_string()),
    }
}

/// Decode `input` and render the card, waiting out the reveal delay.
pub fn preview(input: &str) -> String {
    let token = extract_token(input);
    if let Some(token) = token.as_deref().filter(|t| !t.is_empty()) {
        if let Err(e) = try_decode(token) {
            warn!("Token rejected: {}", e);
        }
    }

    let mut view = ShareView::from_token(token.as_deref(), Instant::now());
    while let Some(reveal_at) = view.reveal_at() {
        thread::sleep(reveal_at.saturating_duration_since(Instant::now()));
        view = view.tick(Instant::now());
    }

    match view.card() {
        Some(card) => render_text(&card),
        None => format!("{}\n", INVALID_MESSAGE),
    }
}
