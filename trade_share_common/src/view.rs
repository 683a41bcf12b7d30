//! Share view state and card display rules.
//!
//! A view starts from the `t` query parameter. A usable token moves the view
//! to `Pending`; it becomes `Loaded` once the reveal delay has elapsed. Any
//! problem with the token lands in `Invalid`, which is terminal.
use std::time::Instant;

use url::Url;
use url::form_urlencoded;

use crate::codec;
use crate::format::{Coerce, Tone, format_currency, is_truthy, js_string, tone};
use crate::net::{REVEAL_DELAY, SHARE_PARAM};
use crate::record::TradeRecord;
use crate::Result;

/// Placeholder shown when the trade has no duration.
pub const NO_DURATION: &str = "—";
/// Placeholder shown when the trade has no notes.
pub const NO_NOTES: &str = "No notes provided";
/// Message shown in the invalid state.
pub const INVALID_MESSAGE: &str = "Invalid or missing trade data";

/// Extract the share token from a query string (`?` prefix optional).
///
/// Values are form-decoded, so `+` reads as a space. The first `t` wins.
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Extract the share token from a full share link.
pub fn token_from_url(link: &str) -> Result<Option<String>> {
    let url = Url::parse(link)?;
    Ok(url.query().and_then(token_from_query))
}

/// Build a share link by setting `t` on `base`, replacing any previous value.
pub fn share_link(base: &str, token: &str) -> Result<String> {
    let mut url = Url::parse(base)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(SHARE_PARAM, token);
    Ok(url.to_string())
}

/// Lifecycle of a share view.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareView {
    /// No usable trade data.
    Invalid,
    /// Decoded, waiting for the reveal delay to pass.
    Pending {
        /// Decoded payload.
        record: TradeRecord,
        /// Instant at which the card is revealed.
        reveal_at: Instant,
    },
    /// Decoded and revealed.
    Loaded(TradeRecord),
}

impl ShareView {
    /// Build the initial view for a token taken from the query string.
    ///
    /// An absent or empty token is invalid without attempting a decode.
    pub fn from_token(token: Option<&str>, now: Instant) -> Self {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return ShareView::Invalid;
        };
        match codec::decode(token) {
            Some(record) if record.is_present() => ShareView::Pending {
                record,
                reveal_at: now + REVEAL_DELAY,
            },
            _ => ShareView::Invalid,
        }
    }

    /// Build the initial view straight from a query string.
    pub fn from_query(query: &str, now: Instant) -> Self {
        Self::from_token(token_from_query(query).as_deref(), now)
    }

    /// Advance the view to `now`. Only `Pending` can change.
    pub fn tick(self, now: Instant) -> Self {
        match self {
            ShareView::Pending { record, reveal_at } if now >= reveal_at => {
                ShareView::Loaded(record)
            }
            other => other,
        }
    }

    /// When the pending card is due, if any.
    pub fn reveal_at(&self) -> Option<Instant> {
        match self {
            ShareView::Pending { reveal_at, .. } => Some(*reveal_at),
            _ => None,
        }
    }

    /// The decoded payload, unless the view is invalid.
    pub fn record(&self) -> Option<&TradeRecord> {
        match self {
            ShareView::Invalid => None,
            ShareView::Pending { record, .. } | ShareView::Loaded(record) => Some(record),
        }
    }

    /// Card contents, unless the view is invalid.
    pub fn card(&self) -> Option<TradeCard> {
        self.record().map(TradeCard::from_record)
    }

    /// Whether the card has been revealed.
    pub fn is_loaded(&self) -> bool {
        matches!(self, ShareView::Loaded(_))
    }

    /// Whether the view ended in the invalid state.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ShareView::Invalid)
    }
}

/// Display-ready strings for one trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeCard {
    /// Date as text; `undefined` when the payload has none.
    pub date: String,
    /// Formatted P&L amount.
    pub pnl: String,
    /// Style of the P&L amount.
    pub tone: Tone,
    /// Duration, or `—`.
    pub duration: String,
    /// Notes, or the no-notes placeholder.
    pub notes: String,
    /// Screenshot URI when one was shared.
    pub image: Option<String>,
}

impl TradeCard {
    /// Apply the display rules to a decoded payload.
    pub fn from_record(record: &TradeRecord) -> Self {
        let pnl = record.pnl();
        TradeCard {
            date: js_string(record.date()),
            pnl: format_currency(&pnl),
            tone: tone(pnl.to_number()),
            duration: text_or(record.duration(), NO_DURATION),
            notes: text_or(record.notes(), NO_NOTES),
            image: is_truthy(record.image()).then(|| js_string(record.image())),
        }
    }
}

fn text_or(value: Option<&serde_json::Value>, placeholder: &str) -> String {
    if is_truthy(value) {
        js_string(value)
    } else {
        String::from(placeholder)
    }
}
