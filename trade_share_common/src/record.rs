//! Trade payload types.
//!
//! `TradeRecord` is what a share token decodes to: the parsed JSON value kept
//! exactly as received, with read-only accessors for the fields the card
//! displays. `TradeDraft` is the typed producer-side shape used to build new
//! share links.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::is_truthy;
use crate::Result;

/// Field names recognised in a trade payload.
pub mod keys {
    /// Display date of the trade.
    pub const DATE: &str = "date";
    /// Profit or loss amount, string or number.
    pub const PNL: &str = "pnl";
    /// Free-form holding duration.
    pub const DURATION: &str = "duration";
    /// Free-form trader notes.
    pub const NOTES: &str = "notes";
    /// Screenshot URI.
    pub const IMAGE: &str = "image";
}

/// A decoded trade payload.
///
/// No schema is enforced: unknown keys are kept and expected keys may be
/// missing. A payload that is not a JSON object behaves as one with every
/// field missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeRecord(Value);

impl TradeRecord {
    /// Wrap an already-parsed JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw access to any field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display date, if any.
    pub fn date(&self) -> Option<&Value> {
        self.field(keys::DATE)
    }

    /// Profit or loss amount, if any.
    pub fn pnl(&self) -> Option<&Value> {
        self.field(keys::PNL)
    }

    /// Holding duration, if any.
    pub fn duration(&self) -> Option<&Value> {
        self.field(keys::DURATION)
    }

    /// Trader notes, if any.
    pub fn notes(&self) -> Option<&Value> {
        self.field(keys::NOTES)
    }

    /// Screenshot URI, if any.
    pub fn image(&self) -> Option<&Value> {
        self.field(keys::IMAGE)
    }

    /// Whether the payload as a whole counts as present.
    ///
    /// `null`, `false`, `0` and `""` decode fine but are treated as no trade.
    pub fn is_present(&self) -> bool {
        is_truthy(Some(&self.0))
    }

    /// Take the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Trade fields as entered by the person sharing the trade.
///
/// Optional fields are omitted from the payload when `None`, which keeps
/// tokens short and lets the card show its placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDraft {
    /// Display date, no enforced format.
    pub date: String,
    /// P&L as typed, e.g. `"125.5"` or `"-40"`.
    pub pnl: String,
    /// Holding duration, e.g. `"2h"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Screenshot URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TradeDraft {
    /// Creates a draft with only the mandatory fields.
    pub fn new(date: &str, pnl: &str) -> Self {
        TradeDraft {
            date: String::from(date),
            pnl: String::from(pnl),
            duration: None,
            notes: None,
            image: None,
        }
    }

    /// Convert into the generic record shape a token decodes to.
    pub fn to_record(&self) -> Result<TradeRecord> {
        Ok(TradeRecord::new(serde_json::to_value(self)?))
    }
}
