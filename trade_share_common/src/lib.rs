//!
//! Common types and utilities shared by the trade share server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `ShareError` used across the workspace.
//! - `result` — handy `Result<T, ShareError>` alias.
//! - `codec` — share token decoding and encoding.
//! - `record` — decoded trade payload and the producer-side draft.
//! - `format` — currency formatting, sign tone, and value coercion.
//! - `view` — share view lifecycle and card display rules.
//! - `render` — HTML and terminal rendering of a view.
//! - `net` — shared constants and small helpers.
#![warn(missing_docs)]
pub mod codec;
pub mod error;
pub mod format;
pub mod net;
pub mod record;
pub mod render;
pub mod result;
pub mod view;

pub use codec::{decode, encode};
pub use error::ShareError;
pub use format::{Tone, format_currency, tone};
pub use record::{TradeDraft, TradeRecord};
pub use result::Result;
pub use view::{ShareView, TradeCard};
