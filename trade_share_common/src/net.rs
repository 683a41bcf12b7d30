//! Shared constants and small helpers used by server and client.
use std::time::Duration;

/// Query parameter carrying the encoded trade token.
pub const SHARE_PARAM: &str = "t";
/// Default HTTP port of the share server.
pub const DEFAULT_PORT: u16 = 8090;
/// Base URL used by the client when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090/";
/// Delay between a successful decode and revealing the card.
pub const REVEAL_DELAY: Duration = Duration::from_millis(200);
/// Currency symbol placed before the digits of a P&L amount.
pub const CURRENCY_PREFIX: &str = "US$";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}
