//! Share token codec.
//!
//! A token is the standard-alphabet base64 encoding of the UTF-8 bytes of a
//! JSON document. Decoding mirrors what browsers accept in `atob`: ASCII
//! whitespace is ignored, padding is either complete or absent, and stray
//! trailing bits are discarded. Anything else that goes wrong (bad alphabet, truncated input,
//! non-UTF-8 bytes, invalid JSON) is a decode failure.
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine as _};
use serde::Serialize;
use serde_json::Value;

use crate::record::TradeRecord;
use crate::Result;

/// Base64 engine with browser-compatible decoding rules.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a share token, or `None` if it is not a valid payload.
///
/// Never panics and never logs; the caller decides how to present failure.
pub fn decode(token: &str) -> Option<TradeRecord> {
    try_decode(token).ok()
}

/// Decode a share token, reporting which step failed.
pub fn try_decode(token: &str) -> Result<TradeRecord> {
    let compact: String = token
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r'))
        .collect();
    let bytes = FORGIVING.decode(strip_padding(&compact)?)?;
    let text = std::str::from_utf8(&bytes)?;
    let value: Value = serde_json::from_str(text)?;
    Ok(TradeRecord::new(value))
}

/// Drop `=` padding, which is only allowed to complete a 4-character group.
fn strip_padding(compact: &str) -> Result<&str> {
    let body = if compact.len() % 4 == 0 {
        let trimmed = compact.strip_suffix('=').unwrap_or(compact);
        trimmed.strip_suffix('=').unwrap_or(trimmed)
    } else {
        compact
    };
    if body.contains('=') {
        return Err(DecodeError::InvalidPadding.into());
    }
    Ok(body)
}

/// Encode any serializable payload into a share token.
pub fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    let json = serde_json::to_vec(payload)?;
    Ok(STANDARD.encode(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShareError;
    use serde_json::json;

    #[test]
    fn round_trips_json_objects() {
        let samples = [
            json!({}),
            json!({"date": "2024-01-01", "pnl": "125.5", "duration": "2h", "notes": "good trade"}),
            json!({"date": "2024-03-03", "pnl": -7.25, "image": "https://example.com/a.png"}),
            json!({"notes": "préstamo 📈 株", "nested": {"a": [1, 2, null]}}),
        ];
        for sample in samples {
            let token = encode(&sample).unwrap();
            assert_eq!(decode(&token).map(TradeRecord::into_value), Some(sample));
        }
    }

    #[test]
    fn accepts_browser_style_tokens() {
        // {"pnl":1}
        let padded = "eyJwbmwiOjF9";
        assert!(decode(padded).is_some());
        // {"pnl":12} encodes with padding; accept it without.
        let token = encode(&json!({"pnl": 12})).unwrap();
        assert!(token.ends_with('='));
        assert_eq!(decode(token.trim_end_matches('=')), decode(&token));
        // Line-wrapped tokens.
        let wrapped = format!("{}\n{}", &token[..4], &token[4..]);
        assert_eq!(decode(&wrapped), decode(&token));
    }

    #[test]
    fn rejects_malformed_tokens() {
        let token = encode(&json!({"date": "2024-01-01", "pnl": "125.5"})).unwrap();
        let cases = [
            String::new(),
            String::from("!!!not-base64!!!"),
            token[..token.len() / 2].to_string(),
            STANDARD.encode("not json at all"),
            STANDARD.encode([0xffu8, 0xfe, 0x7b, 0x7d]),
            // {"pnl":12} with one of its two padding characters removed.
            String::from("eyJwbmwiOjEyfQ="),
            String::from("eyJwbmwiOjEyfQ==="),
            String::from("eyJw=mwiOjEyfQ=="),
        ];
        for case in &cases {
            assert!(decode(case).is_none(), "accepted {:?}", case);
        }
    }

    #[test]
    fn try_decode_names_the_failing_step() {
        assert!(matches!(try_decode("@@@@"), Err(ShareError::Base64(_))));
        assert!(matches!(
            try_decode("eyJwbmwiOjEyfQ="),
            Err(ShareError::Base64(DecodeError::InvalidPadding))
        ));
        assert!(matches!(
            try_decode(&STANDARD.encode([0xc3u8, 0x28])),
            Err(ShareError::Utf8(_))
        ));
        assert!(matches!(
            try_decode(&STANDARD.encode("{")),
            Err(ShareError::SerdeJson(_))
        ));
    }

    #[test]
    fn missing_fields_are_not_rejected() {
        let record = decode(&encode(&json!({"unexpected": 1})).unwrap()).unwrap();
        assert!(record.date().is_none());
        assert_eq!(record.field("unexpected"), Some(&json!(1)));
    }
}
