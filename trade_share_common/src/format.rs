//! Display formatting for trade values.
//!
//! Payload fields arrive as loosely-typed JSON, so every helper here coerces
//! its input the same way a browser would (`parseFloat`, `Number`, `String`
//! and truthiness) and never fails: anything that does not coerce cleanly
//! falls back to a neutral default.
use serde_json::Value;
use strum::Display;

use crate::net::CURRENCY_PREFIX;

/// Sign classification of a P&L amount, used to pick a display style.
///
/// `Display` yields the CSS class name used by the HTML renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Tone {
    /// Strictly greater than zero.
    #[strum(serialize = "pos")]
    Positive,
    /// Strictly less than zero.
    #[strum(serialize = "neg")]
    Negative,
    /// Zero, or not a number at all.
    #[strum(serialize = "neu")]
    Neutral,
}

/// Classify a numeric value by sign. NaN is `Neutral`.
pub fn tone(value: f64) -> Tone {
    if value > 0.0 {
        Tone::Positive
    } else if value < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Values that can be coerced to a float for display.
pub trait Coerce {
    /// Lenient coercion: the longest numeric prefix of the value's text form.
    fn parse_float(&self) -> f64;
    /// Strict coercion: the whole text form must be numeric, blanks are zero.
    fn to_number(&self) -> f64;
}

impl Coerce for f64 {
    fn parse_float(&self) -> f64 {
        *self
    }

    fn to_number(&self) -> f64 {
        *self
    }
}

impl Coerce for str {
    fn parse_float(&self) -> f64 {
        parse_float(self)
    }

    fn to_number(&self) -> f64 {
        string_to_number(self)
    }
}

impl Coerce for String {
    fn parse_float(&self) -> f64 {
        parse_float(self)
    }

    fn to_number(&self) -> f64 {
        string_to_number(self)
    }
}

impl Coerce for Value {
    fn parse_float(&self) -> f64 {
        match self {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            other => parse_float(&js_string(Some(other))),
        }
    }

    fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => string_to_number(s),
            Value::Array(_) => string_to_number(&js_string(Some(self))),
            Value::Object(_) => f64::NAN,
        }
    }
}

/// A missing field coerces to NaN either way.
impl Coerce for Option<&Value> {
    fn parse_float(&self) -> f64 {
        self.map_or(f64::NAN, |v| v.parse_float())
    }

    fn to_number(&self) -> f64 {
        self.map_or(f64::NAN, |v| v.to_number())
    }
}

/// Format an amount as `US$` with two decimals and a leading minus for losses.
///
/// Input that does not parse as a number renders as `US$0.00`.
pub fn format_currency<T: Coerce + ?Sized>(value: &T) -> String {
    let v = value.parse_float();
    if v.is_nan() {
        return format!("{}0.00", CURRENCY_PREFIX);
    }
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_PREFIX, to_fixed_2(v.abs()))
}

/// Two-decimal rendering of a non-negative value, ties rounded up.
fn to_fixed_2(v: f64) -> String {
    if v.is_infinite() {
        return String::from("Infinity");
    }
    // Exact ties at the third decimal are the odd multiples of 1/8.
    let eighths = v * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let exact = format!("{:.3}", v);
        return increment_last_digit(&exact[..exact.len() - 1]);
    }
    format!("{:.2}", v)
}

/// Add one unit in the last place of a plain decimal string ("0.99" -> "1.00").
fn increment_last_digit(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for i in (0..out.len()).rev() {
        match out[i] {
            b'.' => continue,
            b'9' => out[i] = b'0',
            d => {
                out[i] = d + 1;
                return String::from_utf8_lossy(&out).into_owned();
            }
        }
    }
    let mut carried = String::from("1");
    carried.push_str(&String::from_utf8_lossy(&out));
    carried
}

/// `parseFloat`: skip leading whitespace, read the longest decimal prefix.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_js_whitespace);
    match numeric_prefix(trimmed) {
        Some(end) => parse_decimal(&trimmed[..end]),
        None => f64::NAN,
    }
}

/// `Number(text)`: the whole trimmed string must be numeric; blank is zero.
fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.starts_with('+') {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    match numeric_prefix(trimmed) {
        Some(end) if end == trimmed.len() => parse_decimal(trimmed),
        _ => f64::NAN,
    }
}

fn parse_decimal(literal: &str) -> f64 {
    let unsigned = literal.trim_start_matches(['+', '-']);
    let negative = literal.starts_with('-');
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };
    if negative { -magnitude } else { magnitude }
}

/// Byte length of the longest `[+-](Infinity | digits[.digits][e[+-]digits])`
/// prefix, or `None` when there is no digit to read.
fn numeric_prefix(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if text[i..].starts_with("Infinity") {
        return Some(i + "Infinity".len());
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(i)
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Browser-style truthiness of an optional JSON value.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Browser-style string conversion of an optional JSON value.
///
/// A missing value becomes the text `undefined`.
pub fn js_string(value: Option<&Value>) -> String {
    match value {
        None => String::from("undefined"),
        Some(Value::Null) => String::from("null"),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.as_f64().map_or_else(|| n.to_string(), js_number),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => String::from("[object Object]"),
    }
}

/// Browser-style text of a finite number: plain digits between 1e-6 and
/// 1e21, shortest exponent form outside that range.
pub fn js_number(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}
