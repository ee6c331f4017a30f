//! Order wire-format parsing and result formatting.
//!
//! One order per line: `"WM0001 N5E10 06:00:00"` — ID, direction, and
//! arrival time separated by single spaces.
//!
//! - **ID**: `WM` followed by four digits.
//! - **Direction**: two legs, each an axis letter (`N`/`S`/`E`/`W`)
//!   followed by a non-negative integer; the order's distance is the
//!   Manhattan sum of the two legs. `N5E10` → 15 units.
//! - **Time**: zero-padded `HH:MM:SS`, `00:00:00..=23:59:59`.
//!
//! Dispatch results render back as `"WM0001 06:00:00"`.

use std::fmt;

use crate::models::{Dispatch, Order};

/// A wire-format parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line does not split into ID, direction, and time fields.
    MalformedLine,
    /// ID is not `WM` + four digits.
    InvalidId,
    /// Direction is not two axis-letter/integer legs.
    InvalidDirection,
    /// Time is not a valid `HH:MM:SS`.
    InvalidTime,
}

impl ParseError {
    fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses a `HH:MM:SS` string into seconds of day.
pub fn parse_time(text: &str) -> Result<i64, ParseError> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidTime,
            format!("Invalid time '{text}', expected HH:MM:SS"),
        )
    };

    let mut parts = text.split(':');
    let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(invalid()),
    };

    let field = |part: &str| -> Result<i64, ParseError> {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        part.parse().map_err(|_| invalid())
    };

    let (hours, minutes, seconds) = (field(hours)?, field(minutes)?, field(seconds)?);
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid());
    }
    Ok(hours * 3_600 + minutes * 60 + seconds)
}

/// Formats seconds of day as zero-padded `HH:MM:SS`.
pub fn format_secs(secs: i64) -> String {
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parses a direction like `N5E10` into its Manhattan distance.
pub fn parse_direction(text: &str) -> Result<i64, ParseError> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidDirection,
            format!("Invalid direction '{text}', expected e.g. N5E10"),
        )
    };

    let bytes = text.as_bytes();
    if bytes.is_empty() || !is_axis(bytes[0]) {
        return Err(invalid());
    }

    // Second axis letter separates the two legs.
    let split = bytes[1..]
        .iter()
        .position(|&b| is_axis(b))
        .map(|i| i + 1)
        .ok_or_else(|| invalid())?;

    let first_leg = &text[1..split];
    let second_leg = &text[split + 1..];
    if first_leg.is_empty() || second_leg.is_empty() {
        return Err(invalid());
    }

    let leg = |part: &str| -> Result<i64, ParseError> {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        part.parse().map_err(|_| invalid())
    };

    Ok(leg(first_leg)? + leg(second_leg)?)
}

/// Parses one `"ID DIRECTION HH:MM:SS"` line into an [`Order`].
pub fn parse_order(line: &str) -> Result<Order, ParseError> {
    let mut fields = line.split_whitespace();
    let (id, direction, time) = match (fields.next(), fields.next(), fields.next(), fields.next())
    {
        (Some(id), Some(direction), Some(time), None) => (id, direction, time),
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::MalformedLine,
                format!("Expected 'ID DIRECTION HH:MM:SS', got '{line}'"),
            ))
        }
    };

    if !is_valid_id(id) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidId,
            format!("Invalid order ID '{id}', expected WM + 4 digits"),
        ));
    }

    let distance = parse_direction(direction)?;
    let arrival_secs = parse_time(time)?;
    Ok(Order::new(id, distance, arrival_secs))
}

/// Parses a batch of lines; the first error aborts.
pub fn parse_orders<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Vec<Order>, ParseError> {
    lines.into_iter().map(parse_order).collect()
}

/// Formats a dispatch as `"WM0001 06:00:00"`.
pub fn format_dispatch(dispatch: &Dispatch) -> String {
    format!(
        "{} {}",
        dispatch.order_id,
        format_secs(dispatch.departure_secs)
    )
}

fn is_valid_id(id: &str) -> bool {
    id.len() == 6 && id.starts_with("WM") && id[2..].bytes().all(|b| b.is_ascii_digit())
}

fn is_axis(byte: u8) -> bool {
    matches!(byte, b'N' | b'S' | b'E' | b'W')
}
