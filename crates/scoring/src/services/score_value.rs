//! Turns raw score text into a value the comparator can order.
//!
//! Parsing is deliberately fail-open: the fallible parsers below report what
//! went wrong, but [`comparable_value`] maps every failure to the worst
//! possible value for the score type, so a malformed submission sinks to the
//! bottom of the ranking instead of aborting the pass.

use crate::error::{Result, ScoreParseError};
use crate::models::ScoreType;

/// Comparable value for a raw score string under the given score type.
///
/// Never fails: unparseable or empty text degrades to `+∞` for times and
/// `-∞` for rep counts and loads.
pub fn comparable_value(score_type: ScoreType, text: &str) -> f64 {
    match score_type {
        ScoreType::Time => parse_time(text).unwrap_or(f64::INFINITY),
        ScoreType::Reps | ScoreType::Weight => parse_number(text).unwrap_or(f64::NEG_INFINITY),
    }
}

/// Parses `mm:ss` or `hh:mm:ss` into total seconds.
///
/// Non-hour fields are at most two digits; seconds stay below 60, and
/// minutes stay below 60 when an hour field is present.
pub fn parse_time(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ScoreParseError::Empty);
    }

    let invalid = || ScoreParseError::InvalidTime(text.to_string());

    let raw_fields: Vec<&str> = text.split(':').collect();
    if raw_fields.len() < 2 || raw_fields.len() > 3 {
        return Err(invalid());
    }

    let mut fields = Vec::with_capacity(raw_fields.len());
    for (position, raw) in raw_fields.iter().enumerate() {
        let is_hour_field = raw_fields.len() == 3 && position == 0;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !is_hour_field && raw.len() > 2 {
            return Err(invalid());
        }
        fields.push(raw.parse::<u32>().map_err(|_| invalid())?);
    }

    let total_seconds = match fields.as_slice() {
        [minutes, seconds] => {
            if *seconds >= 60 {
                return Err(invalid());
            }
            u64::from(*minutes) * 60 + u64::from(*seconds)
        }
        [hours, minutes, seconds] => {
            if *minutes >= 60 || *seconds >= 60 {
                return Err(invalid());
            }
            u64::from(*hours) * 3600 + u64::from(*minutes) * 60 + u64::from(*seconds)
        }
        _ => unreachable!("field count checked above"),
    };

    Ok(total_seconds as f64)
}

/// Parses a rep count or load. Accepts a decimal comma (`"102,5"`).
pub fn parse_number(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ScoreParseError::Empty);
    }

    let value: f64 = text
        .replace(',', ".")
        .parse()
        .map_err(|_| ScoreParseError::InvalidNumber(text.to_string()))?;

    // "inf"/"NaN" parse as f64 but would poison the ordering
    if !value.is_finite() {
        return Err(ScoreParseError::InvalidNumber(text.to_string()));
    }

    Ok(value)
}
