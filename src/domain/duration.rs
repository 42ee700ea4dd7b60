// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compact time-span parsing.
//!
//! Durations are written as a sequence of `<number><unit>` tokens such as
//! `"300ms"`, `"1.5h"` or `"1h15m30s"`, with an optional leading sign.
//! Recognised units are `ns`, `us` (also `µs` and `μs`), `ms`, `s`, `m` and `h`.
//! A bare number is rejected, except for the literal `"0"`.
//!
//! Parsed values are signed nanosecond counts bounded to the `i64` range.

use std::time::Duration;
use thiserror::Error;

/// Largest magnitude accumulated while parsing (`|i64::MIN|`).
const MAGNITUDE_LIMIT: u64 = 1 << 63;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Errors produced by [`parse_duration`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationParseError {
    /// The input was empty (or only a sign).
    #[error("empty duration")]
    Empty,

    /// The input does not follow the `<number><unit>` grammar.
    #[error("invalid duration '{input}'")]
    Invalid {
        /// The rejected input
        input: String,
    },

    /// A number was not followed by a unit.
    #[error("missing unit in duration '{input}'")]
    MissingUnit {
        /// The rejected input
        input: String,
    },

    /// A unit suffix was not recognised.
    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit {
        /// The unrecognised unit
        unit: String,
        /// The rejected input
        input: String,
    },

    /// The value does not fit in a signed 64-bit nanosecond count.
    #[error("duration '{input}' is out of range")]
    Overflow {
        /// The rejected input
        input: String,
    },

    /// The value is negative but the target type is unsigned.
    #[error("negative duration '{input}' cannot be represented")]
    Negative {
        /// The rejected input
        input: String,
    },
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Consumes leading ASCII digits, returning the value, the remainder and
/// whether any digit was consumed. `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str, bool)> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(digit - b'0'))
            .filter(|v| *v <= MAGNITUDE_LIMIT)?;
    }
    Some((value, &s[end..], end > 0))
}

/// Consumes the digits after a decimal point. Digits beyond the precision
/// that fits in a `u64` are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str, bool) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale: f64 = 1.0;
    let mut saturated = false;
    for digit in s[..end].bytes() {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .filter(|v| *v < MAGNITUDE_LIMIT)
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => saturated = true,
        }
    }
    (value, scale, &s[end..], end > 0)
}

/// Parses a compact time span into a signed nanosecond count.
///
/// # Examples
///
/// ```
/// use envtyped::domain::duration::parse_duration;
///
/// assert_eq!(parse_duration("1s").unwrap(), 1_000_000_000);
/// assert_eq!(parse_duration("1.5h").unwrap(), 5_400_000_000_000);
/// assert_eq!(parse_duration("-2m").unwrap(), -120_000_000_000);
/// assert!(parse_duration("100").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<i64, DurationParseError> {
    let invalid = || DurationParseError::Invalid {
        input: input.to_string(),
    };
    let overflow = || DurationParseError::Overflow {
        input: input.to_string(),
    };

    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(invalid());
        }

        let (whole, after_int, has_whole) = leading_int(rest).ok_or_else(overflow)?;
        rest = after_int;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (value, value_scale, after_fraction, digits) = leading_fraction(after_dot);
            fraction = value;
            scale = value_scale;
            has_fraction = digits;
            rest = after_fraction;
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit {
                input: input.to_string(),
            });
        }
        let unit_ns = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let mut value = whole
            .checked_mul(unit_ns)
            .filter(|v| *v <= MAGNITUDE_LIMIT)
            .ok_or_else(overflow)?;
        if fraction > 0 {
            value += (fraction as f64 * (unit_ns as f64 / scale)) as u64;
            if value > MAGNITUDE_LIMIT {
                return Err(overflow());
            }
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAGNITUDE_LIMIT)
            .ok_or_else(overflow)?;
    }

    if negative {
        return Ok((-(total as i128)) as i64);
    }
    i64::try_from(total).map_err(|_| overflow())
}

/// Parses a compact time span into a [`std::time::Duration`].
///
/// Negative spans are rejected since `Duration` is unsigned; `"-0s"` is zero.
///
/// # Examples
///
/// ```
/// use envtyped::domain::duration::parse_std_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_std_duration("5m").unwrap(), Duration::from_secs(300));
/// assert!(parse_std_duration("-5m").is_err());
/// ```
pub fn parse_std_duration(input: &str) -> Result<Duration, DurationParseError> {
    let nanos = parse_duration(input)?;
    u64::try_from(nanos)
        .map(Duration::from_nanos)
        .map_err(|_| DurationParseError::Negative {
            input: input.to_string(),
        })
}
