// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Signed hour/minute offset between two resolved zones.

use dualclock_tz::ZoneRef;

use crate::config::DeltaFormat;

/// Sign of a zone-to-zone offset difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
    /// Zero delta carries no sign.
    None,
}

impl Sign {
    pub fn of(seconds: i64) -> Self {
        match seconds {
            s if s > 0 => Self::Plus,
            s if s < 0 => Self::Minus,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::None => "",
        }
    }
}

/// The offset between two zones plus its display string.
///
/// Invariant: `signed_seconds` is the right zone's offset minus the left's,
/// so a positive delta means the right clock is ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetDelta {
    pub signed_seconds: i64,
    pub sign: Sign,
    pub formatted_text: String,
}

/// Computes the [`OffsetDelta`] for a pair of zones.
///
/// Pure: holds only its formatting mode, so calling it every tick cannot
/// accumulate state or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDeltaCalculator {
    format: DeltaFormat,
}

impl OffsetDeltaCalculator {
    pub fn new(format: DeltaFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> DeltaFormat {
        self.format
    }

    pub fn compute(&self, left: &ZoneRef, right: &ZoneRef) -> OffsetDelta {
        let signed_seconds =
            i64::from(right.offset_seconds()) - i64::from(left.offset_seconds());
        let sign = Sign::of(signed_seconds);
        let formatted_text = match self.format {
            DeltaFormat::HoursMinutes => format_hours_minutes(sign, signed_seconds),
            DeltaFormat::FractionalHours => format_fractional_hours(sign, signed_seconds),
        };

        OffsetDelta {
            signed_seconds,
            sign,
            formatted_text,
        }
    }
}

/// `"+8 Hours"` / `"+3 Hours 30 Minutes"`; the minutes suffix is omitted
/// when the remainder is zero.
fn format_hours_minutes(sign: Sign, signed_seconds: i64) -> String {
    let abs = signed_seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if minutes == 0 {
        format!("{}{} Hours", sign.as_str(), hours)
    } else {
        format!("{}{} Hours {} Minutes", sign.as_str(), hours, minutes)
    }
}

/// Compact fractional-hours mode: `"+5.5"`, `"-8"`. Whole hours drop the
/// `".0"` the float formatter would otherwise print.
fn format_fractional_hours(sign: Sign, signed_seconds: i64) -> String {
    let hours = signed_seconds.unsigned_abs() as f64 / 3600.0;
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format(hours);
    let text = text.strip_suffix(".0").unwrap_or(text);
    format!("{}{}", sign.as_str(), text)
}

/// Parse a [`DeltaFormat::HoursMinutes`] rendering back into signed
/// seconds at minute resolution. Returns `None` for anything that is not
/// exactly that shape.
pub fn parse_hours_minutes(text: &str) -> Option<i64> {
    let (sign, rest) = match text.strip_prefix('+') {
        Some(rest) => (1, rest),
        None => match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text),
        },
    };

    let mut parts = rest.split_whitespace();
    let hours: u64 = parts.next()?.parse().ok()?;
    if parts.next()? != "Hours" {
        return None;
    }

    let minutes = match parts.next() {
        None => 0,
        Some(raw) => {
            let minutes: u64 = raw.parse().ok()?;
            if parts.next()? != "Minutes" {
                return None;
            }
            minutes
        },
    };

    if parts.next().is_some() || minutes >= 60 {
        return None;
    }
    // An absurd hours value is not a delta this module ever formatted;
    // reject it instead of overflowing
    let total = hours.checked_mul(3600)?.checked_add(minutes * 60)?;
    Some(sign * i64::try_from(total).ok()?)
}
