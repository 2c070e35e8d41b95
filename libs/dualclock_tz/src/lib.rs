// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time-zone resolution for the dualclock core.
//!
//! Resolves an IANA zone identifier (or a display city name) to its UTC
//! offset at a given instant, producing a [`ZoneRef`] value. Lookup failure
//! never reaches the caller as an error: the result degrades to UTC with
//! [`ZoneStatus::FallbackUtc`] and a diagnostic is logged once per distinct
//! failing identifier.
//!
//! Offsets vary with DST, so callers re-resolve every tick instead of
//! caching a `ZoneRef` across frames. Resolution is a synchronous in-memory
//! lookup against the bundled IANA database.
//!
//! # Example
//!
//! ```
//! use dualclock_tz::{resolve_now, ZoneStatus};
//!
//! let zone = resolve_now("Europe/London");
//! assert_eq!(zone.status(), ZoneStatus::Ok);
//!
//! // City names from the dropdown table work too
//! let zone = resolve_now("San Francisco");
//! assert_eq!(zone.identifier(), "America/Los_Angeles");
//!
//! // Unknown identifiers fall back to UTC rather than failing the tick
//! let zone = resolve_now("Atlantis/Underwater");
//! assert_eq!(zone.status(), ZoneStatus::FallbackUtc);
//! assert_eq!(zone.offset_seconds(), 0);
//! ```

mod cities;

pub use cities::{city_names, zone_for_city};

use std::{collections::HashSet, fmt, sync::Mutex};

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tracing::warn;

/// Outcome of a zone lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneStatus {
    /// The identifier resolved against the IANA database.
    Ok,
    /// The identifier was unknown; UTC stands in with offset 0.
    FallbackUtc,
}

/// A resolved time zone: identifier plus its UTC offset at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRef {
    identifier: String,
    offset_seconds: i32,
    status: ZoneStatus,
}

impl ZoneRef {
    /// A zone with a fixed offset, bypassing database lookup.
    pub fn fixed(identifier: impl Into<String>, offset_seconds: i32) -> Self {
        Self {
            identifier: identifier.into(),
            offset_seconds,
            status: ZoneStatus::Ok,
        }
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self::fixed("UTC", 0)
    }

    /// The IANA identifier this zone resolved to.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Offset from UTC in seconds (positive = east of UTC) at the instant
    /// this `ZoneRef` was resolved.
    pub fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    /// How the lookup went.
    pub fn status(&self) -> ZoneStatus {
        self.status
    }

    /// True when the identifier failed to resolve and UTC is standing in.
    pub fn is_fallback(&self) -> bool {
        self.status == ZoneStatus::FallbackUtc
    }

    /// Displayable offset, e.g. `"+05:30"` or `"-08:00"`.
    pub fn offset_display(&self) -> OffsetDisplay {
        OffsetDisplay {
            offset_seconds: self.offset_seconds,
        }
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.offset_display())
    }
}

/// Formats a UTC offset in seconds as `"+HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDisplay {
    offset_seconds: i32,
}

impl fmt::Display for OffsetDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign comes from the raw offset, not the hours digit, so
        // sub-hour offsets like -00:30 keep their minus
        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let total_mins = self.offset_seconds.unsigned_abs() / 60;
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        write!(f, "{}{:02}:{:02}", sign, hours, mins)
    }
}

/// Resolve an IANA identifier or display city name to a [`ZoneRef`] with
/// the zone's UTC offset at `at`.
///
/// Never fails: an unknown identifier yields a UTC fallback and a one-time
/// diagnostic.
pub fn resolve(identifier: &str, at: DateTime<Utc>) -> ZoneRef {
    if let Some(offset_seconds) = offset_at(identifier, at) {
        return ZoneRef {
            identifier: identifier.to_string(),
            offset_seconds,
            status: ZoneStatus::Ok,
        };
    }

    // Not a zone name; maybe a dropdown city label
    if let Some(zone_name) = cities::zone_for_city(identifier) {
        if let Some(offset_seconds) = offset_at(zone_name, at) {
            return ZoneRef {
                identifier: zone_name.to_string(),
                offset_seconds,
                status: ZoneStatus::Ok,
            };
        }
    }

    warn_once(identifier);
    ZoneRef {
        identifier: identifier.to_string(),
        offset_seconds: 0,
        status: ZoneStatus::FallbackUtc,
    }
}

/// [`resolve`] against the current system clock.
pub fn resolve_now(identifier: &str) -> ZoneRef {
    resolve(identifier, Utc::now())
}

/// Offset in seconds for `identifier` at `at`, or `None` if the identifier
/// is not in the IANA database.
fn offset_at(identifier: &str, at: DateTime<Utc>) -> Option<i32> {
    let tz: Tz = identifier.parse().ok()?;
    let local = at.with_timezone(&tz);
    Some(local.offset().fix().local_minus_utc())
}

static WARNED_IDENTIFIERS: Lazy<Mutex<HashSet<String>>> =
    Lazy::new(|| Mutex::new(HashSet::new()));

/// Log one diagnostic per distinct failing identifier. The resolver runs on
/// every tick, so warning unconditionally would flood the log.
fn warn_once(identifier: &str) {
    if let Ok(mut seen) = WARNED_IDENTIFIERS.lock() {
        if seen.insert(identifier.to_string()) {
            warn!(
                "Unknown time zone {:?}, falling back to UTC",
                identifier
            );
        }
    }
}

#[cfg(test)]
mod tests;
