// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time-to-geometry conversion for one analog clock face.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use dualclock_tz::ZoneRef;

use crate::config::{ClockConfig, HourFormat, SecondHandMode};

/// Hand angles and digital readout derived for one tick.
///
/// All angles are degrees in `[0, 360)`, 0 at 12 o'clock, increasing
/// clockwise. Value object: owned by the frame that requested it and
/// recomputed on the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    pub hour_angle_deg: f64,
    pub minute_angle_deg: f64,
    pub second_angle_deg: f64,
    pub digital_hour: u32,
    pub digital_minute: u32,
    pub digital_second: u32,
}

impl ClockReading {
    /// `"HH:MM:SS"` text for a host label.
    pub fn digital_text(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.digital_hour, self.digital_minute, self.digital_second
        )
    }
}

/// Converts wall-clock time in a resolved zone into hand angles.
///
/// Stateless apart from its configuration; `update` is safe to call at any
/// cadence without accumulating error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFaceModel {
    second_hand: SecondHandMode,
    hour_format: HourFormat,
}

impl ClockFaceModel {
    pub fn new(second_hand: SecondHandMode, hour_format: HourFormat) -> Self {
        Self {
            second_hand,
            hour_format,
        }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(config.second_hand, config.hour_format)
    }

    /// The granularity in force, so a host (or test) can tell whether the
    /// second hand steps or sweeps.
    pub fn second_hand(&self) -> SecondHandMode {
        self.second_hand
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    /// Produce the reading for `zone` at `instant`.
    ///
    /// Second hand: seconds x 6 degrees, plus the sub-second fraction in
    /// continuous mode. Minute hand: minutes x 6 with the second fraction
    /// folded in. Hour hand: (hours mod 12) x 30 with the minute fraction
    /// folded in, so midnight lands in `[0, 30)` rather than going negative.
    pub fn update(&self, zone: &ZoneRef, instant: DateTime<Utc>) -> ClockReading {
        let offset = FixedOffset::east_opt(zone.offset_seconds())
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        let local = instant.with_timezone(&offset);

        let subsec = match self.second_hand {
            SecondHandMode::Stepped => 0.0,
            // Leap-second representation can push nanos past 1e9; clamp so
            // the second hand never overshoots a full step
            SecondHandMode::Continuous => {
                f64::from(local.nanosecond().min(999_999_999)) / 1e9
            },
        };

        let second = f64::from(local.second()) + subsec;
        let minute = f64::from(local.minute()) + second / 60.0;
        let hour = f64::from(local.hour() % 12) + minute / 60.0;

        ClockReading {
            hour_angle_deg: (hour * 30.0).rem_euclid(360.0),
            minute_angle_deg: (minute * 6.0).rem_euclid(360.0),
            second_angle_deg: (second * 6.0).rem_euclid(360.0),
            digital_hour: match self.hour_format {
                HourFormat::H24 => local.hour(),
                HourFormat::H12 => match local.hour() % 12 {
                    0 => 12,
                    h => h,
                },
            },
            digital_minute: local.minute(),
            digital_second: local.second(),
        }
    }
}
