// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Clock-face geometry and offset-delta model for dualclock.
//!
//! Pure, tick-driven computation behind the analog clock faces: a host UI
//! drives a periodic timer and pulls a fresh [`ClockReading`] per visible
//! face and one [`OffsetDelta`] for the pair each tick. Nothing here blocks,
//! performs I/O, or holds per-tick state; every output is a value object
//! discarded at the end of the frame.
//!
//! # Angle convention
//!
//! 0 degrees points at 12 o'clock and angles increase clockwise. A renderer
//! maps an angle to screen coordinates with `x = cx + r * sin(theta)` and
//! `y = cy + r * cos(theta)` in a Y-up system (negate for Y-down).
//!
//! # Example
//!
//! ```
//! use chrono::TimeZone;
//! use dualclock_model::{ClockFaceModel, HourFormat, SecondHandMode};
//! use dualclock_tz::ZoneRef;
//!
//! let model = ClockFaceModel::new(SecondHandMode::Stepped, HourFormat::H12);
//! let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap();
//! let reading = model.update(&ZoneRef::utc(), instant);
//!
//! assert_eq!(reading.hour_angle_deg, 195.0); // 6.5 * 30
//! assert_eq!(reading.minute_angle_deg, 180.0);
//! assert_eq!(reading.digital_text(), "06:30:00");
//! ```

mod config;
mod face;
mod offset;

pub use config::{
    ClockConfig, ConfigError, DeltaFormat, HourFormat, ModeParseError, SecondHandMode,
    MIN_TICK_CADENCE,
};
pub use face::{ClockFaceModel, ClockReading};
pub use offset::{parse_hours_minutes, OffsetDelta, OffsetDeltaCalculator, Sign};
