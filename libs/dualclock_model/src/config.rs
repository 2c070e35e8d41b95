// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Configuration surface the host UI hands to the core.
//!
//! The mode enums implement `FromStr` for the setting names a host would
//! carry in string-typed configuration (`"stepped"`, `"12h"`,
//! `"hoursMinutes"`, ...). Unknown values are programmer errors and fail
//! fast with a descriptive [`ModeParseError`] instead of being defaulted.

use std::{fmt, str::FromStr, time::Duration};

/// Second-hand granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondHandMode {
    /// Advance once per whole second.
    #[default]
    Stepped,
    /// Fold the sub-second fraction in for smooth motion.
    Continuous,
}

impl FromStr for SecondHandMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stepped" => Ok(Self::Stepped),
            "continuous" => Ok(Self::Continuous),
            _ => Err(ModeParseError::new("second hand mode", s, "stepped|continuous")),
        }
    }
}

/// Digital readout hour style. Hand angles always use mod-12 arithmetic;
/// this only affects [`ClockReading::digital_hour`].
///
/// [`ClockReading::digital_hour`]: crate::ClockReading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    /// 1-12, with midnight and noon rendered as 12.
    #[default]
    H12,
    /// 0-23.
    H24,
}

impl FromStr for HourFormat {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12h" => Ok(Self::H12),
            "24h" => Ok(Self::H24),
            _ => Err(ModeParseError::new("hour format", s, "12h|24h")),
        }
    }
}

/// Rendering style for the cross-zone offset label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaFormat {
    /// `"+3 Hours 30 Minutes"`, minutes suffix omitted when zero.
    #[default]
    HoursMinutes,
    /// `"+3.5"`, trailing zeroes stripped.
    FractionalHours,
}

impl FromStr for DeltaFormat {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hoursMinutes" => Ok(Self::HoursMinutes),
            "fractionalHours" => Ok(Self::FractionalHours),
            _ => Err(ModeParseError::new(
                "delta format",
                s,
                "hoursMinutes|fractionalHours",
            )),
        }
    }
}

/// Error returned when parsing an unknown configuration mode value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParseError {
    setting: &'static str,
    value: String,
    expected: &'static str,
}

impl ModeParseError {
    fn new(setting: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            setting,
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {}: {:?} (expected one of {})",
            self.setting, self.value, self.expected
        )
    }
}

impl std::error::Error for ModeParseError {}

/// Shortest tick cadence `validate` accepts. The host timer typically runs
/// at 1-10 Hz; anything below this is a wiring mistake, not a display
/// preference.
pub const MIN_TICK_CADENCE: Duration = Duration::from_millis(10);

/// Everything the host UI configures on the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// How often the host timer fires.
    pub tick_cadence: Duration,
    pub second_hand: SecondHandMode,
    pub hour_format: HourFormat,
    pub delta_format: DeltaFormat,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_cadence: Duration::from_secs(1),
            second_hand: SecondHandMode::default(),
            hour_format: HourFormat::default(),
            delta_format: DeltaFormat::default(),
        }
    }
}

impl ClockConfig {
    /// Fail fast on a cadence no real host timer should be configured with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_cadence.is_zero() {
            return Err(ConfigError::ZeroCadence);
        }
        if self.tick_cadence < MIN_TICK_CADENCE {
            return Err(ConfigError::CadenceTooShort(self.tick_cadence));
        }
        Ok(())
    }
}

/// Error returned by [`ClockConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCadence,
    CadenceTooShort(Duration),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCadence => write!(f, "Tick cadence must be positive"),
            Self::CadenceTooShort(cadence) => write!(
                f,
                "Tick cadence {:?} is below the {:?} minimum",
                cadence, MIN_TICK_CADENCE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
