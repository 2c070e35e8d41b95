// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::DateTime;

use crate::{resolve, resolve_now, ZoneRef, ZoneStatus};

fn at(timestamp_secs: i64) -> chrono::DateTime<chrono::Utc> {
    DateTime::from_timestamp(timestamp_secs, 0).unwrap()
}

const JAN_2024: i64 = 1704067200; // 2024-01-01 00:00:00 UTC
const JUL_2024: i64 = 1720000000; // 2024-07-03 UTC

#[test]
fn test_utc_offset() {
    let zone = resolve("UTC", at(0));
    assert_eq!(zone.status(), ZoneStatus::Ok);
    assert_eq!(zone.offset_seconds(), 0);

    let zone = resolve("UTC", at(1700000000));
    assert_eq!(zone.offset_seconds(), 0);
}

#[test]
fn test_dst_timezone_winter() {
    // America/New_York in winter (EST = UTC-5)
    let zone = resolve("America/New_York", at(JAN_2024));
    assert_eq!(zone.status(), ZoneStatus::Ok);
    assert_eq!(zone.offset_seconds(), -5 * 3600);
}

#[test]
fn test_dst_timezone_summer() {
    // America/New_York in summer (EDT = UTC-4)
    let zone = resolve("America/New_York", at(JUL_2024));
    assert_eq!(zone.offset_seconds(), -4 * 3600);
}

#[test]
fn test_fixed_offset_zones() {
    // Japan doesn't observe DST
    assert_eq!(resolve("Asia/Tokyo", at(JAN_2024)).offset_seconds(), 9 * 3600);
    assert_eq!(resolve("Asia/Tokyo", at(JUL_2024)).offset_seconds(), 9 * 3600);

    // Half-hour offset
    assert_eq!(resolve("Asia/Kolkata", at(JAN_2024)).offset_seconds(), 19800);
}

#[test]
fn test_southern_hemisphere_dst() {
    // Sydney observes DST in the southern summer (January)
    assert_eq!(
        resolve("Australia/Sydney", at(JAN_2024)).offset_seconds(),
        11 * 3600
    );
    assert_eq!(
        resolve("Australia/Sydney", at(JUL_2024)).offset_seconds(),
        10 * 3600
    );
}

#[test]
fn test_city_name_resolution() {
    let zone = resolve("San Francisco", at(JAN_2024));
    assert_eq!(zone.status(), ZoneStatus::Ok);
    assert_eq!(zone.identifier(), "America/Los_Angeles");
    assert_eq!(zone.offset_seconds(), -8 * 3600); // PST

    let zone = resolve("london", at(JAN_2024));
    assert_eq!(zone.identifier(), "Europe/London");
    assert_eq!(zone.offset_seconds(), 0); // GMT
}

#[test]
fn test_unknown_identifier_falls_back_to_utc() {
    let zone = resolve("Invalid/Timezone", at(JAN_2024));
    assert_eq!(zone.status(), ZoneStatus::FallbackUtc);
    assert_eq!(zone.offset_seconds(), 0);
    assert!(zone.is_fallback());
    // The requested identifier is preserved for the host's label
    assert_eq!(zone.identifier(), "Invalid/Timezone");
}

#[test]
fn test_fallback_is_stable_across_ticks() {
    // Resolving the same bad identifier repeatedly must stay a quiet,
    // well-formed fallback (the diagnostic fires once, not per tick)
    for _ in 0..100 {
        let zone = resolve("Nowhere/Nothing", at(JAN_2024));
        assert_eq!(zone.status(), ZoneStatus::FallbackUtc);
        assert_eq!(zone.offset_seconds(), 0);
    }
}

#[test]
fn test_resolve_now() {
    let zone = resolve_now("Europe/Paris");
    assert_eq!(zone.status(), ZoneStatus::Ok);
    // CET or CEST depending on when the test runs
    let offset = zone.offset_seconds();
    assert!(offset == 3600 || offset == 7200);
}

#[test]
fn test_offset_display() {
    assert_eq!(ZoneRef::fixed("x", 19800).offset_display().to_string(), "+05:30");
    assert_eq!(ZoneRef::fixed("x", -28800).offset_display().to_string(), "-08:00");
    assert_eq!(ZoneRef::utc().offset_display().to_string(), "+00:00");
    assert_eq!(ZoneRef::fixed("x", 3600).offset_display().to_string(), "+01:00");
}

#[test]
fn test_offset_display_negative_sub_hour() {
    // Sub-hour negative offsets must keep their sign even though the
    // hours digit is zero
    assert_eq!(ZoneRef::fixed("x", -1800).offset_display().to_string(), "-00:30");
    assert_eq!(ZoneRef::fixed("x", -60).offset_display().to_string(), "-00:01");
    assert_eq!(ZoneRef::fixed("x", 1800).offset_display().to_string(), "+00:30");
}

#[test]
fn test_zone_ref_display() {
    let zone = ZoneRef::fixed("Asia/Tokyo", 9 * 3600);
    assert_eq!(zone.to_string(), "Asia/Tokyo (+09:00)");
}
