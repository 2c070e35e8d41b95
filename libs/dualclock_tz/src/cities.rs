// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Display-city to IANA-identifier mapping for the selection dropdown.

/// (display name, IANA identifier), sorted by ASCII-lowercased name so the
/// case-insensitive binary search below works.
static CITY_ZONES: &[(&str, &str)] = &[
    ("Auckland", "Pacific/Auckland"),
    ("Berlin", "Europe/Berlin"),
    ("Chicago", "America/Chicago"),
    ("Denver", "America/Denver"),
    ("Dubai", "Asia/Dubai"),
    ("Honolulu", "Pacific/Honolulu"),
    ("Kolkata", "Asia/Kolkata"),
    ("London", "Europe/London"),
    ("Los Angeles", "America/Los_Angeles"),
    ("Mexico City", "America/Mexico_City"),
    ("New York", "America/New_York"),
    ("Paris", "Europe/Paris"),
    ("San Francisco", "America/Los_Angeles"),
    ("Sao Paulo", "America/Sao_Paulo"),
    ("Singapore", "Asia/Singapore"),
    ("Sydney", "Australia/Sydney"),
    ("Tokyo", "Asia/Tokyo"),
];

/// Look up the IANA identifier for a display city name.
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn zone_for_city(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    CITY_ZONES
        .binary_search_by(|(city, _)| {
            city.bytes()
                .map(|b| b.to_ascii_lowercase())
                .cmp(needle.bytes().map(|b| b.to_ascii_lowercase()))
        })
        .ok()
        .map(|idx| CITY_ZONES[idx].1)
}

/// All display city names, in listing order, for populating a dropdown.
pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITY_ZONES.iter().map(|(city, _)| *city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(zone_for_city("London"), Some("Europe/London"));
        assert_eq!(zone_for_city("San Francisco"), Some("America/Los_Angeles"));
        assert_eq!(zone_for_city("Tokyo"), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(zone_for_city("london"), Some("Europe/London"));
        assert_eq!(zone_for_city("NEW YORK"), Some("America/New_York"));
        assert_eq!(zone_for_city("  Sydney "), Some("Australia/Sydney"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(zone_for_city("Atlantis"), None);
        assert_eq!(zone_for_city(""), None);
    }

    #[test]
    fn test_table_sorted() {
        let names: Vec<String> = city_names().map(|n| n.to_ascii_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_table_zones_parse() {
        for (city, zone) in CITY_ZONES {
            let parsed: Result<chrono_tz::Tz, _> = zone.parse();
            assert!(parsed.is_ok(), "Bad zone {} for city {}", zone, city);
        }
    }
}
