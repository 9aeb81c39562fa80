//! Curated table of supported time zones.
//!
//! The table is a process-wide constant. Its order is the order shown to
//! users when picking a zone and carries no scheduling meaning.

use serde::Serialize;

/// A selectable city and the IANA zone it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeZoneEntry {
    pub city_name: &'static str,
    pub zone_id: &'static str,
    pub display_label: &'static str,
}

const fn entry(
    city_name: &'static str,
    zone_id: &'static str,
    display_label: &'static str,
) -> TimeZoneEntry {
    TimeZoneEntry {
        city_name,
        zone_id,
        display_label,
    }
}

/// All zones, in display order. Zone ids are unique.
pub static CATALOG: [TimeZoneEntry; 15] = [
    entry("London", "Europe/London", "London (GMT/BST)"),
    entry("New York", "America/New_York", "New York (EST/EDT)"),
    entry("Los Angeles", "America/Los_Angeles", "Los Angeles (PST/PDT)"),
    entry("Tokyo", "Asia/Tokyo", "Tokyo (JST)"),
    entry("Sydney", "Australia/Sydney", "Sydney (AEST/AEDT)"),
    entry("Dubai", "Asia/Dubai", "Dubai (GST)"),
    entry("Singapore", "Asia/Singapore", "Singapore (SGT)"),
    entry("Paris", "Europe/Paris", "Paris (CET/CEST)"),
    entry("Berlin", "Europe/Berlin", "Berlin (CET/CEST)"),
    entry("Mumbai", "Asia/Kolkata", "Mumbai (IST)"),
    entry("Shanghai", "Asia/Shanghai", "Shanghai (CST)"),
    entry("Toronto", "America/Toronto", "Toronto (EST/EDT)"),
    entry("São Paulo", "America/Sao_Paulo", "São Paulo (BRT/BRST)"),
    entry("Moscow", "Europe/Moscow", "Moscow (MSK)"),
    entry("Istanbul", "Europe/Istanbul", "Istanbul (TRT)"),
];

/// Find an entry by exact zone identifier.
pub fn lookup(zone_id: &str) -> Option<&'static TimeZoneEntry> {
    CATALOG.iter().find(|tz| tz.zone_id == zone_id)
}

/// Every entry in curated order.
pub fn list_all() -> &'static [TimeZoneEntry] {
    &CATALOG
}

/// Find an entry by city name, ignoring case.
pub fn lookup_city(name: &str) -> Option<&'static TimeZoneEntry> {
    let needle = name.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|tz| tz.city_name.to_lowercase() == needle)
}

/// Resolve free text as a zone id first, then as a city name.
pub fn resolve(text: &str) -> Option<&'static TimeZoneEntry> {
    lookup(text.trim()).or_else(|| lookup_city(text))
}
