//! Hand-maintained reference constants shared by every stage of the pipeline.
//!
//! These are fixed at build time. Drift between them and the bundled data is
//! reported by [`crate::Catalog::audit`], never corrected automatically.

use std::collections::HashSet;
use std::sync::LazyLock;

/// City assumed when a raw record has no `city`. Also the city that is left
/// out of synthesized addresses.
pub const DEFAULT_CITY: &str = "Chennai";

/// Alternate spellings and the canonical city name they collapse to.
pub const CITY_ALIASES: &[(&str, &str)] = &[("Bengaluru", "Bangalore")];

/// Cities with a live dataset, in display order.
pub const SUPPORTED_CITIES: &[&str] = &["Chennai", "Bangalore", "Hyderabad", "Mumbai"];

pub const DISTANCE_PLACEHOLDER: &str = "X km";
pub const LAST_VERIFIED: &str = "2025";
pub const UNKNOWN: &str = "Unknown";
pub const TIMING_FALLBACK: &str = "Contact for timing";

/// Location IDs confirmed by an admin.
pub const VERIFIED_IDS: &[u32] = &[
    // Chennai (1-68)
    1, 2, 3, 5, 8, 9, 14, 20, 22, 24, 35, 40, 41, 42, 55, 60, 68,
    // Bangalore (3001-3115)
    3001, 3002, 3010, 3020, 3028, 3080,
    // Mumbai (4001-4011)
    4001, 4002, 4003, 4004, 4005, 4006, 4007, 4008,
    // Hyderabad (5001-5013)
    5001, 5002, 5003, 5004, 5011,
];

static VERIFIED_SET: LazyLock<HashSet<u32>> =
    LazyLock::new(|| VERIFIED_IDS.iter().copied().collect());

/// Resolve a city alias to its canonical spelling. Unknown names pass through.
#[must_use]
pub fn canonical_city(city: &str) -> &str {
    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == city)
        .map_or(city, |(_, canonical)| canonical)
}

#[must_use]
pub fn is_verified(id: u32) -> bool {
    VERIFIED_SET.contains(&id)
}

#[must_use]
pub fn is_supported_city(city: &str) -> bool {
    SUPPORTED_CITIES.contains(&city)
}
