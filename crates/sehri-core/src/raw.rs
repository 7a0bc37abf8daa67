//! Raw per-city records exactly as they appear in the bundled YAML datasets.
//!
//! The four city datasets were assembled by different volunteers, so field
//! presence varies from file to file. Everything except `location_id` is
//! optional here; defaults are applied in [`crate::normalize`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTiming {
    pub start: Option<String>,
    pub end: Option<String>,
    pub takeaway: Option<String>,
    pub in_masjid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpot {
    pub location_id: u32,
    pub venue_name: Option<String>,
    pub primary_area: Option<String>,
    pub venue_type: Option<String>,
    pub food_type: Option<String>,
    pub timing: Option<RawTiming>,
    pub availability: Option<String>,
    pub landmark: Option<String>,
    pub locality: Option<String>,
    pub features: Option<Vec<String>>,
    pub phones: Option<Vec<String>>,
    pub contact_persons: Option<Vec<String>>,
    pub price: Option<String>,
    pub notes: Option<String>,
    pub target_audience: Option<Vec<String>>,
    /// Absent for most Chennai records; see [`crate::registry::DEFAULT_CITY`].
    pub city: Option<String>,
    /// Only the Bangalore dataset carries zones (North, South, ...).
    pub zone: Option<String>,
}
