use serde::{Deserialize, Serialize};

/// A sehri distribution spot, normalized for display and filtering.
///
/// Built once from [`crate::RawSpot`] records by [`crate::normalize_spot`] and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SehriSpot {
    /// Unique across all city datasets; enforced by [`crate::Catalog`].
    pub id: u32,
    /// Display name of the venue, e.g. `"Masjid-e-Noor"`.
    pub name: String,
    /// Primary neighborhood, e.g. `"Adyar"`.
    pub area: String,
    /// Canonical city name (aliases such as `"Bengaluru"` already collapsed).
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Landmark, locality and area joined with `", "`, plus the city when it
    /// is not the default city.
    pub address: String,
    /// Human-readable distribution times, e.g. `"03:00 - 04:00"`.
    pub timing: String,
    pub venue_type: String,
    /// `"Free"`, `"Paid"`, or whatever the dataset says; `"Unknown"` if absent.
    pub food_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<Vec<String>>,
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    /// Placeholder until distance is computed from the user's position.
    pub distance: String,
    pub verified: bool,
    pub last_verified: String,
    /// Notes, availability and price folded into one sentence list.
    pub special_notes: String,
    pub features: Vec<String>,
}
