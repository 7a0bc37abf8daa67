//! Normalization from raw per-city records to [`SehriSpot`].
//!
//! Total over partial input: every optional field has a fallback, so a record
//! with nothing but a `location_id` still yields a complete spot.

use crate::raw::{RawSpot, RawTiming};
use crate::registry::{
    canonical_city, is_verified, DEFAULT_CITY, DISTANCE_PLACEHOLDER, LAST_VERIFIED,
    TIMING_FALLBACK, UNKNOWN,
};
use crate::spot::SehriSpot;

/// Treat an empty string the same as an absent value.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Format a raw timing block for display.
///
/// Takeaway/masjid times win over start/end when both are present.
#[must_use]
pub fn format_timing(timing: Option<&RawTiming>) -> String {
    let Some(timing) = timing else {
        return TIMING_FALLBACK.to_string();
    };

    let takeaway = present(timing.takeaway.as_ref());
    let in_masjid = present(timing.in_masjid.as_ref());
    if takeaway.is_some() || in_masjid.is_some() {
        let parts: Vec<String> = [
            takeaway.map(|t| format!("Takeaway: {t}")),
            in_masjid.map(|t| format!("Masjid: {t}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        return parts.join(" | ");
    }

    match (present(timing.start.as_ref()), present(timing.end.as_ref())) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => format!("Starts {start}"),
        _ => TIMING_FALLBACK.to_string(),
    }
}

fn build_address(raw: &RawSpot, city: &str) -> String {
    let city_part = (city != DEFAULT_CITY).then_some(city);
    [
        present(raw.landmark.as_ref()),
        present(raw.locality.as_ref()),
        present(raw.primary_area.as_ref()),
        city_part.filter(|c| !c.is_empty()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

fn build_special_notes(raw: &RawSpot) -> String {
    [
        present(raw.notes.as_ref()).map(ToOwned::to_owned),
        present(raw.availability.as_ref()).map(|a| format!("Availability: {a}")),
        present(raw.price.as_ref()).map(|p| format!("Price: {p}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(". ")
}

/// Normalizes a single [`RawSpot`] into a [`SehriSpot`].
#[must_use]
pub fn normalize_spot(raw: RawSpot) -> SehriSpot {
    let city = canonical_city(present(raw.city.as_ref()).unwrap_or(DEFAULT_CITY)).to_string();
    let address = build_address(&raw, &city);
    let timing = format_timing(raw.timing.as_ref());
    let special_notes = build_special_notes(&raw);

    let venue_type = present(raw.venue_type.as_ref()).unwrap_or(UNKNOWN).to_string();
    let food_type = present(raw.food_type.as_ref()).unwrap_or(UNKNOWN).to_string();

    let contact_person = raw
        .contact_persons
        .and_then(|persons| persons.into_iter().next());

    SehriSpot {
        id: raw.location_id,
        name: raw.venue_name.unwrap_or_default(),
        area: raw.primary_area.unwrap_or_default(),
        city,
        zone: raw.zone,
        address,
        timing,
        venue_type,
        food_type,
        target_audience: raw.target_audience,
        phones: raw.phones.unwrap_or_default(),
        contact_person,
        distance: DISTANCE_PLACEHOLDER.to_string(),
        verified: is_verified(raw.location_id),
        last_verified: LAST_VERIFIED.to_string(),
        special_notes,
        features: raw.features.unwrap_or_default(),
    }
}

/// Normalizes every record, preserving input order.
pub fn normalize_all<I>(raws: I) -> Vec<SehriSpot>
where
    I: IntoIterator<Item = RawSpot>,
{
    raws.into_iter().map(normalize_spot).collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
