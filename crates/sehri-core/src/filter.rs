//! City / search / area filtering and the area facet.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_CITY;
use crate::spot::SehriSpot;

/// The user's current filter choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub search_term: String,
    /// `None` means all areas.
    pub selected_area: Option<String>,
    pub selected_city: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_area: None,
            selected_city: DEFAULT_CITY.to_string(),
        }
    }
}

impl FilterSelection {
    #[must_use]
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            selected_city: city.into(),
            ..Self::default()
        }
    }
}

fn matches_search(spot: &SehriSpot, lower_term: &str) -> bool {
    spot.name.to_lowercase().contains(lower_term)
        || spot.area.to_lowercase().contains(lower_term)
        || spot
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(lower_term))
        || spot.special_notes.to_lowercase().contains(lower_term)
        || spot
            .zone
            .as_ref()
            .is_some_and(|z| z.to_lowercase().contains(lower_term))
}

/// Apply city, then search, then area filters. Order of `spots` is kept.
///
/// An empty search term or an unset or blank area skips that stage. A city with no
/// spots simply yields nothing.
#[must_use]
pub fn filter_spots<'a>(spots: &'a [SehriSpot], selection: &FilterSelection) -> Vec<&'a SehriSpot> {
    let mut data: Vec<&SehriSpot> = spots
        .iter()
        .filter(|s| s.city == selection.selected_city)
        .collect();

    if !selection.search_term.is_empty() {
        let lower_term = selection.search_term.to_lowercase();
        data.retain(|s| matches_search(s, &lower_term));
    }

    if let Some(area) = selection.selected_area.as_ref().filter(|a| !a.is_empty()) {
        data.retain(|s| &s.area == area);
    }

    data
}

/// Distinct areas for `city`, sorted ascending.
///
/// Deliberately ignores search and area selections so the area picker never
/// shrinks while the user is filtering.
#[must_use]
pub fn areas_for_city(spots: &[SehriSpot], city: &str) -> Vec<String> {
    spots
        .iter()
        .filter(|s| s.city == city)
        .map(|s| s.area.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
