//! View-state controller: current selections plus the values derived from them.
//!
//! Derived values are recomputed eagerly inside the setters, and only for the
//! inputs they depend on. Results depend on city, search and area; the area
//! facet depends on the city alone.

use serde::Serialize;

use crate::filter::{areas_for_city, filter_spots, FilterSelection};
use crate::registry::{is_supported_city, DEFAULT_CITY};
use crate::spot::SehriSpot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Landing,
    App,
}

/// Why the result list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyState {
    /// The selected city has no live dataset yet.
    UnsupportedCity { city: String },
    /// The city is live but the filters exclude everything.
    NoMatches,
}

impl EmptyState {
    /// Classify an empty result for `city`.
    #[must_use]
    pub fn for_city(city: &str) -> Self {
        if is_supported_city(city) {
            EmptyState::NoMatches
        } else {
            EmptyState::UnsupportedCity {
                city: city.to_string(),
            }
        }
    }

    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            EmptyState::UnsupportedCity { city } => format!("No spots in {city} yet"),
            EmptyState::NoMatches => "No Sehri spots found".to_string(),
        }
    }

    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            EmptyState::UnsupportedCity { city } => format!(
                "We are currently live only in Chennai, Bangalore, Hyderabad and Mumbai. Coming soon to {city}!"
            ),
            EmptyState::NoMatches => {
                "Try adjusting your filters or searching for a different area.".to_string()
            }
        }
    }

    /// Label for the action that runs [`ViewState::clear_filters`].
    #[must_use]
    pub fn action_label(&self) -> String {
        match self {
            EmptyState::UnsupportedCity { .. } => format!("Switch to {DEFAULT_CITY}"),
            EmptyState::NoMatches => "Clear All Filters".to_string(),
        }
    }
}

/// Selections and derived results over a borrowed, immutable spot list.
#[derive(Debug, Clone)]
pub struct ViewState<'a> {
    spots: &'a [SehriSpot],
    mode: ViewMode,
    selection: FilterSelection,
    results: Vec<&'a SehriSpot>,
    areas: Vec<String>,
}

impl<'a> ViewState<'a> {
    /// Start on the landing view with the default selection.
    #[must_use]
    pub fn new(spots: &'a [SehriSpot]) -> Self {
        let selection = FilterSelection::default();
        let results = filter_spots(spots, &selection);
        let areas = areas_for_city(spots, &selection.selected_city);
        Self {
            spots,
            mode: ViewMode::Landing,
            selection,
            results,
            areas,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Leave the landing view. There is no way back.
    pub fn enter_app(&mut self) {
        self.mode = ViewMode::App;
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub fn results(&self) -> &[&'a SehriSpot] {
        &self.results
    }

    /// All areas for the selected city, independent of search and area.
    #[must_use]
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        (!self.has_results()).then(|| EmptyState::for_city(&self.selection.selected_city))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.selection.search_term {
            return;
        }
        self.selection.search_term = term;
        self.refresh_results();
    }

    /// A blank area counts as "all areas".
    pub fn set_selected_area(&mut self, area: Option<String>) {
        let area = area.filter(|a| !a.is_empty());
        if area == self.selection.selected_area {
            return;
        }
        self.selection.selected_area = area;
        self.refresh_results();
    }

    /// Switch city. The area selection is always cleared, even when the city
    /// does not change.
    pub fn set_selected_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        let area_was_set = self.selection.selected_area.take().is_some();
        if city == self.selection.selected_city {
            if area_was_set {
                self.refresh_results();
            }
            return;
        }
        self.selection.selected_city = city;
        self.refresh_areas();
        self.refresh_results();
    }

    /// Reset search and area. An unsupported city also falls back to the
    /// default city.
    pub fn clear_filters(&mut self) {
        self.selection.search_term.clear();
        self.selection.selected_area = None;
        if !is_supported_city(&self.selection.selected_city) {
            self.selection.selected_city = DEFAULT_CITY.to_string();
            self.refresh_areas();
        }
        self.refresh_results();
    }

    fn refresh_results(&mut self) {
        self.results = filter_spots(self.spots, &self.selection);
        tracing::trace!(
            city = %self.selection.selected_city,
            results = self.results.len(),
            "recomputed results"
        );
    }

    fn refresh_areas(&mut self) {
        self.areas = areas_for_city(self.spots, &self.selection.selected_city);
        tracing::trace!(
            city = %self.selection.selected_city,
            areas = self.areas.len(),
            "recomputed area facet"
        );
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
