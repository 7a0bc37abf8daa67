//! Read-only catalog query handlers.

use sehri_core::registry::{is_supported_city, SUPPORTED_CITIES};
use sehri_core::{areas_for_city, Catalog, SehriSpot, ViewState};

/// Render a spot as a multi-line card.
pub(crate) fn format_card(spot: &SehriSpot) -> String {
    let mut lines = vec![format!(
        "{}{}  [#{}]",
        spot.name,
        if spot.verified { " (verified)" } else { "" },
        spot.id
    )];
    lines.push(format!("  {} | {} | {}", spot.venue_type, spot.food_type, spot.area));
    if !spot.address.is_empty() {
        lines.push(format!("  Address: {}", spot.address));
    }
    lines.push(format!("  Timing:  {}", spot.timing));
    if let Some(zone) = &spot.zone {
        lines.push(format!("  Zone:    {zone}"));
    }
    if !spot.features.is_empty() {
        lines.push(format!("  Offers:  {}", spot.features.join(", ")));
    }
    if let Some(audience) = spot.target_audience.as_ref().filter(|a| !a.is_empty()) {
        lines.push(format!("  For:     {}", audience.join(", ")));
    }
    if !spot.special_notes.is_empty() {
        lines.push(format!("  Notes:   {}", spot.special_notes));
    }
    if !spot.phones.is_empty() {
        let contact = spot
            .contact_person
            .as_deref()
            .map(|p| format!(" ({p})"))
            .unwrap_or_default();
        lines.push(format!("  Phone:   {}{contact}", spot.phones.join(", ")));
    }
    lines.join("\n")
}

/// List spots for a city through a [`ViewState`], printing either cards or
/// JSON. An empty result prints the matching empty-state message.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_list(
    catalog: &Catalog,
    city: &str,
    search: Option<&str>,
    area: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut view = ViewState::new(catalog.spots());
    view.enter_app();
    view.set_selected_city(city);
    if let Some(term) = search {
        view.set_search_term(term);
    }
    view.set_selected_area(area);

    tracing::debug!(city, results = view.results().len(), "list filtered");

    if json {
        println!("{}", serde_json::to_string_pretty(view.results())?);
        return Ok(());
    }

    if let Some(empty) = view.empty_state() {
        println!("{}", empty.headline());
        println!("{}", empty.hint());
        return Ok(());
    }

    println!("{} spot(s) in {city}", view.results().len());
    for spot in view.results() {
        println!();
        println!("{}", format_card(spot));
    }

    Ok(())
}

pub(crate) fn run_areas(catalog: &Catalog, city: &str) {
    let areas = areas_for_city(catalog.spots(), city);
    if areas.is_empty() {
        if is_supported_city(city) {
            println!("no areas found for {city}");
        } else {
            println!("{city} is not a supported city yet");
        }
        return;
    }
    for area in areas {
        println!("{area}");
    }
}

pub(crate) fn run_cities(catalog: &Catalog) {
    let counts = catalog.city_counts();
    println!("{:<15}SPOTS", "CITY");
    for city in SUPPORTED_CITIES {
        let count = counts
            .iter()
            .find(|(name, _)| name == city)
            .map_or(0, |(_, n)| *n);
        println!("{city:<15}{count}");
    }
}

/// Print one spot.
///
/// # Errors
///
/// Returns an error if the id is unknown or JSON serialization fails.
pub(crate) fn run_show(catalog: &Catalog, id: u32, json: bool) -> anyhow::Result<()> {
    let spot = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("spot {id} not found"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(spot)?);
    } else {
        println!("{}", format_card(spot));
    }
    Ok(())
}

/// Print registry drift findings. Loading the catalog already rejected
/// duplicate ids, so reaching this point means the merge itself is sound.
pub(crate) fn run_validate(catalog: &Catalog) {
    let findings = catalog.audit();
    println!(
        "catalog ok: {} spots across {} cities",
        catalog.len(),
        catalog.city_counts().len()
    );
    if findings.is_empty() {
        println!("no drift between registry and data");
        return;
    }
    for finding in &findings {
        tracing::warn!(%finding, "registry drift");
        println!("warning: {finding}");
    }
    println!("{} finding(s); update the registry or the datasets", findings.len());
}
