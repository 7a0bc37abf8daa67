use super::*;
use crate::normalize::normalize_spot;
use crate::raw::RawSpot;

fn spot(id: u32, city: Option<&str>, name: &str, area: &str) -> SehriSpot {
    normalize_spot(RawSpot {
        location_id: id,
        venue_name: Some(name.to_owned()),
        primary_area: Some(area.to_owned()),
        city: city.map(ToOwned::to_owned),
        ..RawSpot::default()
    })
}

fn ids(spots: &[&SehriSpot]) -> Vec<u32> {
    spots.iter().map(|s| s.id).collect()
}

fn sample() -> Vec<SehriSpot> {
    let mut noor = spot(1, None, "Masjid-e-Noor", "Adyar");
    noor.features = vec!["Kanji".to_owned()];
    let mut hotel = spot(2, None, "Hotel Buhari", "Periamet");
    hotel.special_notes = "Price: Rs 150 per plate".to_owned();
    let mut zoned = spot(3001, Some("Bengaluru"), "Jamia Masjid", "KR Market");
    zoned.zone = Some("Central".to_owned());
    let east = spot(3010, Some("Bangalore"), "Frazer Town Point", "Frazer Town");
    let mylapore = spot(3, None, "Masjid-e-Mamoor", "Mylapore");
    vec![noor, hotel, zoned, east, mylapore]
}

// -----------------------------------------------------------------------
// filter_spots
// -----------------------------------------------------------------------

#[test]
fn city_filter_is_exact() {
    let spots = sample();
    let result = filter_spots(&spots, &FilterSelection::for_city("Chennai"));
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn city_filter_is_case_sensitive() {
    let spots = sample();
    assert!(filter_spots(&spots, &FilterSelection::for_city("chennai")).is_empty());
}

#[test]
fn city_alias_is_applied_before_filtering() {
    let spots = sample();
    let result = filter_spots(&spots, &FilterSelection::for_city("Bangalore"));
    assert_eq!(ids(&result), vec![3001, 3010]);
    assert!(result.iter().all(|s| s.city == "Bangalore"));
}

#[test]
fn unknown_city_yields_nothing() {
    let spots = sample();
    assert!(filter_spots(&spots, &FilterSelection::for_city("Delhi")).is_empty());
}

#[test]
fn empty_search_term_is_a_no_op() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: String::new(),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(filter_spots(&spots, &selection).len(), 3);
}

#[test]
fn search_matches_name_case_insensitively() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "NOOR".to_owned(),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![1]);
}

#[test]
fn search_matches_area() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "mylap".to_owned(),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![3]);
}

#[test]
fn search_matches_feature_substring() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "kan".to_owned(),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![1]);
}

#[test]
fn search_matches_special_notes() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "per plate".to_owned(),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![2]);
}

#[test]
fn search_matches_zone_alone() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "central".to_owned(),
        ..FilterSelection::for_city("Bangalore")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![3001]);
}

#[test]
fn search_with_no_match_is_empty() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "pizza".to_owned(),
        ..FilterSelection::for_city("Chennai")
    };
    assert!(filter_spots(&spots, &selection).is_empty());
}

#[test]
fn area_filter_is_exact() {
    let spots = sample();
    let selection = FilterSelection {
        selected_area: Some("Adyar".to_owned()),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![1]);

    let partial = FilterSelection {
        selected_area: Some("Ady".to_owned()),
        ..FilterSelection::for_city("Chennai")
    };
    assert!(filter_spots(&spots, &partial).is_empty());
}

#[test]
fn blank_area_is_ignored() {
    let spots = sample();
    let selection = FilterSelection {
        selected_area: Some(String::new()),
        ..FilterSelection::for_city("Chennai")
    };
    assert_eq!(
        ids(&filter_spots(&spots, &selection)),
        ids(&filter_spots(&spots, &FilterSelection::for_city("Chennai")))
    );
    assert!(!filter_spots(&spots, &selection).is_empty());
}

#[test]
fn search_and_area_are_conjunctive() {
    let spots = sample();
    let selection = FilterSelection {
        search_term: "masjid".to_owned(),
        selected_area: Some("Periamet".to_owned()),
        ..FilterSelection::for_city("Chennai")
    };
    assert!(filter_spots(&spots, &selection).is_empty());
}

#[test]
fn default_selection_targets_default_city() {
    let selection = FilterSelection::default();
    assert_eq!(selection.selected_city, "Chennai");
    assert!(selection.search_term.is_empty());
    assert!(selection.selected_area.is_none());
}

// -----------------------------------------------------------------------
// areas_for_city
// -----------------------------------------------------------------------

#[test]
fn areas_are_sorted_and_distinct() {
    let mut spots = sample();
    spots.push(spot(5, None, "Second Adyar spot", "Adyar"));
    assert_eq!(
        areas_for_city(&spots, "Chennai"),
        vec!["Adyar", "Mylapore", "Periamet"]
    );
}

#[test]
fn areas_for_unknown_city_are_empty() {
    assert!(areas_for_city(&sample(), "Delhi").is_empty());
}

#[test]
fn end_to_end_two_chennai_records() {
    let spots = vec![
        spot(1, Some("Chennai"), "Masjid A", "Adyar"),
        spot(2, Some("Chennai"), "Masjid B", "Anna Nagar"),
    ];

    let mut selection = FilterSelection::for_city("Chennai");
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![1, 2]);

    selection.selected_area = Some("Adyar".to_owned());
    assert_eq!(ids(&filter_spots(&spots, &selection)), vec![1]);

    assert_eq!(areas_for_city(&spots, "Chennai"), vec!["Adyar", "Anna Nagar"]);
}
