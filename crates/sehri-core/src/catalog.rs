//! The merged, normalized, read-only collection of spots.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::app_config::AppConfig;
use crate::datasets::{bundled_datasets, load_datasets_from_dir, CityDataset};
use crate::normalize::normalize_spot;
use crate::registry::{is_supported_city, SUPPORTED_CITIES, VERIFIED_IDS};
use crate::spot::SehriSpot;
use crate::DataError;

static BUNDLED: OnceLock<Catalog> = OnceLock::new();

/// Every spot across every city dataset, in dataset-declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    spots: Vec<SehriSpot>,
}

/// A mismatch between the hand-maintained registry and the loaded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFinding {
    /// An ID in the verified list that no dataset contains.
    VerifiedIdMissing(u32),
    /// Spots exist for a city that is not in the supported list.
    UnsupportedCityInData { city: String, spots: usize },
    /// A supported city with no spots at all.
    SupportedCityWithoutSpots(String),
}

impl std::fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditFinding::VerifiedIdMissing(id) => {
                write!(f, "verified id {id} does not match any spot")
            }
            AuditFinding::UnsupportedCityInData { city, spots } => {
                write!(f, "{spots} spot(s) in '{city}', which is not a supported city")
            }
            AuditFinding::SupportedCityWithoutSpots(city) => {
                write!(f, "supported city '{city}' has no spots")
            }
        }
    }
}

impl Catalog {
    /// Normalize and merge datasets in order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateId`] if two records share a `location_id`,
    /// whether within one dataset or across datasets.
    pub fn from_datasets<I>(datasets: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = CityDataset>,
    {
        let mut origin: HashMap<u32, String> = HashMap::new();
        let mut spots = Vec::new();

        for dataset in datasets {
            let count = dataset.spots.len();
            for raw in dataset.spots {
                if let Some(first) = origin.get(&raw.location_id) {
                    let err = DataError::DuplicateId {
                        id: raw.location_id,
                        first: first.clone(),
                        second: dataset.name.clone(),
                    };
                    tracing::error!(error = %err, "rejecting dataset merge");
                    return Err(err);
                }
                origin.insert(raw.location_id, dataset.name.clone());
                spots.push(normalize_spot(raw));
            }
            tracing::debug!(dataset = %dataset.name, spots = count, "merged dataset");
        }

        Ok(Self { spots })
    }

    /// The catalog built from the embedded datasets, computed once per process.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if the embedded data is malformed or has
    /// duplicate IDs. Nothing is cached in that case.
    pub fn bundled() -> Result<&'static Catalog, DataError> {
        if let Some(catalog) = BUNDLED.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_datasets(bundled_datasets()?)?;
        Ok(BUNDLED.get_or_init(|| catalog))
    }

    /// Build a catalog from `config.data_dir`, or from the embedded datasets
    /// when no directory is configured.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if a dataset cannot be read or parsed, or if
    /// IDs collide.
    pub fn load(config: &AppConfig) -> Result<Self, DataError> {
        let catalog = match &config.data_dir {
            Some(dir) => Self::from_datasets(load_datasets_from_dir(dir)?)?,
            None => Self::bundled()?.clone(),
        };
        tracing::info!(spots = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn spots(&self) -> &[SehriSpot] {
        &self.spots
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&SehriSpot> {
        self.spots.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Spot count per city, in order of first appearance.
    #[must_use]
    pub fn city_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for spot in &self.spots {
            match counts.iter_mut().find(|(city, _)| *city == spot.city) {
                Some((_, n)) => *n += 1,
                None => counts.push((spot.city.as_str(), 1)),
            }
        }
        counts
    }

    /// Compare the data against the registry lists and report drift.
    ///
    /// Findings are informational; the catalog stays usable either way.
    #[must_use]
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings: Vec<AuditFinding> = VERIFIED_IDS
            .iter()
            .filter(|id| self.get(**id).is_none())
            .map(|id| AuditFinding::VerifiedIdMissing(*id))
            .collect();

        let counts = self.city_counts();
        findings.extend(
            counts
                .iter()
                .filter(|(city, _)| !is_supported_city(city))
                .map(|(city, spots)| AuditFinding::UnsupportedCityInData {
                    city: (*city).to_string(),
                    spots: *spots,
                }),
        );
        findings.extend(
            SUPPORTED_CITIES
                .iter()
                .filter(|supported| !counts.iter().any(|(city, _)| city == *supported))
                .map(|city| AuditFinding::SupportedCityWithoutSpots((*city).to_string())),
        );

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawSpot;

    fn raw(id: u32, city: Option<&str>, area: &str) -> RawSpot {
        RawSpot {
            location_id: id,
            venue_name: Some(format!("Spot {id}")),
            primary_area: Some(area.to_owned()),
            city: city.map(ToOwned::to_owned),
            ..RawSpot::default()
        }
    }

    fn dataset(name: &str, spots: Vec<RawSpot>) -> CityDataset {
        CityDataset {
            name: name.to_owned(),
            spots,
        }
    }

    #[test]
    fn from_datasets_preserves_declaration_order() {
        let catalog = Catalog::from_datasets(vec![
            dataset("chennai", vec![raw(2, None, "Adyar"), raw(1, None, "Mylapore")]),
            dataset("mumbai", vec![raw(4001, Some("Mumbai"), "Mahim")]),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.spots().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 4001]);
    }

    #[test]
    fn from_datasets_rejects_duplicate_ids_across_cities() {
        let err = Catalog::from_datasets(vec![
            dataset("chennai", vec![raw(7, None, "Adyar")]),
            dataset("hyderabad", vec![raw(7, Some("Hyderabad"), "Charminar")]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId { id: 7, ref first, ref second }
                if first == "chennai" && second == "hyderabad"
        ));
    }

    #[test]
    fn from_datasets_rejects_duplicate_ids_within_a_city() {
        let err = Catalog::from_datasets(vec![dataset(
            "chennai",
            vec![raw(3, None, "Adyar"), raw(3, None, "Egmore")],
        )])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate location id 3"));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog =
            Catalog::from_datasets(vec![dataset("chennai", vec![raw(9, None, "Vepery")])])
                .unwrap();
        assert_eq!(catalog.get(9).map(|s| s.area.as_str()), Some("Vepery"));
        assert!(catalog.get(10).is_none());
    }

    #[test]
    fn city_counts_collapse_aliases() {
        let catalog = Catalog::from_datasets(vec![dataset(
            "bangalore",
            vec![
                raw(3001, Some("Bengaluru"), "KR Market"),
                raw(3002, Some("Bangalore"), "Shivajinagar"),
            ],
        )])
        .unwrap();
        assert_eq!(catalog.city_counts(), vec![("Bangalore", 2)]);
    }

    #[test]
    fn audit_flags_drift() {
        let catalog = Catalog::from_datasets(vec![dataset(
            "misc",
            vec![raw(1, None, "Adyar"), raw(9001, Some("Pune"), "Camp")],
        )])
        .unwrap();
        let findings = catalog.audit();

        assert!(!findings.contains(&AuditFinding::VerifiedIdMissing(1)));
        assert!(findings.contains(&AuditFinding::VerifiedIdMissing(5001)));
        assert!(findings.contains(&AuditFinding::UnsupportedCityInData {
            city: "Pune".to_owned(),
            spots: 1,
        }));
        assert!(findings.contains(&AuditFinding::SupportedCityWithoutSpots(
            "Mumbai".to_owned()
        )));
        assert!(!findings.contains(&AuditFinding::SupportedCityWithoutSpots(
            "Chennai".to_owned()
        )));
    }

    #[test]
    fn bundled_is_memoized() {
        let first = Catalog::bundled().unwrap();
        let second = Catalog::bundled().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }

    #[test]
    fn load_without_data_dir_uses_bundled_data() {
        let config = AppConfig {
            env: crate::Environment::Test,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "info".to_owned(),
            data_dir: None,
        };
        let catalog = Catalog::load(&config).unwrap();
        assert_eq!(catalog.len(), Catalog::bundled().unwrap().len());
    }

    #[test]
    fn audit_finding_display() {
        assert_eq!(
            AuditFinding::VerifiedIdMissing(42).to_string(),
            "verified id 42 does not match any spot"
        );
    }
}
