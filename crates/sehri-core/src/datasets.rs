//! Per-city raw datasets.
//!
//! Each `data/<city>.yaml` file at the workspace root is baked into the
//! binary with [`include_str!`]. The same file names can be read from a
//! directory at runtime when `SEHRI_DATA_DIR` is set.

use std::path::Path;

use serde::Deserialize;

use crate::raw::RawSpot;
use crate::DataError;

/// Embedded datasets, in merge order. IDs are assigned in disjoint ranges
/// per city: Chennai 1-68, Bangalore 3001-3115, Hyderabad 5001-5013,
/// Mumbai 4001-4011.
const DATASET_YAMLS: &[(&str, &str)] = &[
    ("chennai", include_str!("../../../data/chennai.yaml")),
    ("bangalore", include_str!("../../../data/bangalore.yaml")),
    ("hyderabad", include_str!("../../../data/hyderabad.yaml")),
    ("mumbai", include_str!("../../../data/mumbai.yaml")),
];

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    spots: Vec<RawSpot>,
}

/// One city's raw records, tagged with the dataset name they came from.
#[derive(Debug, Clone)]
pub struct CityDataset {
    pub name: String,
    pub spots: Vec<RawSpot>,
}

/// Parse a dataset YAML document (`spots: [...]`).
///
/// # Errors
///
/// Returns [`DataError::DatasetParse`] if the document is malformed.
pub fn parse_dataset(name: &str, yaml: &str) -> Result<CityDataset, DataError> {
    let file: DatasetFile = serde_yaml::from_str(yaml).map_err(|e| DataError::DatasetParse {
        name: name.to_string(),
        source: e,
    })?;

    Ok(CityDataset {
        name: name.to_string(),
        spots: file.spots,
    })
}

/// Parse every embedded dataset, in merge order.
///
/// # Errors
///
/// Returns [`DataError::DatasetParse`] if an embedded file is malformed.
pub fn bundled_datasets() -> Result<Vec<CityDataset>, DataError> {
    DATASET_YAMLS
        .iter()
        .map(|(name, yaml)| parse_dataset(name, yaml))
        .collect()
}

/// Read `<name>.yaml` for every bundled dataset name from `dir`.
///
/// # Errors
///
/// Returns [`DataError::DatasetIo`] if a file cannot be read, or
/// [`DataError::DatasetParse`] if it is malformed.
pub fn load_datasets_from_dir(dir: &Path) -> Result<Vec<CityDataset>, DataError> {
    DATASET_YAMLS
        .iter()
        .map(|(name, _)| {
            let path = dir.join(format!("{name}.yaml"));
            let content =
                std::fs::read_to_string(&path).map_err(|e| DataError::DatasetIo {
                    path: path.display().to_string(),
                    source: e,
                })?;
            tracing::debug!(dataset = name, path = %path.display(), "read dataset from disk");
            parse_dataset(name, &content)
        })
        .collect()
}
