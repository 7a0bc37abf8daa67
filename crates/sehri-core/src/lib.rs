pub mod app_config;
pub mod catalog;
pub mod config;
pub mod datasets;
pub mod filter;
pub mod normalize;
pub mod raw;
pub mod registry;
pub mod spot;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use catalog::{AuditFinding, Catalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use datasets::{bundled_datasets, load_datasets_from_dir, parse_dataset, CityDataset};
pub use filter::{areas_for_city, filter_spots, FilterSelection};
pub use normalize::{format_timing, normalize_all, normalize_spot};
pub use raw::{RawSpot, RawTiming};
pub use spot::SehriSpot;
pub use view::{EmptyState, ViewMode, ViewState};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset '{name}': {source}")]
    DatasetParse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("duplicate location id {id}: present in both '{first}' and '{second}'")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },
}
