//! Configuration loaded from `.dddmap.toml`

mod classification;
mod core;
mod loader;
mod thresholds;

pub use self::core::{DddmapConfig, OutputConfig};
pub use classification::{
    default_infrastructure_markers, default_primitive_prefixes, default_temporal_types,
    ClassificationConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{default_min_fitness, ThresholdsConfig};
