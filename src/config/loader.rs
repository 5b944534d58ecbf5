use std::fs;
use std::path::{Path, PathBuf};

use super::core::DddmapConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".dddmap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document. Invalid sections are replaced by their defaults
/// with a warning.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<DddmapConfig, String> {
    let mut config = toml::from_str::<DddmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(classification) = &config.classification {
        if let Err(e) = classification.validate() {
            log::warn!("Invalid classification settings: {e}. Using defaults.");
            config.classification = None;
        }
    }
    if let Some(thresholds) = &config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid thresholds: {e}. Using defaults.");
            config.thresholds = None;
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<DddmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // missing files are the normal case while walking up
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Search `.dddmap.toml` from `start` upwards
pub fn load_config_from(start: PathBuf) -> DddmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {MAX_TRAVERSAL_DEPTH} directories. Using default config."
            );
            DddmapConfig::default()
        })
}

/// Search `.dddmap.toml` from the current directory upwards
pub fn load_config() -> DddmapConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(current),
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            DddmapConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// unparsable file is an error.
pub fn load_config_from_path(path: &Path) -> Result<DddmapConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn invalid_section_is_replaced_by_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            min_fitness = 250.0

            [classification]
            infrastructure_markers = ["DAO"]
        "#})
        .unwrap();
        assert!(config.thresholds.is_none());
        assert_eq!(
            config.classification().infrastructure_markers,
            vec!["DAO".to_string()]
        );
    }

    #[test]
    fn config_is_found_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nmin_fitness = 60.0\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.thresholds().min_fitness, 60.0);
    }

    #[test]
    fn explicit_path_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[thresholds\n").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
