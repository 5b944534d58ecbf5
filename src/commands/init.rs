use crate::config::{DddmapConfig, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const HEADER: &str = "# dddmap configuration\n\n";

/// Write the default configuration into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = toml::to_string_pretty(&DddmapConfig::template())
        .context("Failed to render default configuration")?;
    fs::write(&config_path, format!("{HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        init_config_in(dir.path(), true).unwrap();
    }

    #[test]
    fn written_config_parses_back() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        let text = fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let config = parse_and_validate_config(&text).unwrap();
        assert_eq!(config, DddmapConfig::template());
    }
}
