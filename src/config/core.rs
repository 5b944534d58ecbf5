use serde::{Deserialize, Serialize};

use super::classification::ClassificationConfig;
use super::thresholds::ThresholdsConfig;
use crate::io::output::OutputFormat;

/// Root configuration structure for dddmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DddmapConfig {
    /// Classification heuristics
    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    /// Quality gate thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Cap on the hotspots listed by terminal and markdown output
    #[serde(default)]
    pub max_hotspots: Option<usize>,
}

impl DddmapConfig {
    pub fn classification(&self) -> ClassificationConfig {
        self.classification.clone().unwrap_or_default()
    }

    pub fn thresholds(&self) -> ThresholdsConfig {
        self.thresholds.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn max_hotspots(&self) -> Option<usize> {
        self.output.as_ref().and_then(|o| o.max_hotspots)
    }

    /// Check every present section
    pub fn validate(&self) -> Result<(), String> {
        if let Some(classification) = &self.classification {
            classification.validate()?;
        }
        if let Some(thresholds) = &self.thresholds {
            thresholds.validate()?;
        }
        Ok(())
    }

    /// Configuration written by `dddmap init`
    pub fn template() -> Self {
        Self {
            classification: Some(ClassificationConfig::default()),
            thresholds: Some(ThresholdsConfig::default()),
            output: Some(OutputConfig {
                default_format: Some(OutputFormat::Terminal),
                max_hotspots: Some(20),
            }),
        }
    }
}
