use serde::{Deserialize, Serialize};

/// Quality gate applied by `dddmap validate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Minimum global fitness percentage
    #[serde(default = "default_min_fitness")]
    pub min_fitness: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_fitness: default_min_fitness(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.min_fitness) {
            return Err(format!(
                "min_fitness must be between 0 and 100, got {}",
                self.min_fitness
            ));
        }
        Ok(())
    }
}

pub fn default_min_fitness() -> f64 {
    80.0
}
