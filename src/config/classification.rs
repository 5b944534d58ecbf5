use serde::{Deserialize, Serialize};

/// Heuristic inputs of the DDD role classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Type-name prefixes treated as language primitives or boxed primitives
    #[serde(default = "default_primitive_prefixes")]
    pub primitive_prefixes: Vec<String>,

    /// Type-name prefixes of date/time library types
    #[serde(default = "default_temporal_types")]
    pub temporal_types: Vec<String>,

    /// Case-insensitive name fragments that force INFRASTRUCTURE
    #[serde(default = "default_infrastructure_markers")]
    pub infrastructure_markers: Vec<String>,

    /// Field-type fragment that marks a class as a domain service
    #[serde(default = "default_repository_marker")]
    pub repository_marker: String,

    /// Module whose direct children are domain modules (default: "domain")
    #[serde(default = "default_domain_root")]
    pub domain_root: String,

    /// Tag controllers, repositories, factories and application services by
    /// naming suffix before the rule engine runs
    #[serde(default = "default_structural_tagging")]
    pub structural_tagging: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            primitive_prefixes: default_primitive_prefixes(),
            temporal_types: default_temporal_types(),
            infrastructure_markers: default_infrastructure_markers(),
            repository_marker: default_repository_marker(),
            domain_root: default_domain_root(),
            structural_tagging: default_structural_tagging(),
        }
    }
}

impl ClassificationConfig {
    pub fn is_primitive(&self, type_name: &str) -> bool {
        self.primitive_prefixes
            .iter()
            .any(|prefix| type_name.starts_with(prefix.as_str()))
    }

    pub fn is_temporal(&self, type_name: &str) -> bool {
        self.temporal_types
            .iter()
            .any(|prefix| type_name.starts_with(prefix.as_str()))
    }

    /// Whether the name contains an infrastructure marker, ignoring case
    pub fn has_infrastructure_marker(&self, name: &str) -> bool {
        let upper = name.to_uppercase();
        self.infrastructure_markers
            .iter()
            .any(|marker| upper.contains(&marker.to_uppercase()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.domain_root.trim().is_empty() {
            return Err("classification.domain_root must not be empty".to_string());
        }
        if self.repository_marker.is_empty() {
            return Err("classification.repository_marker must not be empty".to_string());
        }
        Ok(())
    }
}

pub fn default_primitive_prefixes() -> Vec<String> {
    [
        "java.lang.",
        "String",
        "boolean",
        "byte",
        "char",
        "short",
        "int",
        "long",
        "float",
        "double",
        "Boolean",
        "Byte",
        "Character",
        "Short",
        "Integer",
        "Long",
        "Float",
        "Double",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_temporal_types() -> Vec<String> {
    [
        "java.time.",
        "java.util.Date",
        "java.util.Calendar",
        "java.sql.Date",
        "java.sql.Timestamp",
        "org.joda.time.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_infrastructure_markers() -> Vec<String> {
    vec!["JPA".to_string(), "CRUD".to_string()]
}

fn default_repository_marker() -> String {
    "Repository".to_string()
}

fn default_domain_root() -> String {
    crate::model::DEFAULT_DOMAIN_ROOT.to_string()
}

fn default_structural_tagging() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_match_by_prefix() {
        let config = ClassificationConfig::default();
        assert!(config.is_primitive("java.lang.String"));
        assert!(config.is_primitive("int"));
        assert!(config.is_primitive("Integer"));
        assert!(!config.is_primitive("java.util.List"));
    }

    #[test]
    fn markers_ignore_case() {
        let config = ClassificationConfig::default();
        assert!(config.has_infrastructure_marker("CustomerCrud"));
        assert!(config.has_infrastructure_marker("JpaCustomerStore"));
        assert!(!config.has_infrastructure_marker("Customer"));
    }

    #[test]
    fn empty_domain_root_is_invalid() {
        let config = ClassificationConfig {
            domain_root: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
