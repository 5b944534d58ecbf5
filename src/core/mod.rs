pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{ArtifactKind, DddType, Field, Method, Visibility};

/// Round to two decimal places, the precision of every exposed float
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
