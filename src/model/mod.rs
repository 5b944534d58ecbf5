//! Structural model of the analyzed codebase

mod artifact;
pub mod snapshot;
mod structural;

pub use artifact::{Artifact, ArtifactId};
pub use snapshot::{load_model, ArtifactSnapshot, ModelSnapshot};
pub use structural::{StructuralModel, DEFAULT_DOMAIN_ROOT};
