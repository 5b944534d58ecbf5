//! DDD role classification, fitness scoring and package coupling metrics
//! for object-oriented codebases.
//!
//! ```no_run
//! use dddmap::{classify, load_model, report};
//!
//! # fn main() -> dddmap::Result<()> {
//! let mut model = load_model(std::path::Path::new("model.json"))?;
//! classify(&mut model)?;
//! let report = report(&mut model)?;
//! println!("{} ({:.2}%)", report.ddd.fitness.score, report.fitness());
//! # Ok(())
//! # }
//! ```

pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod fitness;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod model;
pub mod pipeline;

pub use crate::core::{ArtifactKind, DddType, Error, Field, Method, Result, Visibility};

pub use crate::classification::{classify, ClassificationSummary, Classifier};

pub use crate::fitness::{
    rollup_fitness, score_all, score_fitness, Fitness, FitnessSummary, Issue, IssueType, Rating,
};

pub use crate::metrics::{report, ArtifactSummary, OodModuleMetrics, Report};

pub use crate::model::{load_model, Artifact, ArtifactId, ModelSnapshot, StructuralModel};

pub use crate::config::{load_config, ClassificationConfig, DddmapConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::pipeline::{Analysis, Analyzer};
