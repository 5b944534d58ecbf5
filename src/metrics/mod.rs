//! DDD and OOD metrics over a classified model

pub mod ddd;
pub mod ood;
mod report;

pub use ddd::{
    artifact_tally, ddd_counts, ddd_report, global_fitness, hotspots, ArtifactSummary, DddReport,
};
pub use ood::{depends_on, ood_report, DistanceSummary, OodModuleMetrics, OodReport};
pub use report::{report, Report};
