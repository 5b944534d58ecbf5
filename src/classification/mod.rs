//! DDD role classification.
//!
//! Classification runs as a sequence of passes over the model. Each pass
//! decides on an immutable view (in parallel where the rules allow it) and
//! applies its decisions afterwards, so rules always observe the complete
//! result of the previous pass:
//!
//! 1. modules without a role become MODULE
//! 2. primary rules for every untyped class
//! 3. domain-event refinement of entities, aggregate roots and value objects
//! 4. aggregate-root selection per domain module
//!
//! Roles that are already set (for example by ingestion or by
//! [`tag_structural_roles`]) are never overwritten by the primary rules.
//! Re-running the classifier on an unchanged model changes nothing.

pub mod aggregate_root;
pub mod domain_event;
pub mod rules;
mod structural;

pub use aggregate_root::{promote_aggregate_roots, select_roots};
pub use domain_event::{is_domain_event, refine_domain_events};
pub use rules::PrimaryRules;
pub use structural::tag_structural_roles;

use crate::config::ClassificationConfig;
use crate::core::{DddType, Result};
use crate::model::{Artifact, ArtifactId, StructuralModel};
use rayon::prelude::*;
use serde::Serialize;

/// Number of artifacts each pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSummary {
    pub modules: usize,
    pub primary: usize,
    pub domain_events: usize,
    pub aggregate_roots: usize,
}

impl ClassificationSummary {
    pub fn total(&self) -> usize {
        self.modules + self.primary + self.domain_events + self.aggregate_roots
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassificationConfig,
}

impl Classifier {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Assign DDD roles in place.
    ///
    /// Fails only when the model contains a malformed artifact. Every role
    /// change drops the cached fitness ledgers of the model.
    pub fn classify(&self, model: &mut StructuralModel) -> Result<ClassificationSummary> {
        let _span = tracing::info_span!("classify", artifacts = model.len()).entered();
        model.validate()?;

        let summary = ClassificationSummary {
            modules: tag_modules(model),
            primary: self.primary_pass(model),
            domain_events: refine_domain_events(model, &self.config),
            aggregate_roots: promote_aggregate_roots(model),
        };

        tracing::info!(
            modules = summary.modules,
            primary = summary.primary,
            domain_events = summary.domain_events,
            aggregate_roots = summary.aggregate_roots,
            "classification finished"
        );
        Ok(summary)
    }

    fn primary_pass(&self, model: &mut StructuralModel) -> usize {
        let decisions: Vec<(ArtifactId, DddType)> = {
            let rules = PrimaryRules::new(model, &self.config);
            let pending: Vec<&Artifact> = model
                .class_likes()
                .filter(|a| a.ddd_type().is_none())
                .collect();
            pending
                .par_iter()
                .map(|artifact| (artifact.id(), rules.classify(artifact)))
                .collect()
        };

        for (id, role) in &decisions {
            tracing::debug!(artifact = %model.get(*id).path(), role = %role, "classified");
            model.set_ddd_type(*id, *role);
        }
        decisions.len()
    }
}

fn tag_modules(model: &mut StructuralModel) -> usize {
    let untyped: Vec<ArtifactId> = model
        .modules()
        .filter(|m| m.ddd_type().is_none())
        .map(Artifact::id)
        .collect();
    for id in &untyped {
        model.set_ddd_type(*id, DddType::Module);
    }
    untyped.len()
}

/// Classify with the default heuristics
pub fn classify(model: &mut StructuralModel) -> Result<ClassificationSummary> {
    Classifier::default().classify(model)
}
