//! DDD role tallies, global fitness and hotspots

use crate::core::DddType;
use crate::fitness::{rollup_fitness, Fitness, FitnessChecker, FitnessSummary};
use crate::model::{Artifact, StructuralModel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Compact view of an artifact that needs attention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSummary {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub ddd_type: Option<DddType>,
    pub percentage: f64,
    pub issue_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DddReport {
    /// Fitness of all artifacts merged together
    pub fitness: FitnessSummary,
    /// Artifacts per role, for the roles tracked by the DDD metrics
    pub counts: BTreeMap<DddType, usize>,
    /// Artifacts per role over every role, including controllers and events
    pub artifact_counts: BTreeMap<DddType, usize>,
    /// Rolled-up fitness per module path
    pub modules: BTreeMap<String, FitnessSummary>,
    pub hotspots: Vec<ArtifactSummary>,
}

/// Ledger of an artifact, cached when present, evaluated otherwise
fn fitness_of<'m>(artifact: &'m Artifact, checker: &FitnessChecker<'_>) -> Cow<'m, Fitness> {
    match artifact.fitness() {
        Some(fitness) => Cow::Borrowed(fitness),
        None => Cow::Owned(checker.evaluate(artifact.id())),
    }
}

/// Number of artifacts per role over every role
pub fn artifact_tally(model: &StructuralModel) -> BTreeMap<DddType, usize> {
    let mut tally: BTreeMap<DddType, usize> = DddType::ALL.iter().map(|t| (*t, 0)).collect();
    for ddd_type in model.artifacts().filter_map(Artifact::ddd_type) {
        *tally.entry(ddd_type).or_insert(0) += 1;
    }
    tally
}

/// Number of artifacts per role, limited to the roles tracked by the DDD
/// metrics
pub fn ddd_counts(model: &StructuralModel) -> BTreeMap<DddType, usize> {
    let tally = artifact_tally(model);
    DddType::COUNTED
        .iter()
        .map(|t| (*t, tally.get(t).copied().unwrap_or(0)))
        .collect()
}

/// Every artifact ledger merged in model order
pub fn global_fitness(model: &StructuralModel) -> Fitness {
    let checker = FitnessChecker::new(model);
    model
        .artifact_slice()
        .par_iter()
        .map(|artifact| fitness_of(artifact, &checker).into_owned())
        .reduce(Fitness::new, Fitness::merged)
}

/// Artifacts with issues or with less than perfect fitness, in model order
pub fn hotspots(model: &StructuralModel) -> Vec<ArtifactSummary> {
    let checker = FitnessChecker::new(model);
    model
        .artifact_slice()
        .par_iter()
        .filter_map(|artifact| {
            let fitness = fitness_of(artifact, &checker);
            fitness.is_hotspot().then(|| ArtifactSummary {
                name: artifact.name().to_string(),
                path: artifact.path().to_string(),
                ddd_type: artifact.ddd_type(),
                percentage: fitness.percentage(),
                issue_count: fitness.issues().len(),
            })
        })
        .collect()
}

pub fn ddd_report(model: &StructuralModel) -> DddReport {
    let modules = model
        .modules()
        .map(|module| {
            (
                module.path().to_string(),
                rollup_fitness(model, module.id()).summary(),
            )
        })
        .collect();

    DddReport {
        fitness: global_fitness(model).summary(),
        counts: ddd_counts(model),
        artifact_counts: artifact_tally(model),
        modules,
        hotspots: hotspots(model),
    }
}
