//! Package metrics after Robert C. Martin, computed per module over the
//! class- and interface-like artifacts it directly contains.

use crate::core::round2;
use crate::model::{Artifact, ArtifactId, StructuralModel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coupling metrics of one module. Ratios with a zero denominator are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OodModuleMetrics {
    pub abstractness: Option<f64>,
    pub instability: Option<f64>,
    pub distance: Option<f64>,
    pub files: usize,
    pub afferent: usize,
    pub efferent: usize,
}

/// Distance from the main sequence over all modules where it is defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceSummary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OodReport {
    pub per_module: BTreeMap<String, OodModuleMetrics>,
    pub distance: Option<DistanceSummary>,
}

/// Running sum/min/max of distances
#[derive(Debug, Default)]
struct DistanceAccumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl DistanceAccumulator {
    fn add(&mut self, distance: f64) {
        if self.count == 0 {
            self.min = distance;
            self.max = distance;
        } else {
            self.min = self.min.min(distance);
            self.max = self.max.max(distance);
        }
        self.sum += distance;
        self.count += 1;
    }

    fn finish(self) -> Option<DistanceSummary> {
        (self.count > 0).then(|| DistanceSummary {
            avg: round2(self.sum / self.count as f64),
            min: round2(self.min),
            max: round2(self.max),
        })
    }
}

/// Whether `file` depends on `module`: it implements an interface contained
/// in the module, it is a class whose superclass lives there, or one of its
/// dependency strings mentions `.<module name>.`
pub fn depends_on(model: &StructuralModel, file: &Artifact, module: &Artifact) -> bool {
    let inside = |id: ArtifactId| model.get(id).parent() == Some(module.id());

    if file.implements().iter().any(|interface| inside(*interface)) {
        return true;
    }
    if file.kind().is_class_like() && file.extends().is_some_and(inside) {
        return true;
    }
    let pattern = format!(".{}.", module.name());
    file.dependencies().iter().any(|dep| dep.contains(&pattern))
}

/// Instability I = Ce / (Ca + Ce), undefined when the module is not coupled
pub fn instability(afferent: usize, efferent: usize) -> Option<f64> {
    let total = afferent + efferent;
    (total > 0).then(|| efferent as f64 / total as f64)
}

/// Abstractness A = interfaces / files, undefined for a module without files
pub fn abstractness(interfaces: usize, files: usize) -> Option<f64> {
    (files > 0).then(|| interfaces as f64 / files as f64)
}

/// Unrounded metrics of one module
fn module_metrics(model: &StructuralModel, module: &Artifact) -> (OodModuleMetrics, Option<f64>) {
    let own_files: Vec<&Artifact> = model.files_of(module.id()).collect();
    let interfaces = own_files
        .iter()
        .filter(|file| file.kind().is_interface_like())
        .count();

    let others: Vec<&Artifact> = model.modules().filter(|m| m.id() != module.id()).collect();
    let afferent = others
        .iter()
        .flat_map(|other| model.files_of(other.id()))
        .filter(|file| depends_on(model, file, module))
        .count();
    let efferent = own_files
        .iter()
        .filter(|file| others.iter().any(|other| depends_on(model, file, other)))
        .count();

    // a module without files has no metrics even when dependency strings
    // mention its name
    let abstractness = abstractness(interfaces, own_files.len());
    let instability = if own_files.is_empty() {
        None
    } else {
        instability(afferent, efferent)
    };
    let distance = abstractness
        .zip(instability)
        .map(|(a, i)| (a + i - 1.0).abs());

    let metrics = OodModuleMetrics {
        abstractness: abstractness.map(round2),
        instability: instability.map(round2),
        distance: distance.map(round2),
        files: own_files.len(),
        afferent,
        efferent,
    };
    (metrics, distance)
}

pub fn ood_report(model: &StructuralModel) -> OodReport {
    let modules: Vec<&Artifact> = model.modules().collect();
    let computed: Vec<(String, OodModuleMetrics, Option<f64>)> = modules
        .par_iter()
        .map(|module| {
            let (metrics, distance) = module_metrics(model, module);
            (module.path().to_string(), metrics, distance)
        })
        .collect();

    let mut accumulator = DistanceAccumulator::default();
    let mut per_module = BTreeMap::new();
    for (path, metrics, distance) in computed {
        if let Some(distance) = distance {
            accumulator.add(distance);
        }
        per_module.insert(path, metrics);
    }

    OodReport {
        per_module,
        distance: accumulator.finish(),
    }
}
