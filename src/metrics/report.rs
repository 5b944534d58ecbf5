use super::ddd::{ddd_report, DddReport};
use super::ood::{ood_report, OodReport};
use crate::core::Result;
use crate::fitness::score_all;
use crate::model::StructuralModel;
use serde::{Deserialize, Serialize};

/// Complete result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub ddd: DddReport,
    pub ood: OodReport,
}

impl Report {
    /// Global fitness percentage
    pub fn fitness(&self) -> f64 {
        self.ddd.fitness.fitness
    }
}

/// Score every artifact and compute DDD and OOD metrics.
///
/// Fitness ledgers are cached on the artifacts, so a second call on an
/// unchanged model reuses them and yields an identical report.
pub fn report(model: &mut StructuralModel) -> Result<Report> {
    let _span = tracing::info_span!("report", artifacts = model.len()).entered();
    model.validate()?;
    score_all(model);

    let model: &StructuralModel = model;
    let (ddd, ood) = rayon::join(|| ddd_report(model), || ood_report(model));
    tracing::info!(
        fitness = ddd.fitness.fitness,
        hotspots = ddd.hotspots.len(),
        modules = ood.per_module.len(),
        "report computed"
    );
    Ok(Report { ddd, ood })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DddType, Method};

    #[test]
    fn report_is_stable_across_calls() {
        let mut model = StructuralModel::new("com.acme");
        let module = model.add_module(None, "com.acme.app").unwrap();
        model.set_ddd_type(module, DddType::Module);
        let id = model.add_class(Some(module), "com.acme.app.Price").unwrap();
        model.add_method(id, Method::public("setAmount", "void setAmount(int)")).unwrap();
        model.set_ddd_type(id, DddType::ValueObject);

        let first = report(&mut model).unwrap();
        let second = report(&mut model).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.ddd.hotspots.len(), 1);
        assert!(first.fitness() < 100.0);
    }
}
