//! End-to-end analysis of one model: structural tagging, classification and
//! reporting.

use crate::classification::{tag_structural_roles, ClassificationSummary, Classifier};
use crate::config::ClassificationConfig;
use crate::core::Result;
use crate::metrics::{report, Report};
use crate::model::StructuralModel;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Artifacts tagged from naming and implemented interfaces
    pub structurally_tagged: usize,
    pub classification: ClassificationSummary,
    pub report: Report,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    classifier: Classifier,
}

impl Analyzer {
    pub fn new(config: ClassificationConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
        }
    }

    pub fn config(&self) -> &ClassificationConfig {
        self.classifier.config()
    }

    pub fn run(&self, model: &mut StructuralModel) -> Result<Analysis> {
        let _span = tracing::info_span!("analyze", model = %model.path()).entered();
        let config = self.classifier.config();
        model.set_domain_root(config.domain_root.clone());

        let structurally_tagged = if config.structural_tagging {
            tag_structural_roles(model)
        } else {
            0
        };
        let classification = self.classifier.classify(model)?;
        let report = report(model)?;

        Ok(Analysis {
            structurally_tagged,
            classification,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DddType, Field, Method};

    fn shop() -> StructuralModel {
        let mut model = StructuralModel::new("com.shop");
        let root = model.add_module(None, "com.shop").unwrap();
        let core = model.add_module(Some(root), "com.shop.core").unwrap();
        let cart = model.add_module(Some(core), "com.shop.core.cart").unwrap();
        let entity = model.add_class(Some(cart), "com.shop.core.cart.Cart").unwrap();
        model.add_field(entity, Field::private("id", "long")).unwrap();
        model.add_method(entity, Method::public("getId", "long getId()")).unwrap();
        let repo = model
            .add_interface(Some(cart), "com.shop.core.cart.CartRepository")
            .unwrap();
        model
            .add_method(repo, Method::public("find", "com.shop.core.cart.Cart find(long)"))
            .unwrap();
        model
    }

    #[test]
    fn configured_domain_root_drives_aggregate_selection() {
        let config = ClassificationConfig {
            domain_root: "core".to_string(),
            ..ClassificationConfig::default()
        };
        let mut model = shop();
        let analysis = Analyzer::new(config).run(&mut model).unwrap();

        assert_eq!(analysis.structurally_tagged, 1);
        assert_eq!(analysis.classification.aggregate_roots, 1);
        let cart = model.by_path("com.shop.core.cart.Cart").unwrap();
        assert_eq!(cart.ddd_type(), Some(DddType::AggregateRoot));
        assert_eq!(analysis.report.ddd.counts[&DddType::Repository], 1);
    }

    #[test]
    fn structural_tagging_can_be_disabled() {
        let config = ClassificationConfig {
            structural_tagging: false,
            ..ClassificationConfig::default()
        };
        let mut model = shop();
        let analysis = Analyzer::new(config).run(&mut model).unwrap();

        assert_eq!(analysis.structurally_tagged, 0);
        let repo = model.by_path("com.shop.core.cart.CartRepository").unwrap();
        assert_eq!(repo.ddd_type(), None, "interfaces are not classified by the rule engine");
    }
}
