//! Aggregate root selection per domain module.
//!
//! Within a domain module, the entity that the fewest sibling entities point
//! at is the root of the aggregate. Ties are broken by naming: only entities
//! named like a domain module are promoted. A tie without such a name leaves
//! the module without a root.

use crate::core::DddType;
use crate::model::{Artifact, ArtifactId, StructuralModel};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Number of other candidates declaring a field typed with `target`'s path
fn inbound_references(target: &Artifact, candidates: &[&Artifact]) -> usize {
    candidates
        .iter()
        .filter(|other| other.id() != target.id())
        .filter(|other| {
            other
                .fields()
                .iter()
                .any(|field| field.type_name == target.path())
        })
        .count()
}

/// Roots of one module. Candidates are the directly contained entities
/// together with aggregate roots already promoted in an earlier run.
pub fn select_roots(
    model: &StructuralModel,
    module: ArtifactId,
    domain_modules: &BTreeSet<String>,
) -> Vec<ArtifactId> {
    let candidates: Vec<&Artifact> = model
        .get(module)
        .contains()
        .iter()
        .map(|id| model.get(*id))
        .filter(|a| a.has_type(DddType::Entity) || a.has_type(DddType::AggregateRoot))
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let counts: Vec<usize> = candidates
        .iter()
        .map(|candidate| inbound_references(candidate, &candidates))
        .collect();
    let Some(minimum) = counts.iter().copied().min() else {
        return Vec::new();
    };
    let least_referenced: Vec<&Artifact> = candidates
        .iter()
        .zip(&counts)
        .filter(|(_, count)| **count == minimum)
        .map(|(candidate, _)| *candidate)
        .collect();

    match least_referenced.as_slice() {
        [single] => vec![single.id()],
        tied => tied
            .iter()
            .filter(|candidate| domain_modules.contains(&candidate.name().to_lowercase()))
            .map(|candidate| candidate.id())
            .collect(),
    }
}

/// Promote aggregate roots in every domain module. Returns the number of
/// entities that changed role.
pub fn promote_aggregate_roots(model: &mut StructuralModel) -> usize {
    let domain_modules = model.domain_modules();
    let roots: Vec<ArtifactId> = {
        let view: &StructuralModel = model;
        let modules: Vec<&Artifact> = view
            .modules()
            .filter(|m| domain_modules.contains(m.name()))
            .collect();
        modules
            .par_iter()
            .flat_map_iter(|module| select_roots(view, module.id(), &domain_modules))
            .collect()
    };

    let mut promoted = 0;
    for id in roots {
        if model.get(id).has_type(DddType::Entity) {
            tracing::debug!(artifact = %model.get(id).path(), "promoted to aggregate root");
            model.set_ddd_type(id, DddType::AggregateRoot);
            promoted += 1;
        }
    }
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;

    struct Fixture {
        model: StructuralModel,
        module: ArtifactId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut model = StructuralModel::new("com.acme");
            let root = model.add_module(None, "com.acme").unwrap();
            let domain = model.add_module(Some(root), "com.acme.domain").unwrap();
            let module = model.add_module(Some(domain), "com.acme.domain.order").unwrap();
            Self { model, module }
        }

        fn entity(&mut self, name: &str, refs: &[&str]) -> ArtifactId {
            let path = format!("com.acme.domain.order.{name}");
            let id = self.model.add_class(Some(self.module), &path).unwrap();
            for (i, target) in refs.iter().enumerate() {
                let field = Field::private(format!("ref{i}"), format!("com.acme.domain.order.{target}"));
                self.model.add_field(id, field).unwrap();
            }
            self.model.set_ddd_type(id, DddType::Entity);
            id
        }
    }

    #[test]
    fn least_referenced_entity_becomes_root() {
        let mut fx = Fixture::new();
        let cart = fx.entity("Cart", &["Line", "Customer"]);
        let line = fx.entity("Line", &["Customer"]);
        let customer = fx.entity("Customer", &[]);

        assert_eq!(promote_aggregate_roots(&mut fx.model), 1);
        assert_eq!(fx.model.get(cart).ddd_type(), Some(DddType::AggregateRoot));
        assert_eq!(fx.model.get(line).ddd_type(), Some(DddType::Entity));
        assert_eq!(fx.model.get(customer).ddd_type(), Some(DddType::Entity));
    }

    #[test]
    fn tie_is_broken_by_domain_module_name() {
        let mut fx = Fixture::new();
        let order = fx.entity("Order", &["Item"]);
        let invoice = fx.entity("Invoice", &["Item"]);
        let item = fx.entity("Item", &[]);

        promote_aggregate_roots(&mut fx.model);
        assert_eq!(fx.model.get(order).ddd_type(), Some(DddType::AggregateRoot));
        assert_eq!(fx.model.get(invoice).ddd_type(), Some(DddType::Entity));
        assert_eq!(fx.model.get(item).ddd_type(), Some(DddType::Entity));
    }

    #[test]
    fn tie_without_matching_name_promotes_nothing() {
        let mut fx = Fixture::new();
        fx.entity("Cart", &[]);
        fx.entity("Wishlist", &[]);
        assert_eq!(promote_aggregate_roots(&mut fx.model), 0);
    }

    #[test]
    fn non_domain_modules_are_skipped() {
        let mut model = StructuralModel::new("com.acme");
        let web = model.add_module(None, "com.acme.web").unwrap();
        let id = model.add_class(Some(web), "com.acme.web.Session").unwrap();
        model.set_ddd_type(id, DddType::Entity);

        assert_eq!(promote_aggregate_roots(&mut model), 0);
    }

    #[test]
    fn earlier_roots_take_part_in_selection() {
        let mut fx = Fixture::new();
        let cart = fx.entity("Cart", &["Line"]);
        fx.entity("Line", &[]);
        fx.model.set_ddd_type(cart, DddType::AggregateRoot);

        let domain_modules = fx.model.domain_modules();
        assert_eq!(select_roots(&fx.model, fx.module, &domain_modules), vec![cart]);
        assert_eq!(promote_aggregate_roots(&mut fx.model), 0);
    }
}
