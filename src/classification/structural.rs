use crate::core::DddType;
use crate::model::{Artifact, ArtifactId, StructuralModel};

/// Role implied by naming suffix or implemented repository interface
fn structural_role(model: &StructuralModel, artifact: &Artifact) -> Option<DddType> {
    let name = artifact.name();
    if name.ends_with("ApplicationService") {
        Some(DddType::ApplicationService)
    } else if name.ends_with("Controller") {
        Some(DddType::Controller)
    } else if name.ends_with("Repository")
        || artifact
            .implements()
            .iter()
            .any(|interface| model.get(*interface).name().ends_with("Repository"))
    {
        Some(DddType::Repository)
    } else if name.ends_with("Factory") {
        Some(DddType::Factory)
    } else {
        None
    }
}

/// Tag untyped class- and interface-like artifacts whose structure already
/// reveals their role. Returns the number of tagged artifacts.
pub fn tag_structural_roles(model: &mut StructuralModel) -> usize {
    let tagged: Vec<(ArtifactId, DddType)> = model
        .artifacts()
        .filter(|a| a.kind().is_file() && a.ddd_type().is_none())
        .filter_map(|a| structural_role(model, a).map(|role| (a.id(), role)))
        .collect();

    for (id, role) in &tagged {
        tracing::debug!(artifact = %model.get(*id).path(), role = %role, "tagged by structure");
        model.set_ddd_type(*id, *role);
    }
    tagged.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_and_repository_interfaces_are_tagged() {
        let mut model = StructuralModel::new("com.acme");
        let module = model.add_module(None, "com.acme.app").unwrap();
        let controller = model.add_class(Some(module), "com.acme.app.OrderController").unwrap();
        let repo_api = model
            .add_interface(Some(module), "com.acme.app.OrderRepository")
            .unwrap();
        let repo_impl = model.add_class(Some(module), "com.acme.app.SqlOrders").unwrap();
        model.add_implements(repo_impl, repo_api);
        let app = model
            .add_class(Some(module), "com.acme.app.CheckoutApplicationService")
            .unwrap();
        let factory = model.add_class(Some(module), "com.acme.app.OrderFactory").unwrap();
        let plain = model.add_class(Some(module), "com.acme.app.Order").unwrap();
        model.set_ddd_type(factory, DddType::Entity);

        assert_eq!(tag_structural_roles(&mut model), 4);
        assert_eq!(model.get(controller).ddd_type(), Some(DddType::Controller));
        assert_eq!(model.get(repo_api).ddd_type(), Some(DddType::Repository));
        assert_eq!(model.get(repo_impl).ddd_type(), Some(DddType::Repository));
        assert_eq!(model.get(app).ddd_type(), Some(DddType::ApplicationService));
        assert_eq!(model.get(factory).ddd_type(), Some(DddType::Entity));
        assert_eq!(model.get(plain).ddd_type(), None);
        assert_eq!(model.get(module).ddd_type(), None);
    }
}
