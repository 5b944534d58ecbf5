use super::rules::is_foreign_key;
use crate::config::ClassificationConfig;
use crate::core::{DddType, Field};
use crate::model::{Artifact, ArtifactId, StructuralModel};
use rayon::prelude::*;

/// Name mentions a time or date, or the type is a date/time library type
fn is_timestamp(field: &Field, config: &ClassificationConfig) -> bool {
    let name = field.name.to_lowercase();
    name.contains("time") || name.contains("date") || config.is_temporal(&field.type_name)
}

/// A domain object carrying both a timestamp and a reference to another
/// identity describes something that happened. The two may be different
/// fields.
pub fn is_domain_event(artifact: &Artifact, config: &ClassificationConfig) -> bool {
    let fields = artifact.fields();
    fields.iter().any(|f| is_timestamp(f, config)) && fields.iter().any(is_foreign_key)
}

/// Promote entities, aggregate roots and value objects that look like domain
/// events. Returns the number of promoted artifacts.
pub fn refine_domain_events(model: &mut StructuralModel, config: &ClassificationConfig) -> usize {
    let promoted: Vec<ArtifactId> = model
        .artifact_slice()
        .par_iter()
        .filter(|a| a.ddd_type().is_some_and(|t| t.is_domain_object()))
        .filter(|a| is_domain_event(a, config))
        .map(Artifact::id)
        .collect();

    for id in &promoted {
        tracing::debug!(artifact = %model.get(*id).path(), "promoted to domain event");
        model.set_ddd_type(*id, DddType::DomainEvent);
    }
    promoted.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_model(fields: &[(&str, &str)], role: DddType) -> (StructuralModel, ArtifactId) {
        let mut model = StructuralModel::new("com.acme");
        let module = model.add_module(None, "com.acme.orders").unwrap();
        let id = model.add_class(Some(module), "com.acme.orders.OrderPlaced").unwrap();
        for (name, type_name) in fields {
            model.add_field(id, Field::private(*name, *type_name)).unwrap();
        }
        model.set_ddd_type(id, role);
        (model, id)
    }

    #[test]
    fn timestamp_and_foreign_key_promote_entity() {
        let (mut model, id) = event_model(
            &[("orderId", "long"), ("placedAt", "java.time.Instant")],
            DddType::Entity,
        );
        assert_eq!(refine_domain_events(&mut model, &ClassificationConfig::default()), 1);
        assert_eq!(model.get(id).ddd_type(), Some(DddType::DomainEvent));
    }

    #[test]
    fn timestamp_by_name_is_enough() {
        let (mut model, id) = event_model(
            &[("customerID", "long"), ("creationDate", "long")],
            DddType::ValueObject,
        );
        refine_domain_events(&mut model, &ClassificationConfig::default());
        assert_eq!(model.get(id).ddd_type(), Some(DddType::DomainEvent));
    }

    #[test]
    fn plain_id_is_not_a_foreign_key() {
        let (mut model, id) = event_model(
            &[("id", "long"), ("timestamp", "long")],
            DddType::AggregateRoot,
        );
        assert_eq!(refine_domain_events(&mut model, &ClassificationConfig::default()), 0);
        assert_eq!(model.get(id).ddd_type(), Some(DddType::AggregateRoot));
    }

    #[test]
    fn services_are_never_refined() {
        let (mut model, id) = event_model(
            &[("orderId", "long"), ("time", "long")],
            DddType::Service,
        );
        refine_domain_events(&mut model, &ClassificationConfig::default());
        assert_eq!(model.get(id).ddd_type(), Some(DddType::Service));
    }
}
