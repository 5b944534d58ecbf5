//! Primary DDD role rules.
//!
//! Rules are tried in a fixed order and the first match wins:
//! infrastructure naming override, value object, entity, service, and
//! finally the INFRASTRUCTURE default.

use crate::config::ClassificationConfig;
use crate::core::{DddType, Field};
use crate::model::{Artifact, ArtifactId, StructuralModel};

/// Field named `id` (any case) or typed with an `...Id` type
pub fn is_identity_field(field: &Field) -> bool {
    field.name.eq_ignore_ascii_case("id") || field.type_name.ends_with("Id")
}

/// Field whose name ends with `id` in any case, including `id` itself
pub fn has_id_suffix(field: &Field) -> bool {
    field.name.to_lowercase().ends_with("id")
}

/// Reference to another identity, e.g. `customerId`
pub fn is_foreign_key(field: &Field) -> bool {
    has_id_suffix(field) && !field.name.eq_ignore_ascii_case("id")
}

/// Primary rule set evaluated against an immutable view of the model
pub struct PrimaryRules<'a> {
    model: &'a StructuralModel,
    config: &'a ClassificationConfig,
    known_classes: Vec<(ArtifactId, &'a str)>,
}

impl<'a> PrimaryRules<'a> {
    pub fn new(model: &'a StructuralModel, config: &'a ClassificationConfig) -> Self {
        let known_classes = model
            .class_likes()
            .map(|a| (a.id(), a.name()))
            .filter(|(_, name)| !name.is_empty())
            .collect();
        Self {
            model,
            config,
            known_classes,
        }
    }

    /// Role for an artifact that has no role yet
    pub fn classify(&self, artifact: &Artifact) -> DddType {
        if self.config.has_infrastructure_marker(artifact.name()) {
            DddType::Infrastructure
        } else if self.is_value_object(artifact) {
            DddType::ValueObject
        } else if self.is_entity(artifact) {
            DddType::Entity
        } else if self.is_service(artifact) {
            DddType::Service
        } else {
            DddType::Infrastructure
        }
    }

    pub fn is_value_object(&self, artifact: &Artifact) -> bool {
        let fields = artifact.fields();
        if fields.is_empty() {
            return false;
        }
        let is_id_type = artifact.name().to_lowercase().ends_with("id");
        let plain = fields.iter().all(|field| {
            !field.is_constant()
                && (is_id_type || !has_id_suffix(field))
                && (self.config.is_primitive(&field.type_name)
                    || self.model.resolves_within(&field.type_name))
        });
        plain && has_accessors_or_no_methods(artifact)
    }

    pub fn is_entity(&self, artifact: &Artifact) -> bool {
        let fields = artifact.fields();
        if fields.iter().any(Field::is_constant) {
            return false;
        }
        if fields.iter().any(is_identity_field) {
            return true;
        }
        !fields.is_empty()
            && !self.embeds_known_class(artifact)
            && has_accessors_or_no_methods(artifact)
    }

    pub fn is_service(&self, artifact: &Artifact) -> bool {
        artifact
            .fields()
            .iter()
            .any(|field| field.type_name.contains(self.config.repository_marker.as_str()))
            || self.embeds_known_class(artifact)
    }

    /// Whether the name contains another class's name. A name that is exactly
    /// the other name plus a trailing `s` does not count.
    pub fn embeds_known_class(&self, artifact: &Artifact) -> bool {
        let name = artifact.name();
        self.known_classes.iter().any(|(id, other)| {
            *id != artifact.id() && name.contains(other) && name.strip_suffix('s') != Some(*other)
        })
    }
}

/// Declares a getter or setter, a method returning one of the field types,
/// or no methods at all
fn has_accessors_or_no_methods(artifact: &Artifact) -> bool {
    let methods = artifact.methods();
    methods.is_empty()
        || methods.iter().any(|method| {
            method.is_accessor()
                || artifact
                    .fields()
                    .iter()
                    .any(|field| field.type_name == method.return_type())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Method;

    fn model() -> (StructuralModel, ArtifactId) {
        let mut model = StructuralModel::new("com.acme");
        let module = model.add_module(None, "com.acme.shop").unwrap();
        (model, module)
    }

    fn classify(model: &StructuralModel, id: ArtifactId) -> DddType {
        let config = ClassificationConfig::default();
        PrimaryRules::new(model, &config).classify(model.get(id))
    }

    #[test]
    fn naming_override_beats_value_object() {
        let (mut model, module) = model();
        let id = model.add_class(Some(module), "com.acme.shop.CustomerJpa").unwrap();
        model.add_field(id, Field::private("name", "String")).unwrap();
        assert_eq!(classify(&model, id), DddType::Infrastructure);
    }

    #[test]
    fn id_field_prevents_value_object_unless_type_is_an_id() {
        let (mut model, module) = model();
        let customer_id = model
            .add_class(Some(module), "com.acme.shop.CustomerId")
            .unwrap();
        model.add_field(customer_id, Field::private("uuid", "String")).unwrap();
        model.add_field(customer_id, Field::private("legacyId", "long")).unwrap();
        assert_eq!(classify(&model, customer_id), DddType::ValueObject);

        let order = model.add_class(Some(module), "com.acme.shop.Order").unwrap();
        model.add_field(order, Field::private("orderId", "long")).unwrap();
        assert_eq!(classify(&model, order), DddType::Entity);
    }

    #[test]
    fn constants_disqualify_value_object_and_entity() {
        let (mut model, module) = model();
        let id = model.add_class(Some(module), "com.acme.shop.Limits").unwrap();
        model.add_field(id, Field::private("MAX", "int")).unwrap();
        model.add_field(id, Field::private("id", "long")).unwrap();
        assert_eq!(classify(&model, id), DddType::Infrastructure);
    }

    #[test]
    fn unconventional_getter_counts_as_accessor() {
        let (mut model, module) = model();
        let id = model.add_class(Some(module), "com.acme.shop.Money").unwrap();
        model
            .add_field(id, Field::private("amount", "java.math.BigDecimal"))
            .unwrap();
        model
            .add_method(id, Method::public("amount", "java.math.BigDecimal amount()"))
            .unwrap();
        // external field type: not a value object, but an entity by accessor
        assert_eq!(classify(&model, id), DddType::Entity);
    }

    #[test]
    fn embedding_other_class_name_makes_service() {
        let (mut model, module) = model();
        model.add_class(Some(module), "com.acme.shop.Invoice").unwrap();
        let printer = model
            .add_class(Some(module), "com.acme.shop.InvoicePrinter")
            .unwrap();
        model
            .add_field(printer, Field::private("template", "java.io.File"))
            .unwrap();
        assert_eq!(classify(&model, printer), DddType::Service);
    }

    #[test]
    fn class_without_members_is_infrastructure() {
        let (mut model, module) = model();
        let id = model.add_class(Some(module), "com.acme.shop.Main").unwrap();
        assert_eq!(classify(&model, id), DddType::Infrastructure);
    }

    #[test]
    fn foreign_key_excludes_plain_id() {
        assert!(is_foreign_key(&Field::private("customerID", "long")));
        assert!(!is_foreign_key(&Field::private("Id", "long")));
        assert!(is_identity_field(&Field::private("key", "com.acme.OrderId")));
    }
}
