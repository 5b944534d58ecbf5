use crate::core::{ArtifactKind, DddType, Field, Method};
use crate::fitness::Fitness;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Index of an artifact inside its [`StructuralModel`](super::StructuralModel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(pub(crate) usize);

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A structural element of the analyzed codebase.
///
/// Artifacts are owned by the model; relations to other artifacts are stored
/// as [`ArtifactId`]s. Dependencies are kept as raw type-name strings since
/// they may point outside the analyzed codebase.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub(crate) id: ArtifactId,
    pub(crate) kind: ArtifactKind,
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) ddd_type: Option<DddType>,
    pub(crate) fields: Vec<Field>,
    pub(crate) methods: Vec<Method>,
    pub(crate) parent: Option<ArtifactId>,
    pub(crate) contains: Vec<ArtifactId>,
    pub(crate) extends: Option<ArtifactId>,
    pub(crate) implements: Vec<ArtifactId>,
    pub(crate) dependencies: BTreeSet<String>,
    pub(crate) fitness: Option<Fitness>,
}

impl Artifact {
    pub(crate) fn new(id: ArtifactId, kind: ArtifactKind, path: String, name: String) -> Self {
        Self {
            id,
            kind,
            path,
            name,
            ddd_type: None,
            fields: Vec::new(),
            methods: Vec::new(),
            parent: None,
            contains: Vec::new(),
            extends: None,
            implements: Vec::new(),
            dependencies: BTreeSet::new(),
            fitness: None,
        }
    }

    pub fn id(&self) -> ArtifactId {
        self.id
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Fully-qualified path, unique within the model
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ddd_type(&self) -> Option<DddType> {
        self.ddd_type
    }

    pub fn has_type(&self, ddd_type: DddType) -> bool {
        self.ddd_type == Some(ddd_type)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Containing module, if any
    pub fn parent(&self) -> Option<ArtifactId> {
        self.parent
    }

    /// Directly contained artifacts in discovery order
    pub fn contains(&self) -> &[ArtifactId] {
        &self.contains
    }

    pub fn extends(&self) -> Option<ArtifactId> {
        self.extends
    }

    pub fn implements(&self) -> &[ArtifactId] {
        &self.implements
    }

    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// Cached fitness ledger, present once the artifact has been scored
    pub fn fitness(&self) -> Option<&Fitness> {
        self.fitness.as_ref()
    }

    pub fn is_module(&self) -> bool {
        self.kind == ArtifactKind::Module
    }

    /// Whether any declared method has the given name
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }
}

/// Last segment of a dotted path
pub(crate) fn short_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::short_name;

    #[test]
    fn short_name_takes_last_segment() {
        assert_eq!(short_name("com.acme.domain.Order"), "Order");
        assert_eq!(short_name("Order"), "Order");
        assert_eq!(short_name(""), "");
    }
}
