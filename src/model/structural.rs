//! The artifact graph consumed by classification and metrics.
//!
//! The model is owned by the caller for one analysis run. Classification only
//! changes artifact roles and fitness caches; the shape of the graph is fixed
//! once ingestion has finished.

use super::artifact::{short_name, Artifact, ArtifactId};
use crate::core::{ArtifactKind, DddType, Error, Field, Method, Result};
use crate::fitness::Fitness;
use std::collections::{BTreeSet, HashMap};

/// Conventional name of the module whose children are domain modules
pub const DEFAULT_DOMAIN_ROOT: &str = "domain";

#[derive(Debug, Clone)]
pub struct StructuralModel {
    path: String,
    artifacts: Vec<Artifact>,
    index: HashMap<String, ArtifactId>,
    domain_modules: Option<BTreeSet<String>>,
    domain_root: String,
}

impl StructuralModel {
    /// Create an empty model rooted at the fully-qualified prefix `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            artifacts: Vec::new(),
            index: HashMap::new(),
            domain_modules: None,
            domain_root: DEFAULT_DOMAIN_ROOT.to_string(),
        }
    }

    /// Fully-qualified prefix of the analyzed codebase
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Use an explicit set of domain module names instead of deriving it
    pub fn set_domain_modules<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_modules = Some(names.into_iter().map(Into::into).collect());
        self.clear_fitness();
    }

    /// Name of the module whose direct children are domain modules
    pub fn set_domain_root(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.domain_root != name {
            self.domain_root = name;
            self.clear_fitness();
        }
    }

    /// Names of the modules flagged as domain modules.
    ///
    /// Returns the explicit set when one was provided, otherwise the names of
    /// all modules nested directly under a module named after the domain root.
    pub fn domain_modules(&self) -> BTreeSet<String> {
        if let Some(names) = &self.domain_modules {
            return names.clone();
        }
        self.modules()
            .filter(|module| {
                module
                    .parent
                    .map(|parent| self.get(parent).name == self.domain_root)
                    .unwrap_or(false)
            })
            .map(|module| module.name.clone())
            .collect()
    }

    pub fn add_module(&mut self, parent: Option<ArtifactId>, path: &str) -> Result<ArtifactId> {
        self.add_artifact(ArtifactKind::Module, parent, path, short_name(path))
    }

    pub fn add_class(&mut self, parent: Option<ArtifactId>, path: &str) -> Result<ArtifactId> {
        self.add_artifact(ArtifactKind::Class, parent, path, short_name(path))
    }

    pub fn add_interface(&mut self, parent: Option<ArtifactId>, path: &str) -> Result<ArtifactId> {
        self.add_artifact(ArtifactKind::Interface, parent, path, short_name(path))
    }

    /// Add an artifact of any kind. The parent, when given, must be a module.
    pub fn add_artifact(
        &mut self,
        kind: ArtifactKind,
        parent: Option<ArtifactId>,
        path: &str,
        name: &str,
    ) -> Result<ArtifactId> {
        if path.is_empty() {
            return Err(Error::malformed(name, "artifact with empty path"));
        }
        if name.is_empty() {
            return Err(Error::malformed(path, "artifact with empty name"));
        }
        if self.index.contains_key(path) {
            return Err(Error::DuplicateArtifact(path.to_string()));
        }
        if let Some(parent) = parent {
            let container = self.get(parent);
            if !container.is_module() {
                return Err(Error::UnknownParent {
                    path: path.to_string(),
                    parent: container.path.clone(),
                });
            }
        }

        let id = ArtifactId(self.artifacts.len());
        let mut artifact = Artifact::new(id, kind, path.to_string(), name.to_string());
        artifact.parent = parent;
        self.artifacts.push(artifact);
        self.index.insert(path.to_string(), id);
        if let Some(parent) = parent {
            self.artifacts[parent.0].contains.push(id);
        }
        self.clear_fitness();
        Ok(id)
    }

    pub fn add_field(&mut self, id: ArtifactId, field: Field) -> Result<()> {
        let artifact = &mut self.artifacts[id.0];
        check_field(&artifact.path, &field)?;
        artifact.fields.push(field);
        self.clear_fitness();
        Ok(())
    }

    pub fn add_method(&mut self, id: ArtifactId, method: Method) -> Result<()> {
        let artifact = &mut self.artifacts[id.0];
        check_method(&artifact.path, &method)?;
        artifact.methods.push(method);
        self.clear_fitness();
        Ok(())
    }

    pub fn set_extends(&mut self, id: ArtifactId, superclass: ArtifactId) {
        self.artifacts[id.0].extends = Some(superclass);
        self.clear_fitness();
    }

    pub fn add_implements(&mut self, id: ArtifactId, interface: ArtifactId) {
        let artifact = &mut self.artifacts[id.0];
        if !artifact.implements.contains(&interface) {
            artifact.implements.push(interface);
            self.clear_fitness();
        }
    }

    pub fn add_dependency(&mut self, id: ArtifactId, type_name: impl Into<String>) {
        let artifact = &mut self.artifacts[id.0];
        if artifact.dependencies.insert(type_name.into()) {
            self.clear_fitness();
        }
    }

    /// Assign a role
    pub fn set_ddd_type(&mut self, id: ArtifactId, ddd_type: DddType) {
        let artifact = &mut self.artifacts[id.0];
        if artifact.ddd_type != Some(ddd_type) {
            artifact.ddd_type = Some(ddd_type);
            self.clear_fitness();
        }
    }

    pub(crate) fn set_fitness(&mut self, id: ArtifactId, fitness: Fitness) {
        self.artifacts[id.0].fitness = Some(fitness);
    }

    /// Drop every cached fitness ledger.
    ///
    /// Criteria of one artifact read the roles and members of others, so any
    /// change to the graph invalidates all ledgers.
    pub fn clear_fitness(&mut self) {
        for artifact in &mut self.artifacts {
            artifact.fitness = None;
        }
    }

    /// Look up an artifact by id. Ids are only ever handed out by this model.
    pub fn get(&self, id: ArtifactId) -> &Artifact {
        &self.artifacts[id.0]
    }

    pub fn lookup(&self, path: &str) -> Option<ArtifactId> {
        self.index.get(path).copied()
    }

    pub fn by_path(&self, path: &str) -> Option<&Artifact> {
        self.lookup(path).map(|id| self.get(id))
    }

    /// All artifacts in discovery order
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub(crate) fn artifact_slice(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn modules(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.is_module())
    }

    pub fn class_likes(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.kind.is_class_like())
    }

    /// Class- and interface-like artifacts directly contained in `module`
    pub fn files_of(&self, module: ArtifactId) -> impl Iterator<Item = &Artifact> {
        self.get(module)
            .contains
            .iter()
            .map(|id| self.get(*id))
            .filter(|a| a.kind.is_file())
    }

    /// Whether a type name lies inside the analyzed codebase
    pub fn resolves_within(&self, type_name: &str) -> bool {
        if self.path.is_empty() {
            return true;
        }
        type_name == self.path
            || type_name
                .strip_prefix(self.path.as_str())
                .map(|rest| rest.starts_with('.'))
                .unwrap_or(false)
    }

    /// Artifacts referenced by the field types or dependency strings of `id`.
    ///
    /// Unresolved names are skipped; each referenced artifact appears once.
    pub fn references(&self, id: ArtifactId) -> Vec<ArtifactId> {
        let artifact = self.get(id);
        let mut seen = BTreeSet::new();
        artifact
            .fields
            .iter()
            .map(|f| f.type_name.as_str())
            .chain(artifact.dependencies.iter().map(String::as_str))
            .filter_map(|name| self.lookup(name))
            .filter(|target| *target != id && seen.insert(*target))
            .collect()
    }

    /// Whether `id` references any artifact currently typed `ddd_type`
    pub fn references_type(&self, id: ArtifactId, ddd_type: DddType) -> bool {
        self.references(id)
            .into_iter()
            .any(|target| self.get(target).has_type(ddd_type))
    }

    /// Re-check every member of every artifact for mandatory attributes
    pub fn validate(&self) -> Result<()> {
        for artifact in &self.artifacts {
            for field in &artifact.fields {
                check_field(&artifact.path, field)?;
            }
            for method in &artifact.methods {
                check_method(&artifact.path, method)?;
            }
        }
        Ok(())
    }
}

fn check_field(path: &str, field: &Field) -> Result<()> {
    if field.name.is_empty() {
        return Err(Error::malformed(path, "field with empty name"));
    }
    if field.type_name.is_empty() {
        return Err(Error::malformed(
            path,
            format!("field {} has an empty type", field.name),
        ));
    }
    Ok(())
}

fn check_method(path: &str, method: &Method) -> Result<()> {
    if method.name.is_empty() {
        return Err(Error::malformed(path, "method with empty name"));
    }
    if method.signature.is_empty() {
        return Err(Error::malformed(
            path,
            format!("method {} has an empty signature", method.name),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Visibility;

    fn sample() -> (StructuralModel, ArtifactId, ArtifactId) {
        let mut model = StructuralModel::new("com.acme");
        let root = model.add_module(None, "com.acme").unwrap();
        let domain = model.add_module(Some(root), "com.acme.domain").unwrap();
        (model, root, domain)
    }

    #[test]
    fn add_artifact_links_parent_and_child() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();

        assert_eq!(model.get(order).name(), "Order");
        assert_eq!(model.get(order).parent(), Some(domain));
        assert_eq!(model.get(domain).contains(), &[order]);
        assert_eq!(model.lookup("com.acme.domain.Order"), Some(order));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let (mut model, _, domain) = sample();
        model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let err = model
            .add_class(Some(domain), "com.acme.domain.Order")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateArtifact(path) if path == "com.acme.domain.Order"));
    }

    #[test]
    fn classes_cannot_contain_artifacts() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let err = model
            .add_class(Some(order), "com.acme.domain.Order.Line")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParent { .. }));
    }

    #[test]
    fn empty_field_type_is_malformed() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let err = model
            .add_field(order, Field::new("total", Visibility::Private, ""))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed artifact com.acme.domain.Order: field total has an empty type"
        );
    }

    #[test]
    fn empty_method_signature_is_malformed() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let err = model
            .add_method(order, Method::public("total", ""))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { path, .. } if path == "com.acme.domain.Order"));
    }

    #[test]
    fn domain_modules_derive_from_domain_root() {
        let (mut model, root, domain) = sample();
        model.add_module(Some(domain), "com.acme.domain.customer").unwrap();
        model.add_module(Some(domain), "com.acme.domain.billing").unwrap();
        model.add_module(Some(root), "com.acme.web").unwrap();

        let names: Vec<String> = model.domain_modules().into_iter().collect();
        assert_eq!(names, vec!["billing".to_string(), "customer".to_string()]);
    }

    #[test]
    fn explicit_domain_modules_win() {
        let (mut model, _, domain) = sample();
        model.add_module(Some(domain), "com.acme.domain.customer").unwrap();
        model.set_domain_modules(["orders"]);
        assert!(model.domain_modules().contains("orders"));
        assert!(!model.domain_modules().contains("customer"));
    }

    #[test]
    fn resolves_within_requires_segment_boundary() {
        let (model, _, _) = sample();
        assert!(model.resolves_within("com.acme.domain.Order"));
        assert!(!model.resolves_within("com.acmecorp.Order"));
        assert!(!model.resolves_within("java.lang.String"));
    }

    #[test]
    fn references_resolve_fields_and_dependencies_once() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let line = model.add_class(Some(domain), "com.acme.domain.Line").unwrap();
        model
            .add_field(order, Field::private("line", "com.acme.domain.Line"))
            .unwrap();
        model.add_dependency(order, "com.acme.domain.Line");
        model.add_dependency(order, "java.util.List");

        assert_eq!(model.references(order), vec![line]);
    }

    #[test]
    fn set_ddd_type_clears_cached_fitness() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        model.set_fitness(order, Fitness::default());
        model.set_ddd_type(order, DddType::Entity);
        assert!(model.get(order).fitness().is_none());
    }

    #[test]
    fn changing_one_artifact_clears_every_cached_ledger() {
        let (mut model, root, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        let repo = model
            .add_interface(Some(domain), "com.acme.domain.OrderRepository")
            .unwrap();

        model.set_fitness(order, Fitness::default());
        model
            .add_method(repo, Method::public("find", "Order find(long)"))
            .unwrap();
        assert!(model.get(order).fitness().is_none());

        model.set_fitness(root, Fitness::default());
        model.set_domain_root("domain");
        assert!(model.get(root).fitness().is_some(), "unchanged root keeps caches");
        model.set_domain_root("core");
        assert!(model.get(root).fitness().is_none());
    }

    #[test]
    fn validate_catches_members_corrupted_after_insertion() {
        let (mut model, _, domain) = sample();
        let order = model.add_class(Some(domain), "com.acme.domain.Order").unwrap();
        model.add_field(order, Field::private("id", "long")).unwrap();
        assert!(model.validate().is_ok());

        model.artifacts[order.0].fields[0].type_name.clear();
        let err = model.validate().unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { path, .. } if path == "com.acme.domain.Order"));
    }
}
