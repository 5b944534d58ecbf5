//! JSON snapshot of a structural model.
//!
//! Ingestion tools export the artifact graph in this format so it can be
//! analyzed without access to the original sources.

use super::artifact::short_name;
use super::structural::StructuralModel;
use crate::core::{ArtifactKind, DddType, Error, Field, Method, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSnapshot {
    /// Fully-qualified prefix of the analyzed codebase
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_modules: Option<Vec<String>>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSnapshot {
    pub kind: ArtifactKind,
    pub path: String,
    /// Short name; defaults to the last path segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd_type: Option<DddType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ModelSnapshot {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Build the in-memory model.
    ///
    /// Artifacts are added in array order, so a parent module must precede its
    /// children. Inheritance links are resolved after every artifact exists;
    /// targets outside the snapshot stay opaque.
    pub fn into_model(self) -> Result<StructuralModel> {
        let mut model = StructuralModel::new(self.path);
        if let Some(names) = self.domain_modules {
            model.set_domain_modules(names);
        }

        let mut ids = Vec::with_capacity(self.artifacts.len());
        for snapshot in &self.artifacts {
            let parent = match &snapshot.parent {
                Some(parent) => Some(model.lookup(parent).ok_or_else(|| Error::UnknownParent {
                    path: snapshot.path.clone(),
                    parent: parent.clone(),
                })?),
                None => None,
            };
            let name = snapshot
                .name
                .clone()
                .unwrap_or_else(|| short_name(&snapshot.path).to_string());
            if !snapshot.kind.has_members()
                && !(snapshot.fields.is_empty() && snapshot.methods.is_empty())
            {
                return Err(Error::malformed(&snapshot.path, "module declares members"));
            }
            let id = model.add_artifact(snapshot.kind, parent, &snapshot.path, &name)?;
            for field in &snapshot.fields {
                model.add_field(id, field.clone())?;
            }
            for method in &snapshot.methods {
                model.add_method(id, method.clone())?;
            }
            for dependency in &snapshot.dependencies {
                model.add_dependency(id, dependency.clone());
            }
            if let Some(ddd_type) = snapshot.ddd_type {
                model.set_ddd_type(id, ddd_type);
            }
            ids.push(id);
        }

        for (snapshot, id) in self.artifacts.iter().zip(ids) {
            if let Some(superclass) = &snapshot.extends {
                match model.lookup(superclass) {
                    Some(target) => model.set_extends(id, target),
                    None => tracing::debug!(
                        artifact = %snapshot.path,
                        superclass = %superclass,
                        "superclass outside the model"
                    ),
                }
            }
            for interface in &snapshot.implements {
                match model.lookup(interface) {
                    Some(target) => model.add_implements(id, target),
                    None => tracing::debug!(
                        artifact = %snapshot.path,
                        interface = %interface,
                        "interface outside the model"
                    ),
                }
            }
        }

        Ok(model)
    }
}

/// Read a snapshot file and build the model in one step
pub fn load_model(path: &Path) -> Result<StructuralModel> {
    ModelSnapshot::load(path)?.into_model()
}
