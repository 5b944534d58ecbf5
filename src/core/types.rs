use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural role of an artifact in Domain-Driven Design terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DddType {
    Module,
    Entity,
    ValueObject,
    AggregateRoot,
    Factory,
    Repository,
    Service,
    ApplicationService,
    Controller,
    Infrastructure,
    DomainEvent,
}

impl DddType {
    /// Every role, in declaration order
    pub const ALL: [DddType; 11] = [
        DddType::Module,
        DddType::Entity,
        DddType::ValueObject,
        DddType::AggregateRoot,
        DddType::Factory,
        DddType::Repository,
        DddType::Service,
        DddType::ApplicationService,
        DddType::Controller,
        DddType::Infrastructure,
        DddType::DomainEvent,
    ];

    /// Roles tallied by the DDD metric counts
    pub const COUNTED: [DddType; 9] = [
        DddType::Module,
        DddType::Entity,
        DddType::ValueObject,
        DddType::AggregateRoot,
        DddType::Factory,
        DddType::Repository,
        DddType::Service,
        DddType::ApplicationService,
        DddType::Infrastructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DddType::Module => "MODULE",
            DddType::Entity => "ENTITY",
            DddType::ValueObject => "VALUE_OBJECT",
            DddType::AggregateRoot => "AGGREGATE_ROOT",
            DddType::Factory => "FACTORY",
            DddType::Repository => "REPOSITORY",
            DddType::Service => "SERVICE",
            DddType::ApplicationService => "APPLICATION_SERVICE",
            DddType::Controller => "CONTROLLER",
            DddType::Infrastructure => "INFRASTRUCTURE",
            DddType::DomainEvent => "DOMAIN_EVENT",
        }
    }

    /// Roles that hold domain state and may be refined into domain events
    pub fn is_domain_object(&self) -> bool {
        matches!(
            self,
            DddType::Entity | DddType::AggregateRoot | DddType::ValueObject
        )
    }
}

impl fmt::Display for DddType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural kind of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Module,
    Class,
    Interface,
    Enum,
    Annotation,
    Other,
}

impl ArtifactKind {
    pub fn is_class_like(&self) -> bool {
        matches!(self, ArtifactKind::Class)
    }

    pub fn is_interface_like(&self) -> bool {
        matches!(self, ArtifactKind::Interface)
    }

    /// Class- and interface-like artifacts count as files of their module
    pub fn is_file(&self) -> bool {
        self.is_class_like() || self.is_interface_like()
    }

    /// Whether the artifact can declare fields and methods
    pub fn has_members(&self) -> bool {
        !matches!(self, ArtifactKind::Module)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// Fully-qualified type name; may point outside the analyzed codebase
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, visibility: Visibility, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility,
            type_name: type_name.into(),
        }
    }

    /// A private field, the common case in fixtures
    pub fn private(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private, type_name)
    }

    /// Constants are named entirely in upper case; names without letters
    /// count as upper case
    pub fn is_constant(&self) -> bool {
        self.name == self.name.to_uppercase()
    }
}

/// A declared method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// Return type, name and parameter types, e.g. `java.lang.String getName()`
    pub signature: String,
}

impl Method {
    pub fn new(name: impl Into<String>, visibility: Visibility, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility,
            signature: signature.into(),
        }
    }

    pub fn public(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, signature)
    }

    /// Leading token of the signature, i.e. the return type
    pub fn return_type(&self) -> &str {
        self.signature.split_whitespace().next().unwrap_or("")
    }

    pub fn is_accessor(&self) -> bool {
        self.name.starts_with("get") || self.name.starts_with("set")
    }

    pub fn is_setter(&self) -> bool {
        self.name.starts_with("set")
    }
}
