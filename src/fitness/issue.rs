use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of DDD-convention violation.
///
/// The weight is both the criterion weight of the check that can raise the
/// issue and the severity used to order issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    NamingConvention,
    MissingEquality,
    Encapsulation,
    Mutability,
    MissingCreationMethod,
    StatefulService,
    MissingIdentity,
    LayerViolation,
    AggregateBoundary,
}

impl IssueType {
    pub fn weight(&self) -> u32 {
        match self {
            IssueType::NamingConvention | IssueType::MissingEquality => 1,
            IssueType::Encapsulation
            | IssueType::Mutability
            | IssueType::MissingCreationMethod
            | IssueType::StatefulService => 2,
            IssueType::MissingIdentity
            | IssueType::LayerViolation
            | IssueType::AggregateBoundary => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::NamingConvention => "Naming convention",
            IssueType::MissingEquality => "Missing equality",
            IssueType::Encapsulation => "Encapsulation",
            IssueType::Mutability => "Mutability",
            IssueType::MissingCreationMethod => "Missing creation method",
            IssueType::StatefulService => "Stateful service",
            IssueType::MissingIdentity => "Missing identity",
            IssueType::LayerViolation => "Layer violation",
            IssueType::AggregateBoundary => "Aggregate boundary",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed fitness criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
}

impl Issue {
    pub fn new(issue_type: IssueType, description: impl Into<String>) -> Self {
        Self {
            issue_type,
            description: description.into(),
        }
    }

    pub fn weight(&self) -> u32 {
        self.issue_type.weight()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.issue_type, self.description)
    }
}
