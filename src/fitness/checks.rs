//! Role-specific fitness criteria.
//!
//! Every role has a fixed list of checks; each check records one weighted
//! criterion on the artifact's ledger. Infrastructure and unclassified
//! artifacts have no criteria and are therefore vacuously fit.

use super::issue::IssueType;
use super::ledger::Fitness;
use crate::classification::rules::is_identity_field;
use crate::core::{DddType, Visibility};
use crate::model::{Artifact, ArtifactId, StructuralModel};
use rayon::prelude::*;
use std::collections::BTreeSet;

const CREATION_PREFIXES: [&str; 4] = ["create", "build", "new", "of"];

/// Evaluates fitness criteria against a fixed view of the model
pub struct FitnessChecker<'a> {
    model: &'a StructuralModel,
    domain_modules: BTreeSet<String>,
    repositories: Vec<ArtifactId>,
    aggregate_roots: Vec<ArtifactId>,
}

impl<'a> FitnessChecker<'a> {
    pub fn new(model: &'a StructuralModel) -> Self {
        let of_type = |ddd_type| {
            model
                .artifacts()
                .filter(|a| a.has_type(ddd_type))
                .map(Artifact::id)
                .collect::<Vec<_>>()
        };
        Self {
            model,
            domain_modules: model.domain_modules(),
            repositories: of_type(DddType::Repository),
            aggregate_roots: of_type(DddType::AggregateRoot),
        }
    }

    /// Evaluate all criteria of the artifact's current role
    pub fn evaluate(&self, id: ArtifactId) -> Fitness {
        let artifact = self.model.get(id);
        let mut fitness = Fitness::new();
        let Some(ddd_type) = artifact.ddd_type() else {
            return fitness;
        };

        match ddd_type {
            DddType::Entity => self.check_entity(artifact, &mut fitness),
            DddType::AggregateRoot => {
                self.check_entity(artifact, &mut fitness);
                self.check_aggregate_root(artifact, &mut fitness);
            }
            DddType::ValueObject => self.check_value_object(artifact, &mut fitness),
            DddType::DomainEvent => self.check_domain_event(artifact, &mut fitness),
            DddType::Repository => self.check_repository(artifact, &mut fitness),
            DddType::Factory => self.check_factory(artifact, &mut fitness),
            DddType::Service => self.check_service(artifact, &mut fitness),
            DddType::ApplicationService => self.check_application_service(artifact, &mut fitness),
            DddType::Controller => self.check_controller(artifact, &mut fitness),
            DddType::Module => self.check_module(artifact, &mut fitness),
            DddType::Infrastructure => {}
        }
        fitness
    }

    fn check_entity(&self, artifact: &Artifact, fitness: &mut Fitness) {
        fitness.record(
            artifact.fields().iter().any(is_identity_field),
            IssueType::MissingIdentity,
            format!("{} has no identity field", artifact.name()),
        );
        check_encapsulation(artifact, fitness);
        self.check_domain_layer(artifact, fitness);
    }

    fn check_aggregate_root(&self, artifact: &Artifact, fitness: &mut Fitness) {
        let managed = self
            .repositories
            .iter()
            .any(|repository| self.mentions(*repository, artifact));
        fitness.record(
            managed,
            IssueType::AggregateBoundary,
            format!("no repository manages aggregate root {}", artifact.name()),
        );
    }

    fn check_value_object(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_immutability(artifact, fitness);
        check_encapsulation(artifact, fitness);
        fitness.record(
            artifact.declares_method("equals") && artifact.declares_method("hashCode"),
            IssueType::MissingEquality,
            format!("value object {} does not define equals and hashCode", artifact.name()),
        );
        self.check_domain_layer(artifact, fitness);
    }

    fn check_domain_event(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_immutability(artifact, fitness);
        let name = artifact.name();
        fitness.record(
            name.ends_with("Event") || name.ends_with("ed"),
            IssueType::NamingConvention,
            format!("domain event {name} is neither named *Event nor in past tense"),
        );
        self.check_domain_layer(artifact, fitness);
    }

    fn check_repository(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_suffix(artifact, "Repository", fitness);
        let manages_root = self
            .aggregate_roots
            .iter()
            .any(|root| self.mentions(artifact.id(), self.model.get(*root)));
        fitness.record(
            manages_root,
            IssueType::AggregateBoundary,
            format!("repository {} does not manage an aggregate root", artifact.name()),
        );
    }

    fn check_factory(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_suffix(artifact, "Factory", fitness);
        let creates = artifact
            .methods()
            .iter()
            .any(|m| CREATION_PREFIXES.iter().any(|prefix| m.name.starts_with(prefix)));
        fitness.record(
            creates,
            IssueType::MissingCreationMethod,
            format!("factory {} declares no creation method", artifact.name()),
        );
    }

    fn check_service(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_suffix(artifact, "Service", fitness);
        let state: Vec<&str> = artifact
            .fields()
            .iter()
            .filter(|field| !self.is_collaborator(&field.type_name))
            .map(|field| field.name.as_str())
            .collect();
        fitness.record(
            state.is_empty(),
            IssueType::StatefulService,
            format!("service {} holds state: {}", artifact.name(), state.join(", ")),
        );
        self.check_domain_layer(artifact, fitness);
    }

    fn check_application_service(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_suffix(artifact, "Service", fitness);
        self.check_not_referencing(
            artifact,
            &[DddType::Controller],
            "application service",
            fitness,
        );
    }

    fn check_controller(&self, artifact: &Artifact, fitness: &mut Fitness) {
        check_suffix(artifact, "Controller", fitness);
        self.check_not_referencing(artifact, &[DddType::Repository], "controller", fitness);
    }

    fn check_module(&self, artifact: &Artifact, fitness: &mut Fitness) {
        let name = artifact.name();
        fitness.record(
            !name.chars().any(char::is_uppercase),
            IssueType::NamingConvention,
            format!("module name {name} is not lower case"),
        );
        if self.domain_modules.contains(name) {
            let has_root = artifact
                .contains()
                .iter()
                .any(|child| self.model.get(*child).has_type(DddType::AggregateRoot));
            fitness.record(
                has_root,
                IssueType::AggregateBoundary,
                format!("domain module {name} has no aggregate root"),
            );
        }
    }

    /// Domain objects must not reach up into the application or UI layer
    fn check_domain_layer(&self, artifact: &Artifact, fitness: &mut Fitness) {
        self.check_not_referencing(
            artifact,
            &[DddType::Controller, DddType::ApplicationService],
            "domain artifact",
            fitness,
        );
    }

    fn check_not_referencing(
        &self,
        artifact: &Artifact,
        forbidden: &[DddType],
        role: &str,
        fitness: &mut Fitness,
    ) {
        let offending: Vec<&str> = self
            .model
            .references(artifact.id())
            .into_iter()
            .map(|target| self.model.get(target))
            .filter(|target| target.ddd_type().is_some_and(|t| forbidden.contains(&t)))
            .map(Artifact::name)
            .collect();
        fitness.record(
            offending.is_empty(),
            IssueType::LayerViolation,
            format!("{role} {} depends on {}", artifact.name(), offending.join(", ")),
        );
    }

    fn is_collaborator(&self, type_name: &str) -> bool {
        if type_name.contains("Repository") {
            return true;
        }
        self.model
            .by_path(type_name)
            .and_then(Artifact::ddd_type)
            .is_some_and(|t| {
                matches!(
                    t,
                    DddType::Repository
                        | DddType::Factory
                        | DddType::Service
                        | DddType::Infrastructure
                )
            })
    }

    /// Whether `source` refers to `target` through a member type, a dependency
    /// or a method signature
    fn mentions(&self, source: ArtifactId, target: &Artifact) -> bool {
        if self.model.references(source).contains(&target.id()) {
            return true;
        }
        self.model.get(source).methods().iter().any(|method| {
            signature_tokens(&method.signature)
                .any(|token| token == target.path() || token == target.name())
        })
    }
}

fn check_encapsulation(artifact: &Artifact, fitness: &mut Fitness) {
    let public: Vec<&str> = artifact
        .fields()
        .iter()
        .filter(|f| f.visibility == Visibility::Public && !f.is_constant())
        .map(|f| f.name.as_str())
        .collect();
    fitness.record(
        public.is_empty(),
        IssueType::Encapsulation,
        format!("{} exposes public fields: {}", artifact.name(), public.join(", ")),
    );
}

fn check_immutability(artifact: &Artifact, fitness: &mut Fitness) {
    let setters: Vec<&str> = artifact
        .methods()
        .iter()
        .filter(|m| m.is_setter())
        .map(|m| m.name.as_str())
        .collect();
    fitness.record(
        setters.is_empty(),
        IssueType::Mutability,
        format!("{} is mutable through {}", artifact.name(), setters.join(", ")),
    );
}

fn check_suffix(artifact: &Artifact, suffix: &str, fitness: &mut Fitness) {
    fitness.record(
        artifact.name().ends_with(suffix),
        IssueType::NamingConvention,
        format!("{} should be named *{suffix}", artifact.name()),
    );
}

fn signature_tokens(signature: &str) -> impl Iterator<Item = &str> {
    signature
        .split(|c: char| !(c.is_alphanumeric() || c == '.' || c == '_' || c == '$'))
        .filter(|token| !token.is_empty())
}

/// Score one artifact, caching the ledger on it
pub fn score_fitness(model: &mut StructuralModel, id: ArtifactId) -> Fitness {
    if let Some(fitness) = model.get(id).fitness() {
        return fitness.clone();
    }
    let fitness = FitnessChecker::new(model).evaluate(id);
    model.set_fitness(id, fitness.clone());
    fitness
}

/// Score every artifact that has no cached ledger yet
pub fn score_all(model: &mut StructuralModel) {
    let scored: Vec<(ArtifactId, Fitness)> = {
        let checker = FitnessChecker::new(model);
        model
            .artifact_slice()
            .par_iter()
            .filter(|artifact| artifact.fitness().is_none())
            .map(|artifact| (artifact.id(), checker.evaluate(artifact.id())))
            .collect()
    };
    tracing::debug!(scored = scored.len(), "scored artifact fitness");
    for (id, fitness) in scored {
        model.set_fitness(id, fitness);
    }
}

/// Fitness of an artifact merged with everything it transitively contains,
/// in containment order
pub fn rollup_fitness(model: &StructuralModel, id: ArtifactId) -> Fitness {
    let checker = FitnessChecker::new(model);
    let mut total = Fitness::new();
    rollup_into(model, &checker, id, &mut total);
    total
}

fn rollup_into(
    model: &StructuralModel,
    checker: &FitnessChecker<'_>,
    id: ArtifactId,
    total: &mut Fitness,
) {
    let artifact = model.get(id);
    match artifact.fitness() {
        Some(fitness) => total.merge(fitness),
        None => total.merge(&checker.evaluate(id)),
    }
    for child in artifact.contains() {
        rollup_into(model, checker, *child, total);
    }
}
