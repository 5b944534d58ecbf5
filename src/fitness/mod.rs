//! Weighted DDD-convention fitness: ledger, issues, grading and the
//! role-specific checks that fill the ledger.

pub mod checks;
mod issue;
mod ledger;
mod rating;

pub use checks::{rollup_fitness, score_all, score_fitness, FitnessChecker};
pub use issue::{Issue, IssueType};
pub use ledger::{Criteria, Fitness, FitnessSummary};
pub use rating::Rating;
