use super::issue::{Issue, IssueType};
use super::rating::Rating;
use crate::core::round2;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Weighted pass/fail ledger of DDD-convention criteria.
///
/// `criteria_fulfilled <= criteria_total` holds at all times since both are
/// only ever increased together or the total alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fitness {
    criteria_total: u32,
    criteria_fulfilled: u32,
    issues: Vec<Issue>,
}

impl Fitness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one check weighted by its issue type
    pub fn record(&mut self, passed: bool, issue_type: IssueType, description: impl Into<String>) {
        let weight = issue_type.weight();
        self.criteria_total += weight;
        if passed {
            self.criteria_fulfilled += weight;
        } else {
            self.issues.push(Issue::new(issue_type, description));
        }
    }

    /// Add another ledger's totals and append its issues after ours
    pub fn merge(&mut self, other: &Fitness) {
        self.criteria_total += other.criteria_total;
        self.criteria_fulfilled += other.criteria_fulfilled;
        self.issues.extend(other.issues.iter().cloned());
    }

    /// By-value merge, convenient as a reduction step
    pub fn merged(mut self, other: Fitness) -> Fitness {
        self.criteria_total += other.criteria_total;
        self.criteria_fulfilled += other.criteria_fulfilled;
        self.issues.extend(other.issues);
        self
    }

    pub fn criteria_total(&self) -> u32 {
        self.criteria_total
    }

    pub fn criteria_fulfilled(&self) -> u32 {
        self.criteria_fulfilled
    }

    /// Issues in recording order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Share of fulfilled criteria in percent, rounded to two decimals.
    /// A ledger without criteria is perfectly fit.
    pub fn percentage(&self) -> f64 {
        if self.criteria_total == 0 {
            return 100.0;
        }
        round2(f64::from(self.criteria_fulfilled) * 100.0 / f64::from(self.criteria_total))
    }

    pub fn rating(&self) -> Rating {
        Rating::from_percentage(self.percentage())
    }

    /// Issues ordered by descending weight; equal weights keep recording order
    pub fn issues_by_severity(&self) -> Vec<&Issue> {
        let mut issues: Vec<&Issue> = self.issues.iter().collect();
        issues.sort_by_key(|issue| Reverse(issue.weight()));
        issues
    }

    /// Whether the artifact owning this ledger should be reported as a hotspot
    pub fn is_hotspot(&self) -> bool {
        self.has_issues() || self.percentage() < 100.0
    }

    pub fn summary(&self) -> FitnessSummary {
        FitnessSummary {
            score: self.rating(),
            criteria: Criteria {
                total: self.criteria_total,
                fulfilled: self.criteria_fulfilled,
            },
            fitness: self.percentage(),
            issue_count: self.issues.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub total: u32,
    pub fulfilled: u32,
}

/// Externally exposed view of a [`Fitness`] ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessSummary {
    pub score: Rating,
    pub criteria: Criteria,
    pub fitness: f64,
    pub issue_count: usize,
}
