//! Matcher: set comparison between an extracted skill set and a role's
//! required skills.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RoleCatalog;
use crate::errors::AppError;

/// Matched/missing partition of a role's required skills plus the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// extracted ∩ required
    pub matched: BTreeSet<String>,
    /// required − extracted
    pub missing: BTreeSet<String>,
    pub percentage: f64, // 0.0 – 100.0
}

impl MatchResult {
    /// Partitions `required` by membership in `extracted`.
    pub fn compute(extracted: &BTreeSet<String>, required: &BTreeSet<String>) -> Self {
        let matched: BTreeSet<String> = required.intersection(extracted).cloned().collect();
        let missing: BTreeSet<String> = required.difference(extracted).cloned().collect();
        let percentage = match_percentage(matched.len(), missing.len());
        Self {
            matched,
            missing,
            percentage,
        }
    }

    /// True when the role required nothing, so there was nothing to detect.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.missing.is_empty()
    }
}

/// 100 × matched / (matched + missing); zero when both are zero.
pub fn match_percentage(matched: usize, missing: usize) -> f64 {
    let total = matched + missing;
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64) * 100.0
}

/// Compares skill sets against the roles of one catalog.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<RoleCatalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Fails with `RoleNotFound` when `role` is not in the catalog.
    pub fn match_skills(
        &self,
        extracted: &BTreeSet<String>,
        role: &str,
    ) -> Result<MatchResult, AppError> {
        let profile = self.catalog.require(role)?;
        let result = MatchResult::compute(extracted, &profile.required_skills);
        debug!(
            role,
            matched = result.matched.len(),
            missing = result.missing.len(),
            percentage = result.percentage,
            "Matched skills against role"
        );
        Ok(result)
    }
}
