//! Analyzer: the résumé pipeline: extract text → tag skills → match role.
//!
//! Every call is synchronous and request-scoped; the analyzer itself only
//! holds shared, immutable configuration.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract;
use crate::matcher::{MatchResult, Matcher};
use crate::tagger::SkillExtractor;

/// How the caller should present a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A score was computed against at least one detected skill.
    Scored,
    /// Nothing usable was found (e.g. a scanned résumé). Not a failure:
    /// render a warning, not an error.
    NoSkillsDetected,
}

/// Full analysis report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub role: String,
    pub outcome: Outcome,
    pub extractor: String,
    pub extracted_skill_count: usize,
    pub result: MatchResult,
    /// Missing skills worth adding to the résumé.
    pub suggestions: Vec<String>,
}

pub struct ResumeAnalyzer {
    extractor: Arc<dyn SkillExtractor>,
    matcher: Matcher,
}

impl ResumeAnalyzer {
    pub fn new(extractor: Arc<dyn SkillExtractor>, matcher: Matcher) -> Self {
        Self { extractor, matcher }
    }

    /// Tags `text` and scores it against `role`.
    pub fn analyze_text(&self, text: &str, role: &str) -> Result<AnalysisReport, AppError> {
        // Fail fast on unknown roles before doing any tagging work.
        self.matcher.catalog().require(role)?;

        let skills = self.extractor.extract_skills(text);
        let result = self.matcher.match_skills(&skills, role)?;
        Ok(self.build_report(role, &skills, result))
    }

    /// Extracts text from an in-memory PDF and analyzes it. An unparseable
    /// PDF yields `AppError::Extraction` and no partial report.
    pub fn analyze_pdf(&self, bytes: &[u8], role: &str) -> Result<AnalysisReport, AppError> {
        self.matcher.catalog().require(role)?;

        let text = extract::extract_text(bytes)?;
        if text.is_empty() {
            warn!(role, "PDF contains no extractable text");
        }
        self.analyze_text(&text, role)
    }

    pub fn analyze_path(&self, path: &Path, role: &str) -> Result<AnalysisReport, AppError> {
        self.matcher.catalog().require(role)?;

        let text = extract::extract_text_from_path(path)?;
        if text.is_empty() {
            warn!(role, path = %path.display(), "PDF contains no extractable text");
        }
        self.analyze_text(&text, role)
    }

    fn build_report(
        &self,
        role: &str,
        skills: &BTreeSet<String>,
        result: MatchResult,
    ) -> AnalysisReport {
        let outcome = if skills.is_empty() || result.is_empty() {
            Outcome::NoSkillsDetected
        } else {
            Outcome::Scored
        };
        let suggestions = result.missing.iter().cloned().collect();

        info!(
            role,
            extractor = self.extractor.name(),
            extracted = skills.len(),
            percentage = result.percentage,
            ?outcome,
            "Resume analyzed"
        );

        AnalysisReport {
            role: role.to_string(),
            outcome,
            extractor: self.extractor.name().to_string(),
            extracted_skill_count: skills.len(),
            result,
            suggestions,
        }
    }
}
