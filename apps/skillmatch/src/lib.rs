//! SkillMatch: résumé skill extraction and role matching.
//!
//! Pipeline: [`extract`] (PDF → text) → [`tagger`] (text → skill tokens) →
//! [`matcher`] (skills × role → match result), composed by [`analyzer`].

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod matcher;
pub mod state;
pub mod tagger;

#[cfg(test)]
mod test_support;

pub use analyzer::{AnalysisReport, Outcome, ResumeAnalyzer};
pub use catalog::{RoleCatalog, RoleProfile, RoleResources};
pub use errors::AppError;
pub use matcher::{MatchResult, Matcher};
pub use tagger::SkillExtractor;
