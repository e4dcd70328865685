//! Skill Tagger: pluggable, trait-based strategies that turn résumé text into
//! a set of lowercase skill tokens.
//!
//! Default: `NounSkillExtractor` (nouns and proper nouns longer than two characters).
//! Alternates: `PhraseSkillExtractor` (catalog vocabulary, multi-word aware) and
//! `CombinedSkillExtractor` (union of strategies).
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup via config.

pub mod pos;
pub mod tokenizer;

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

pub use pos::PosTag;
pub use tokenizer::Token;

/// Tokens must be at least this many characters to count as a skill.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 3;

/// The skill extraction trait. Implement this to swap strategies without
/// touching the matcher or the analyzer.
pub trait SkillExtractor: Send + Sync {
    /// Short label reported alongside results.
    fn name(&self) -> &'static str;

    /// Returns the deduplicated, lowercase skill tokens found in `text`.
    /// Must be a pure function of `text`.
    fn extract_skills(&self, text: &str) -> BTreeSet<String>;
}

// ────────────────────────────────────────────────────────────────────────────
// NounSkillExtractor: default strategy
// ────────────────────────────────────────────────────────────────────────────

/// Keeps every token tagged `Noun` or `ProperNoun` whose length is at least
/// `min_chars`. Single-word only: "machine learning" can never match.
#[derive(Debug, Clone)]
pub struct NounSkillExtractor {
    min_chars: usize,
}

impl Default for NounSkillExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_CHARS)
    }
}

impl NounSkillExtractor {
    pub fn new(min_chars: usize) -> Self {
        Self {
            min_chars: min_chars.max(1),
        }
    }
}

impl SkillExtractor for NounSkillExtractor {
    fn name(&self) -> &'static str {
        "noun"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let tokens = pos::tag(text);
        let skills: BTreeSet<String> = tokens
            .into_iter()
            .filter(|t| t.pos.is_nominal() && t.char_len() >= self.min_chars)
            .map(|t| t.lower)
            .collect();
        debug!(count = skills.len(), "Noun tagger extracted skills");
        skills
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PhraseSkillExtractor: vocabulary matching
// ────────────────────────────────────────────────────────────────────────────

/// Looks for known skills (single or multi-word) as whole-token runs in the
/// text. Built from the catalog vocabulary at startup.
///
/// Both the skills and the text are normalised to lowercase tokens joined by
/// single spaces, so "Big-Data" and "big data" stay distinct while line breaks
/// and repeated whitespace inside a phrase do not matter.
#[derive(Debug, Clone)]
pub struct PhraseSkillExtractor {
    /// Skill names, indexed by automaton pattern id.
    skills: Vec<String>,
    automaton: AhoCorasick,
}

impl PhraseSkillExtractor {
    pub fn new<I, S>(vocabulary: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills = Vec::new();
        let mut patterns = Vec::new();
        for skill in vocabulary {
            let skill = skill.as_ref().trim().to_lowercase();
            let pattern = normalize(&skill);
            if pattern.is_empty() || skills.contains(&skill) {
                continue;
            }
            skills.push(skill);
            patterns.push(pattern);
        }

        // Standard semantics so overlapping skills ("deep learning",
        // "learning") can all be reported.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| AppError::Config(format!("Failed to build phrase matcher: {e}")))?;

        Ok(Self { skills, automaton })
    }
}

impl SkillExtractor for PhraseSkillExtractor {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        if self.skills.is_empty() {
            return BTreeSet::new();
        }
        let haystack = normalize(text);
        let bytes = haystack.as_bytes();
        let skills: BTreeSet<String> = self
            .automaton
            .find_overlapping_iter(&haystack)
            .filter(|m| {
                let left = m.start() == 0 || bytes[m.start() - 1] == b' ';
                let right = m.end() == bytes.len() || bytes[m.end()] == b' ';
                left && right
            })
            .map(|m| self.skills[m.pattern().as_usize()].clone())
            .collect();
        debug!(count = skills.len(), "Phrase matcher extracted skills");
        skills
    }
}

/// Lowercase tokens of `text`, joined by single spaces.
fn normalize(text: &str) -> String {
    tokenizer::tokenize(text)
        .into_iter()
        .map(|t| t.lower)
        .collect::<Vec<_>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// CombinedSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Union of the skills found by each inner strategy.
pub struct CombinedSkillExtractor {
    strategies: Vec<Arc<dyn SkillExtractor>>,
}

impl CombinedSkillExtractor {
    pub fn new(strategies: Vec<Arc<dyn SkillExtractor>>) -> Self {
        Self { strategies }
    }
}

impl SkillExtractor for CombinedSkillExtractor {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        self.strategies
            .iter()
            .flat_map(|s| s.extract_skills(text))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Noun,
    Phrase,
    Combined,
}

impl FromStr for Strategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(Strategy::Noun),
            "phrase" => Ok(Strategy::Phrase),
            "combined" => Ok(Strategy::Combined),
            other => Err(AppError::Config(format!(
                "Unknown skill strategy '{other}' (expected noun, phrase or combined)"
            ))),
        }
    }
}

/// Builds the extractor for `strategy`. `vocabulary` feeds the phrase matcher.
pub fn build_extractor<I, S>(
    strategy: Strategy,
    min_chars: usize,
    vocabulary: I,
) -> Result<Arc<dyn SkillExtractor>, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let extractor: Arc<dyn SkillExtractor> = match strategy {
        Strategy::Noun => Arc::new(NounSkillExtractor::new(min_chars)),
        Strategy::Phrase => Arc::new(PhraseSkillExtractor::new(vocabulary)?),
        Strategy::Combined => Arc::new(CombinedSkillExtractor::new(vec![
            Arc::new(NounSkillExtractor::new(min_chars)),
            Arc::new(PhraseSkillExtractor::new(vocabulary)?),
        ])),
    };
    Ok(extractor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Experienced Python developer with SQL and Pandas skills";

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_noun_extractor_resume_sentence() {
        let skills = NounSkillExtractor::default().extract_skills(RESUME);
        assert_eq!(skills, set(&["developer", "pandas", "python", "skills", "sql"]));
    }

    #[test]
    fn test_noun_extractor_drops_short_tokens() {
        let skills = NounSkillExtractor::default().extract_skills("Go and R with AWS");
        assert_eq!(skills, set(&["aws"]));
    }

    #[test]
    fn test_noun_extractor_custom_min_chars() {
        let skills = NounSkillExtractor::new(2).extract_skills("Go and R with AWS");
        assert!(skills.contains("go"));
        assert!(!skills.contains("r"));
    }

    #[test]
    fn test_noun_extractor_lowercases_and_dedupes() {
        let skills = NounSkillExtractor::default().extract_skills("Docker. docker. DOCKER.");
        assert_eq!(skills, set(&["docker"]));
    }

    #[test]
    fn test_noun_extractor_is_idempotent() {
        let extractor = NounSkillExtractor::default();
        assert_eq!(extractor.extract_skills(RESUME), extractor.extract_skills(RESUME));
    }

    #[test]
    fn test_noun_extractor_empty_text() {
        assert!(NounSkillExtractor::default().extract_skills("").is_empty());
    }

    #[test]
    fn test_noun_extractor_keeps_ansible() {
        let extractor = NounSkillExtractor::default();
        assert!(extractor.extract_skills("I use ansible daily").contains("ansible"));
        assert!(extractor
            .extract_skills("Worked with terraform and ansible.")
            .contains("ansible"));
    }

    #[test]
    fn test_noun_extractor_never_yields_multiword_skill() {
        let skills = NounSkillExtractor::default().extract_skills("Machine learning engineer");
        assert!(!skills.contains("machine learning"));
    }

    #[test]
    fn test_phrase_extractor_finds_multiword_skills() {
        let extractor = PhraseSkillExtractor::new(["machine learning", "sql", "big data"]).unwrap();
        let skills = extractor.extract_skills("Applied Machine Learning to big-data problems with SQL");
        assert_eq!(skills, set(&["machine learning", "sql"]));
    }

    #[test]
    fn test_phrase_extractor_matches_whole_tokens_only() {
        let extractor = PhraseSkillExtractor::new(["java", "ci/cd"]).unwrap();
        let skills = extractor.extract_skills("Wrote JavaScript pipelines in CI/CD");
        assert_eq!(skills, set(&["ci/cd"]));
    }

    #[test]
    fn test_phrase_extractor_reports_overlapping_skills() {
        let extractor = PhraseSkillExtractor::new(["deep learning", "learning", "deep"]).unwrap();
        let skills = extractor.extract_skills("Deep Learning research");
        assert_eq!(skills, set(&["deep", "deep learning", "learning"]));
    }

    #[test]
    fn test_phrase_extractor_spans_line_breaks() {
        let extractor = PhraseSkillExtractor::new(["Machine Learning"]).unwrap();
        let skills = extractor.extract_skills("machine\n   learning pipelines");
        assert_eq!(skills, set(&["machine learning"]));
    }

    #[test]
    fn test_phrase_extractor_does_not_match_inside_tokens() {
        let extractor = PhraseSkillExtractor::new(["sql", "react"]).unwrap();
        let skills = extractor.extract_skills("PostgreSQL and Preact, then MySQL");
        assert!(skills.is_empty(), "got {skills:?}");
    }

    #[test]
    fn test_phrase_extractor_ignores_blank_vocabulary() {
        let extractor = PhraseSkillExtractor::new(["", "   "]).unwrap();
        assert!(extractor.extract_skills("anything at all").is_empty());
    }

    #[test]
    fn test_combined_is_union() {
        let extractor = build_extractor(Strategy::Combined, 3, ["deep learning"]).unwrap();
        let skills = extractor.extract_skills("Deep learning with PyTorch");
        assert!(skills.contains("deep learning"));
        assert!(skills.contains("pytorch"));
        assert_eq!(extractor.name(), "combined");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Phrase".parse::<Strategy>().unwrap(), Strategy::Phrase);
        assert_eq!(" noun ".parse::<Strategy>().unwrap(), Strategy::Noun);
        assert!(matches!(
            "embedding".parse::<Strategy>(),
            Err(AppError::Config(_))
        ));
    }
}
