use std::sync::Arc;

use tracing::info;

use crate::analyzer::ResumeAnalyzer;
use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::matcher::Matcher;
use crate::tagger::{build_extractor, SkillExtractor};

/// Shared, read-only application state built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable skill extractor. Default: NounSkillExtractor. Swap via SKILLMATCH_STRATEGY.
    pub extractor: Arc<dyn SkillExtractor>,
}

impl AppState {
    /// Loads the role catalog named by the config (or the built-in one) and
    /// builds the configured extractor.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = match &config.roles_path {
            Some(path) => RoleCatalog::load(path)?,
            None => RoleCatalog::default(),
        };
        if catalog.is_empty() {
            return Err(AppError::Config("Role catalog has no roles".to_string()));
        }
        let catalog = Arc::new(catalog);

        let extractor = build_extractor(
            config.strategy,
            config.min_token_chars,
            catalog.vocabulary(),
        )?;
        info!(
            roles = catalog.len(),
            extractor = extractor.name(),
            "Application state initialized"
        );

        Ok(Self {
            config,
            catalog,
            extractor,
        })
    }

    pub fn analyzer(&self) -> ResumeAnalyzer {
        ResumeAnalyzer::new(self.extractor.clone(), Matcher::new(self.catalog.clone()))
    }
}
