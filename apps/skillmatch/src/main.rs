use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillmatch::config::Config;
use skillmatch::state::AppState;
use skillmatch::tagger::Strategy;
use skillmatch::AppError;

/// Scores a résumé PDF against a job role's required skills.
/// Results are printed as JSON on stdout; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "skillmatch", version, about)]
struct Cli {
    /// JSON role catalog (overrides SKILLMATCH_ROLES_PATH)
    #[arg(long, global = true)]
    roles: Option<PathBuf>,

    /// Skill extraction strategy: noun, phrase or combined
    #[arg(long, global = true)]
    strategy: Option<Strategy>,

    /// Minimum token length for noun-tagged skills
    #[arg(long, global = true)]
    min_token_chars: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a résumé PDF against a role
    Check {
        resume: PathBuf,
        #[arg(long)]
        role: String,
    },
    /// List the configured roles
    Roles,
    /// Show mock test and tutorial links for a role
    Resources {
        #[arg(long)]
        role: String,
    },
    /// Print the skills extracted from a plain-text file ("-" for stdin)
    Tag { input: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env().and_then(|config| {
        config.with_overrides(cli.roles.clone(), cli.strategy, cli.min_token_chars)
    }) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting SkillMatch v{}", env!("CARGO_PKG_VERSION"));

    match run(config, cli.command) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

/// Prints the error envelope on stderr and exits non-zero.
fn fail(err: &AppError) -> ! {
    eprintln!("{}", err.to_json());
    std::process::exit(1);
}

fn run(config: Config, command: Command) -> Result<Value, AppError> {
    let state = AppState::from_config(config)?;

    match command {
        Command::Check { resume, role } => {
            let report = state.analyzer().analyze_path(&resume, &role)?;
            to_value(&report)
        }
        Command::Roles => {
            let roles: Vec<&str> = state.catalog.role_names().collect();
            Ok(json!({ "roles": roles }))
        }
        Command::Resources { role } => {
            let resources = state.catalog.resources(&role)?;
            Ok(json!({
                "role": role,
                "mock_test": resources.mock_test,
                "tutorials": resources.tutorials,
            }))
        }
        Command::Tag { input } => {
            let text = read_input(&input)?;
            let skills = state.extractor.extract_skills(&text);
            Ok(json!({
                "extractor": state.extractor.name(),
                "skills": skills,
            }))
        }
    }
}

fn read_input(input: &Path) -> Result<String, AppError> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(input)?)
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.into()))
}
