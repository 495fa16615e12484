//! Knowledge base validation utility.
//!
//! Validates a curated knowledge tree the same way the runtime does at
//! startup, prints the report, and exits non-zero on any violation.
//!
//! **Usage:**
//! ```bash
//! veramate-validate [--root <dir>] [--config <file>] [--require <mode>/<category>]... [--json]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use veramate_core::config::VeraMateConfig;
use veramate_diagnosis::tracing_setup::{init_tracing, init_tracing_from_config};
use veramate_knowledge::KnowledgeValidator;

/// Validate curated treatment knowledge
#[derive(Parser, Debug)]
#[command(name = "veramate-validate")]
#[command(about = "Validate curated VeraMate knowledge files before deployment")]
struct Args {
    /// Knowledge root holding scientific/ and ayurvedic/
    #[arg(long, env = "VERAMATE_KNOWLEDGE_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    /// VeraMate TOML config (knowledge root and required categories)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Additional file that must exist, as <mode>/<category>
    #[arg(long = "require", value_name = "MODE/CATEGORY")]
    required: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match VeraMateConfig::load(args.config.as_deref()) {
        Ok(config) => {
            init_tracing_from_config(&config.observability);
            config
        }
        Err(e) => {
            init_tracing();
            error!(error = %e, "failed to load configuration");
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let root = args.root.unwrap_or_else(|| config.knowledge.root.clone());
    let mut required = config.knowledge.required_categories.clone();
    required.extend(args.required);

    let report = KnowledgeValidator::new(root)
        .with_required_categories(required)
        .validate_all();

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        println!("{}", report.summary());
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
