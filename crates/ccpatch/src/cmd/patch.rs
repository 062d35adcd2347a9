//! Shared implementation for the ccpatch and patch-cc commands.

use crate::cmd::completions::ShellType;
use anyhow::Result;
use ccpatch_core::{RewriteConfig, StripMode};
use ccpatch_loader::{DEFAULT_DATABASE_FILE, LoadError, load, save};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Strip vendor-specific flags and normalize compiler paths in a compilation database.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The compilation database to rewrite
    #[arg(value_name = "FILE", default_value = DEFAULT_DATABASE_FILE)]
    pub file: PathBuf,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,

    /// Write the result here instead of rewriting FILE in place
    #[arg(short = 'o', long, value_name = "OUTPUT", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "check"])]
    pub stdout: bool,

    /// Check if any command needs rewriting (exit 1 if so), write nothing
    #[arg(long)]
    pub check: bool,

    /// Remove flags by literal substring instead of by whole word
    #[arg(long)]
    pub substring: bool,

    /// Additional flag to remove (repeatable)
    #[arg(long = "strip", value_name = "FLAG", allow_hyphen_values = true)]
    pub strip: Vec<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the rewrite configuration selected by the arguments.
    pub fn rewrite_config(&self) -> RewriteConfig {
        let mode = if self.substring {
            StripMode::Substring
        } else {
            StripMode::Token
        };
        RewriteConfig::new()
            .with_extra_flags(self.strip.iter().cloned())
            .with_strip_mode(mode)
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = args.rewrite_config();

    let mut db = load(&args.file)?;
    let summary = db.rewrite(&config);
    tracing::info!(
        "{} records, {} commands, {} changed, {} arguments-only",
        summary.records,
        summary.commands,
        summary.changed,
        summary.arguments_only
    );

    if args.check {
        if summary.changed > 0 {
            eprintln!(
                "{} of {} commands need rewriting: {}",
                summary.changed,
                summary.commands,
                args.file.display()
            );
            return Ok(ExitCode::from(1));
        }
        if args.verbose {
            eprintln!("Nothing to rewrite: {}", args.file.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(db.to_json()?.as_bytes())?;
        return Ok(ExitCode::SUCCESS);
    }

    let target = args.output.as_ref().unwrap_or(&args.file);
    save(&db, target)?;
    if args.verbose {
        eprintln!(
            "Rewrote {} of {} commands: {} -> {}",
            summary.changed,
            summary.commands,
            args.file.display(),
            target.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Exit code for a failed run: 1 when the database is missing, 2 otherwise.
fn failure_code(err: &anyhow::Error) -> ExitCode {
    match err.chain().find_map(|cause| cause.downcast_ref::<LoadError>()) {
        Some(LoadError::NotFound { .. }) => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main entry point for the patch command.
pub fn main() -> ExitCode {
    main_with_name("ccpatch")
}

/// Main entry point with custom binary name (for patch-cc compatibility).
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            failure_code(&e)
        }
    }
}
