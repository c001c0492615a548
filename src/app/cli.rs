//! CLI Adapter.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError};
use log::LevelFilter;

use crate::app::api::{Workflow, open_workflow};
use crate::app::{StatusReport, ValidationLocation};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "rcflow")]
#[command(version)]
#[command(about = "Drive release candidates from branch to accepted release", long_about = None)]
struct Cli {
    /// Repository to operate on
    #[arg(short, long)]
    repo: String,
    /// Show what would happen without touching GitHub, files or tools
    #[arg(long, visible_alias = "whatif")]
    dry_run: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Configuration directory (defaults to $RCFLOW_CONFIG_DIR or ~/.config/rcflow)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a release candidate branch from develop
    #[clap(visible_alias = "cc")]
    CreateCand {
        /// Bump the major version instead of the minor version
        #[arg(long)]
        major: bool,
    },
    /// Create a hotfix branch from master
    #[clap(visible_alias = "ch")]
    CreateHotfix,
    /// Download the next candidate in the queue
    #[clap(visible_alias = "dl")]
    Download,
    /// Accept the next candidate as a release
    Accept {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the release history into the accepted download directory
    DownloadReleaseHistory,
    /// Export the user manual for the next candidate
    GenerateUserManual,
    /// Reuse the previous release's user manual for the next candidate
    CopyPreviousUserManual,
    /// Print every resolved location
    Paths,
    /// Show the state of the release lifecycle
    #[clap(visible_alias = "st")]
    Status,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::builder();
    builder
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format(|buf, record| {
            let level = record.level();
            let style = &buf.default_level_style(level);

            writeln!(buf, "[{style}{level}{style:#}] {}", record.args())
        });

    if !verbose {
        builder.format_timestamp(None);
    }

    builder.init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let workflow = open_workflow(&cli.repo, cli.dry_run, cli.config_dir.as_deref())?;

    match cli.command {
        Commands::CreateCand { major } => {
            if let Some(branch) = workflow.create_cand(major)? {
                println!("✅ Created release candidate {}", branch);
            }
        }
        Commands::CreateHotfix => {
            if let Some(branch) = workflow.create_hotfix()? {
                println!("✅ Created hotfix {}", branch);
            }
        }
        Commands::Download => {
            if let Some(dir) = workflow.download()? {
                println!("✅ Downloaded candidate to {}", dir.display());
            }
        }
        Commands::Accept { yes } => {
            if !yes && !workflow.is_dry_run() && !confirm_accept(&workflow)? {
                println!("Accept cancelled");
                return Ok(());
            }
            if let Some(version) = workflow.accept()? {
                println!("✅ Accepted release {}", version.tag());
            }
        }
        Commands::DownloadReleaseHistory => {
            let path = workflow.download_release_history()?;
            if !workflow.is_dry_run() {
                println!("✅ Wrote release history to {}", path.display());
            }
        }
        Commands::GenerateUserManual => {
            let target = workflow.generate_user_manual()?;
            if !workflow.is_dry_run() {
                println!("✅ Generated user manual {}", target.display());
            }
        }
        Commands::CopyPreviousUserManual => {
            let target = workflow.copy_previous_user_manual()?;
            if !workflow.is_dry_run() {
                println!("✅ Copied previous user manual to {}", target.display());
            }
        }
        Commands::Paths => print_paths(&workflow),
        Commands::Status => print_status(&workflow.status()?),
    }
    Ok(())
}

fn confirm_accept(workflow: &Workflow) -> Result<bool, AppError> {
    let version = workflow.paths().candidate_tag(workflow.provider())?;
    let prompt = format!("Accept {} of {} as a release?", version.tag(), workflow.paths().repo());
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
    }
}

fn print_paths(workflow: &Workflow) {
    let paths = workflow.paths();
    let provider = workflow.provider();
    let store = workflow.store();

    let fixed = [
        ("repo_root", paths.repo_root()),
        ("candidate_root", paths.candidate_root_path()),
        ("release_tools_config", paths.release_tools_config_path()),
        ("confluence_tools_config", paths.confluence_tools_config_path()),
        ("devel_environment", paths.devel_environment_dir()),
        ("doc", paths.doc_dir()),
        ("doc_metadata", paths.doc_metadata_dir()),
        ("user_validations", paths.user_validations_dir()),
        ("validations_all_versions", paths.user_validations_path(ValidationLocation::AllVersions)),
        ("validations_next_hotfix", paths.user_validations_path(ValidationLocation::NextHotfix)),
        ("validations_next_release", paths.user_validations_path(ValidationLocation::NextRelease)),
        ("validations_files", paths.user_validations_path(ValidationLocation::ValidationFiles)),
        ("validations_sql_updates", paths.user_validations_path(ValidationLocation::SqlUpdates)),
        ("validations_latest", paths.user_validations_path(ValidationLocation::Latest)),
    ];
    for (label, path) in fixed {
        println!("{label}: {}", path.display());
    }

    let resolved = [
        ("current_candidate", paths.current_candidate_dir(provider)),
        ("user_manual_download", paths.user_manual_download_path(provider)),
        ("latest_accepted", paths.latest_accepted_candidate_dir(provider, store)),
        ("user_manual_previous", paths.user_manual_path_previous(provider, store)),
        ("release_history", paths.release_history_path(provider, store)),
    ];
    for (label, result) in resolved {
        match result {
            Ok(path) => println!("{label}: {}", path.display()),
            Err(err) => println!("{label}: (unavailable: {err})"),
        }
    }
}

fn print_status(report: &StatusReport) {
    println!("Latest version: {}", report.latest_version.tag());
    if report.queue.is_empty() {
        println!("Queue: (empty)");
    } else {
        println!("Queue: {}", report.queue.join(", "));
    }

    match &report.candidate {
        Some(candidate) => println!(
            "Candidate {}: {}, {}",
            candidate.branch,
            if candidate.downloaded { "downloaded" } else { "not downloaded" },
            if candidate.manual_ready { "manual ready" } else { "no manual" }
        ),
        None => println!("Candidate: none pending"),
    }

    match &report.accepted {
        Some(accepted) => println!(
            "Accepted {}: {} ({}, {})",
            report.latest_version.tag(),
            accepted.dir.display(),
            if accepted.history_recorded { "history recorded" } else { "no history" },
            if accepted.manual_present { "manual present" } else { "no manual" }
        ),
        None => println!("Accepted {}: download directory not found", report.latest_version.tag()),
    }
}
