//! Heymark - one skill repository, every AI coding tool
//!
//! Links a project to a repository of skill documents and projects those
//! documents into each tool's native rule layout:
//! - `heymark link <repo-url>` records the source in `.heymark/config.json`
//! - `heymark sync [. | tool...]` regenerates tool output from the source
//! - `heymark clean [. | tool...]` removes generated output
//! - `heymark status` (or no command) shows what is linked

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use heymark_core::config::{self, LinkConfig};
use heymark_core::constants::{DEFAULT_BRANCH, SAMPLES_FOLDER, SAMPLES_REPO_URL};
use heymark_core::git::GitCli;
use heymark_core::status;
use heymark_core::sync::{self, SyncContext};
use heymark_core::tools::ToolRegistry;
use heymark_core::SyncError;

mod render;

/// Heymark - sync one skill repository into every AI coding tool
#[derive(Parser, Debug)]
#[command(name = "heymark", version)]
#[command(about = "Sync one skill repository into every AI coding tool's rule format", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Link this project to a skill repository
    Link {
        /// Repository URL (https or ssh)
        #[arg(required_unless_present = "samples")]
        repo_url: Option<String>,

        /// Branch to track
        #[arg(short, long)]
        branch: Option<String>,

        /// Folder inside the repository holding the skill documents
        #[arg(short, long)]
        folder: Option<String>,

        /// Link the public sample skills
        #[arg(long, conflicts_with_all = ["repo_url", "branch", "folder"])]
        samples: bool,
    },

    /// Regenerate tool output from the linked skills (`.` for all tools)
    Sync {
        #[arg(value_name = "TOOL")]
        tools: Vec<String>,
    },

    /// Remove generated tool output (`.` for all tools)
    Clean {
        #[arg(value_name = "TOOL")]
        tools: Vec<String>,
    },

    /// Show the linked repository and cache state
    Status,

    /// Show usage and supported tools
    Help,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // stdout carries command output; logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let details = e
                .downcast_ref::<SyncError>()
                .map(SyncError::details)
                .unwrap_or_default();
            render::error(&mut io::stderr().lock(), &e, &details);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = project_root()?;
    let tools = ToolRegistry::with_builtin_tools();
    let mut out = io::stdout().lock();

    match cli.command {
        Some(Commands::Link {
            repo_url,
            branch,
            folder,
            samples,
        }) => {
            let config = if samples {
                LinkConfig::new(SAMPLES_REPO_URL, Some(DEFAULT_BRANCH), Some(SAMPLES_FOLDER))
            } else {
                LinkConfig::new(
                    repo_url.unwrap_or_default(),
                    branch.as_deref(),
                    folder.as_deref(),
                )
            };
            let config = config.ok_or(SyncError::InvalidConfig)?;

            config::save(&root, &config)?;
            render::link(&mut out, &config)?;
        }
        Some(Commands::Sync { tools: selection }) => {
            let ctx = SyncContext::new(root, tools, GitCli::new());
            let report = sync::sync(&ctx, &selection)?;
            render::sync(&mut out, &report)?;
        }
        Some(Commands::Clean { tools: selection }) => {
            let ctx = SyncContext::new(root, tools, GitCli::new());
            let report = sync::clean(&ctx, &selection)?;
            render::clean(&mut out, &report)?;
        }
        Some(Commands::Help) => {
            render::help(&mut out, &tools)?;
        }
        Some(Commands::Status) | None => {
            let report = status::status(&root, &tools);
            render::status(&mut out, &report)?;
        }
    }

    Ok(())
}

fn project_root() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to resolve the current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("heymark").chain(args.iter().copied()))
    }

    #[test]
    fn no_command_means_status() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn link_flags() {
        let cli = parse(&["link", "git@github.com:acme/rules.git", "-b", "dev", "--folder", "skills"])
            .unwrap();
        match cli.command {
            Some(Commands::Link {
                repo_url,
                branch,
                folder,
                samples,
            }) => {
                assert_eq!(repo_url.as_deref(), Some("git@github.com:acme/rules.git"));
                assert_eq!(branch.as_deref(), Some("dev"));
                assert_eq!(folder.as_deref(), Some("skills"));
                assert!(!samples);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn link_requires_url_unless_samples() {
        assert!(parse(&["link"]).is_err());
        assert!(parse(&["link", "--samples"]).is_ok());
        assert!(parse(&["link", "--samples", "https://example.com/r.git"]).is_err());
        assert!(parse(&["link", "--samples", "-b", "dev"]).is_err());
    }

    #[test]
    fn sync_takes_tool_list() {
        let cli = parse(&["-v", "sync", "cursor", "claude-code"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Sync { tools }) => assert_eq!(tools, vec!["cursor", "claude-code"]),
            other => panic!("unexpected command: {other:?}"),
        }

        match parse(&["clean", "."]).unwrap().command {
            Some(Commands::Clean { tools }) => assert_eq!(tools, vec!["."]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn help_and_status_take_no_arguments() {
        assert!(matches!(parse(&["help"]).unwrap().command, Some(Commands::Help)));
        assert!(parse(&["help", "sync"]).is_err());
        assert!(parse(&["status", "extra"]).is_err());
    }
}
