//! nastrajacz CLI library
//!
//! This library contains all the CLI logic for nastrajacz, making it reusable
//! for testing.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use nastrajacz_config::{IconMode, Selection};
use owo_colors::{OwoColorize, Stream};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use command::Command;
use common::RuntimeContext;
use error::CommandError;

/// nastrajacz - keep dotfile fragments in sync with a repository
#[derive(Debug, Parser)]
#[command(name = "nastrajacz")]
#[command(about = "Synchronize dotfile fragments between your home directory and a repository")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["apply", "fetch", "list"]),
))]
pub struct Cli {
    /// Apply configuration stored in the repository
    #[arg(long)]
    pub apply: bool,

    /// Fetch actual configuration and store it in the repository
    #[arg(long)]
    pub fetch: bool,

    /// List fragments present in configuration file
    #[arg(long)]
    pub list: bool,

    /// Comma separated list of fragments to operate on, or all fragments when omitted
    #[arg(long, value_name = "FRAGMENTS")]
    pub select: Option<Selection>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "NASTRAJACZ_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Show Nerd Font icons in status markers (always, never, auto)
    #[arg(long, env = "NASTRAJACZ_ICONS", value_name = "MODE", default_value = "always")]
    pub icons: IconMode,
}

/// Operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Copy fragments into the home directory
    Apply,
    /// Copy fragments into the repository
    Fetch,
    /// Print fragment names
    List,
}

impl Cli {
    /// The selected operation
    pub fn mode(&self) -> Mode {
        if self.apply {
            Mode::Apply
        } else if self.fetch {
            Mode::Fetch
        } else {
            Mode::List
        }
    }
}

/// Main entry point for the CLI application
///
/// Expected failures (missing fragments file, empty selection) are printed to
/// stdout and are not errors.
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    nastrajacz_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let show_icons = cli.icons.should_show_icons(std::io::stdout().is_terminal());

    match execute(&cli, Path::new("."), show_icons) {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_facing() => {
            if let Some(cause) = std::error::Error::source(&e) {
                tracing::warn!("{}", cause);
            }
            print_notice(&e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the fragments, check the selection and dispatch the selected mode
fn execute(cli: &Cli, root: &Path, show_icons: bool) -> error::Result<()> {
    let context = RuntimeContext::load(root, cli.select.as_ref(), show_icons)?;

    match cli.mode() {
        Mode::Apply => {
            cmd::ApplyCommand.execute(&context)?;
        }
        Mode::Fetch => {
            cmd::FetchCommand.execute(&context)?;
        }
        Mode::List => cmd::ListCommand.execute(&context)?,
    }

    Ok(())
}

fn print_notice(err: &CommandError) {
    let message = err.to_string();
    match err {
        CommandError::FragmentsFileUnreadable(_) => {
            println!("{}", message.if_supports_color(Stream::Stdout, |text| text.red()));
        }
        _ => {
            println!(
                "{}",
                message.if_supports_color(Stream::Stdout, |text| text.yellow())
            );
        }
    }
}
