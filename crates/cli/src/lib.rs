// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mksgit - commit comments from MKS/Integrity outputs.
//!
//! This crate provides the `mksgit` CLI. It reads an MKS Output together
//! with its Task and Inspection through the `im` client and turns them into
//! a commit comment, optionally squash-merging a branch and committing it.
//!
//! # Main Components
//!
//! - [`Cli`] - Command-line flags
//! - [`Mode`] - What a single invocation does, derived from the flags
//! - [`Config`] - Tracker and git program settings
//! - [`Error`] - Error types for all operations
//!
//! Tracker access, record parsing and comment rendering live in `mks-core`.
//!
//! ```rust,ignore
//! use clap::Parser;
//! use mksgit::{run, Cli};
//!
//! run(Cli::parse())?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;
pub mod logging;
mod mode;

pub mod config;
pub mod env;
pub mod error;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use mode::Mode;

use std::io::Write;

use clap::CommandFactory;
use mks_core::{Runner, SystemRunner};

use commands::Context;

/// Execute the CLI. This is the main entry point for library users.
///
/// Changes to `--directory` first, then runs the selected mode against the
/// real `im` and `git` executables, writing to stdout.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(|source| Error::Directory {
            path: dir.clone(),
            source,
        })?;
    }
    let cwd = std::env::current_dir()?;
    tracing::info!("working directory: {}", cwd.display());

    let mode = Mode::from_cli(&cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if mode == Mode::Usage {
        return print_usage(&mut out);
    }

    let config = Config::discover()?;
    execute(mode, &config, &SystemRunner, &mut out)
}

/// Run `mode` with an explicit runner and output sink.
///
/// This is the testable core of [`run`]: no process-wide state is touched.
pub fn execute<R: Runner + ?Sized>(
    mode: Mode,
    config: &Config,
    runner: &R,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!("mode: {}", mode);
    let ctx = Context::new(runner, config);

    match mode {
        Mode::Branch { branch, dry_run } => commands::branch::run(&ctx, &branch, dry_run, out),
        Mode::Hash { hash, force } => commands::comment::for_hash(&ctx, &hash, force, out),
        Mode::Output { id, force } => commands::comment::for_output(&ctx, id, force, out),
        Mode::Usage => print_usage(out),
    }
}

/// Print the full help text, styled when colors are enabled.
pub fn print_usage(out: &mut impl Write) -> Result<()> {
    let help = Cli::command().render_help();
    if colors::should_colorize() {
        write!(out, "{}", help.ansi())?;
    } else {
        write!(out, "{}", help)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
