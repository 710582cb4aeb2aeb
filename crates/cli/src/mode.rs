// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operating mode selection for the mksgit CLI.
//!
//! The flags pick exactly one of: commit a branch, look up an output by
//! hash, use an output ID directly, or print usage.

use mks_core::IssueId;

use crate::cli::Cli;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Squash-merge `branch` and commit it with the generated comment.
    Branch { branch: String, dry_run: bool },
    /// Print the comment for the output whose stored hash is `hash`.
    Hash { hash: String, force: bool },
    /// Print the comment for output `id`.
    Output { id: IssueId, force: bool },
    /// No mode flag given: print usage.
    Usage,
}

impl Mode {
    /// Select the mode from parsed flags.
    ///
    /// Branch wins over hash, hash over output. Clap already rejects
    /// combinations, so the order only matters for hand-built `Cli` values.
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some(branch) = &cli.branch {
            return Mode::Branch {
                branch: branch.clone(),
                dry_run: cli.dry_run,
            };
        }
        if let Some(hash) = &cli.hash {
            return Mode::Hash {
                hash: hash.clone(),
                force: cli.force,
            };
        }
        if let Some(id) = cli.output {
            return Mode::Output {
                id: IssueId::new(id),
                force: cli.force,
            };
        }
        Mode::Usage
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Branch { .. } => write!(f, "branch"),
            Mode::Hash { .. } => write!(f, "hash"),
            Mode::Output { .. } => write!(f, "output"),
            Mode::Usage => write!(f, "usage"),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
