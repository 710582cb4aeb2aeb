// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mksgit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Generate MKS commit comments and squash-merge delivered branches")]
#[command(
    long_about = "Generate MKS commit comments and squash-merge delivered branches.\n\n\
    The comment is built from an MKS Output, its Task and its Inspection, read through the im CLI."
)]
#[command(help_template = help::template())]
#[command(before_help = help::modes())]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// MKS output number
    #[arg(short = 'o', long = "output", value_name = "NUM")]
    pub output: Option<u64>,

    /// Ignore not completed inspections
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Search the output by commit hash
    #[arg(short = 'g', long = "hash", value_name = "HASH", conflicts_with = "output")]
    pub hash: Option<String>,

    /// Squash-merge the branch and commit it with the generated comment
    #[arg(
        short = 'b',
        long,
        value_name = "BRANCH",
        conflicts_with_all = ["output", "hash"]
    )]
    pub branch: Option<String>,

    /// With --branch: print the comment instead of merging and committing
    #[arg(long, requires = "branch", conflicts_with_all = ["output", "hash"])]
    pub dry_run: bool,

    /// Run as if mksgit was started in <path>
    #[arg(short = 'C', long = "directory", value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
