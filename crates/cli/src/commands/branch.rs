// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Squash-merge a delivered branch and commit it with the output's comment.

use std::io::Write;

use mks_core::Runner;

use super::Context;
use crate::error::Result;

/// Commit `branch` as a single squashed commit.
///
/// The branch tip is matched against the stored hashes of the user's
/// outputs. A tip no output claims is an error, and nothing is merged. With
/// `dry_run` the comment is printed and git is left alone. The inspection
/// state is not checked here.
pub fn run<R: Runner>(
    ctx: &Context<R>,
    branch: &str,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let hash = ctx.git.rev_parse(branch)?;
    tracing::info!("branch {} is at {}", branch, hash);

    let id = ctx
        .tracker
        .find_output_by_hash(&hash)?
        .ok_or_else(|| mks_core::Error::NoOutputForHash(hash.clone()))?;
    let output = ctx.tracker.fetch_output(id)?;
    let message = mks_core::comment::generate(&ctx.tracker, &output)?;

    if dry_run {
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    ctx.git.merge_squash(branch)?;
    ctx.git.commit(&message)?;
    tracing::info!("committed {} for output {}", branch, id);
    Ok(())
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
