// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Print the commit comment for an output, found by ID or by hash.

use std::io::Write;

use mks_core::{IssueId, Output, Runner};

use super::Context;
use crate::error::Result;

/// Printed when hash mode finds no matching output.
pub const HASH_NOT_FOUND: &str = "Can't find specified hash, try generate comment by OutputID";

/// Print the comment for output `id`.
///
/// Unless `force` is set the output's inspection must be completed.
pub fn for_output<R: Runner>(
    ctx: &Context<R>,
    id: IssueId,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    let output = ctx.tracker.fetch_output(id)?;
    print_comment(ctx, &output, force, out)
}

/// Print the comment for the output whose stored hash is `hash`.
///
/// A hash nobody claims is not an error: a hint is printed instead.
pub fn for_hash<R: Runner>(
    ctx: &Context<R>,
    hash: &str,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    match ctx.tracker.find_output_by_hash(hash)? {
        Some(id) => for_output(ctx, id, force, out),
        None => {
            writeln!(out, "{}", HASH_NOT_FOUND)?;
            Ok(())
        }
    }
}

fn print_comment<R: Runner>(
    ctx: &Context<R>,
    output: &Output,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !force {
        output.ensure_inspection_completed()?;
    }
    let comment = mks_core::comment::generate(&ctx.tracker, output)?;
    writeln!(out, "{}", comment)?;
    Ok(())
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
