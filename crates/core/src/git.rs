// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The few git operations the branch flow needs.

use crate::error::Result;
use crate::process::{Invocation, Runner};

/// Default git executable.
pub const DEFAULT_PROGRAM: &str = "git";

pub struct Git<R> {
    runner: R,
    program: String,
}

impl<R: Runner> Git<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Git {
            runner,
            program: program.into(),
        }
    }

    fn git(&self) -> Invocation {
        Invocation::new(&self.program)
    }

    /// Resolves `reference` to a commit hash (trimmed).
    pub fn rev_parse(&self, reference: &str) -> Result<String> {
        let inv = self.git().arg("rev-parse").arg(reference);
        Ok(self.runner.stdout(&inv)?.trim().to_string())
    }

    /// Stages the changes of `branch` on the current branch without committing.
    pub fn merge_squash(&self, branch: &str) -> Result<()> {
        let inv = self.git().args(["merge", "--squash"]).arg(branch);
        self.runner.stdout(&inv)?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        let inv = self.git().args(["commit", "-m"]).arg(message);
        self.runner.stdout(&inv)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
