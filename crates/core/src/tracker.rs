// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the MKS/Integrity `im` command-line tool.

use crate::error::Result;
use crate::issue::{Inspection, Issue, IssueId, Output, Record, Task};
use crate::process::{Invocation, Runner};

/// Default tracker executable.
pub const DEFAULT_PROGRAM: &str = "im";
/// Saved query listing the current user's open outputs.
pub const DEFAULT_OUTPUTS_QUERY: &str = "My outputs";
/// Field holding the commit hash an output was delivered with.
pub const DEFAULT_HASH_FIELD: &str = "AfterHash";

/// How to reach the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub program: String,
    pub outputs_query: String,
    pub hash_field: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        TrackerSettings {
            program: DEFAULT_PROGRAM.to_string(),
            outputs_query: DEFAULT_OUTPUTS_QUERY.to_string(),
            hash_field: DEFAULT_HASH_FIELD.to_string(),
        }
    }
}

/// Fetches and classifies tracker issues.
///
/// Nothing is cached: every call runs the tracker CLI again.
pub struct Tracker<R> {
    runner: R,
    settings: TrackerSettings,
}

impl<R: Runner> Tracker<R> {
    pub fn new(runner: R, settings: TrackerSettings) -> Self {
        Tracker { runner, settings }
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    fn im(&self) -> Invocation {
        Invocation::new(&self.settings.program)
    }

    /// Runs `viewissue <id>` and keeps the dump.
    pub fn view_issue(&self, id: IssueId) -> Result<Record> {
        let inv = self.im().arg("viewissue").arg(id.to_string());
        let text = self.runner.stdout(&inv)?;
        Ok(Record::new(id, text))
    }

    pub fn fetch(&self, id: IssueId) -> Result<Issue> {
        Issue::from_record(self.view_issue(id)?)
    }

    pub fn fetch_task(&self, id: IssueId) -> Result<Task> {
        self.fetch(id)?.into_task()
    }

    pub fn fetch_inspection(&self, id: IssueId) -> Result<Inspection> {
        self.fetch(id)?.into_inspection()
    }

    pub fn fetch_output(&self, id: IssueId) -> Result<Output> {
        self.fetch(id)?.into_output()
    }

    /// IDs returned by the outputs query, in the order the tracker prints them.
    pub fn my_outputs(&self) -> Result<Vec<String>> {
        let inv = self
            .im()
            .arg("issues")
            .arg(format!("--query={}", self.settings.outputs_query))
            .arg("--fields=ID");
        let stdout = self.runner.stdout(&inv)?;
        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }

    /// Value of the configured hash field for issue `id`, as printed.
    pub fn stored_hash(&self, id: &str) -> Result<String> {
        let inv = self
            .im()
            .arg("issues")
            .arg(format!("--fields={}", self.settings.hash_field))
            .arg(id);
        self.runner.stdout(&inv)
    }

    /// Finds the first of the user's outputs whose stored hash equals `hash`.
    ///
    /// Both sides are trimmed before comparing. Returns `Ok(None)` when no
    /// output matches.
    pub fn find_output_by_hash(&self, hash: &str) -> Result<Option<IssueId>> {
        let wanted = hash.trim();
        let candidates = self.my_outputs()?;
        tracing::debug!(
            "searching {} outputs for hash {}",
            candidates.len(),
            wanted
        );

        for candidate in &candidates {
            let stored = self.stored_hash(candidate)?;
            let stored = stored.trim();
            tracing::debug!("output {} has {} '{}'", candidate, self.settings.hash_field, stored);
            if stored == wanted {
                let id = candidate.parse::<IssueId>()?;
                tracing::info!("hash {} belongs to output {}", wanted, id);
                return Ok(Some(id));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
