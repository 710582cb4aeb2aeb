// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mks-core operations.

use thiserror::Error;

use crate::issue::{IssueId, IssueKind};

/// All possible errors that can occur in mks-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("can't find field '{field}' in tracker output:\n{dump}")]
    FieldNotFound { field: String, dump: String },

    #[error("issue {id} is not {expected} (type is '{actual}'):\n{dump}")]
    WrongIssueType {
        id: IssueId,
        expected: IssueKind,
        actual: IssueKind,
        dump: String,
    },

    #[error("unknown issue type '{actual}' for issue {id}\n  hint: expected one of: Task, Inspection, Output")]
    UnknownIssueType { id: IssueId, actual: String },

    #[error("invalid issue ID: '{0}'")]
    InvalidIssueId(String),

    #[error("Inspection is not completed (output {0})\n  hint: pass --force to generate the comment anyway")]
    InspectionIncomplete(IssueId),

    #[error("no output found with hash '{0}'")]
    NoOutputForHash(String),

    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({}){}", exit_label(.code), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// A specialized Result type for mks-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
