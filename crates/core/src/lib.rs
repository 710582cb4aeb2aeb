// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mks-core: tracker and git plumbing for mksgit
//!
//! This crate reads MKS/Integrity issues through the `im` command-line
//! client, classifies them into Tasks, Inspections and Outputs, finds an
//! Output by the commit hash stored on it, and renders the commit comment
//! for a delivered Output. The [`process::Runner`] trait is the seam to the
//! outside world; tests swap in a scripted runner.

pub mod comment;
pub mod error;
pub mod git;
pub mod issue;
pub mod process;
pub mod tracker;

pub use error::{Error, Result};
pub use git::Git;
pub use issue::{Inspection, Issue, IssueId, IssueKind, Output, Record, Task};
pub use process::{CommandOutput, Invocation, Runner, SystemRunner};
pub use tracker::{Tracker, TrackerSettings};
