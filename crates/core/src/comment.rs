// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit comment generation.
//!
//! The comment is a fixed template filled from an Output, the Task it
//! belongs to and the Inspection that reviewed it. Field values are pasted
//! in verbatim.

use crate::error::Result;
use crate::issue::{Inspection, Output, Task};
use crate::process::Runner;
use crate::tracker::Tracker;

/// Fills the comment template from an already-fetched triple.
pub fn compose(output: &Output, task: &Task, inspection: &Inspection) -> Result<String> {
    let output_description = output.description()?;

    Ok(format!(
        "{output_description}\n\
         \n\
         Description :\n\
         {output_name}\n\
         ---Output description---\n\
         {output_description}\n\
         ---Task Description---\n\
         {task_name}\n\
         MKS Output ID: mks://{output_id}\n\
         MKS Feature ID: mks://{feature_id}\n\
         MKS Project Name: {project_name}\n\
         Reviewed by:  {inspection_id} {moderator}, {reviewers}\n",
        output_name = output.name()?,
        task_name = task.name()?,
        output_id = output.id(),
        feature_id = task.feature_id()?,
        project_name = task.project_name()?,
        inspection_id = inspection.id(),
        moderator = inspection.moderator()?,
        reviewers = inspection.team_members()?,
    ))
}

/// Fetches the Inspection and Task linked from `output`, then composes.
pub fn generate<R: Runner>(tracker: &Tracker<R>, output: &Output) -> Result<String> {
    let inspection = tracker.fetch_inspection(output.inspection_id()?)?;
    let task = tracker.fetch_task(output.task_id()?)?;
    compose(output, &task, &inspection)
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
