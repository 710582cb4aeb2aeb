// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker issue records.
//!
//! A [`Record`] is the raw `viewissue` dump for one issue. Fields are pulled
//! out of it on demand. [`Issue::parse`] reads the `Type` field once and
//! hands back the matching typed view: [`Task`], [`Inspection`] or
//! [`Output`].

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Numeric identifier of a tracker issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueId(u64);

impl IssueId {
    pub const fn new(id: u64) -> Self {
        IssueId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for IssueId {
    fn from(id: u64) -> Self {
        IssueId(id)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IssueId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(IssueId)
            .map_err(|_| Error::InvalidIssueId(s.to_string()))
    }
}

/// The value of an issue's `Type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A unit of work, belonging to a project and a feature.
    Task,
    /// A review record listing the moderator and reviewers.
    Inspection,
    /// A deliverable, linked to one Task and one Inspection.
    Output,
}

impl IssueKind {
    /// Returns the literal the tracker prints in the `Type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Task => "Task",
            IssueKind::Inspection => "Inspection",
            IssueKind::Output => "Output",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-sensitive: the tracker always prints the capitalized form.
impl FromStr for IssueKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "Task" => Ok(IssueKind::Task),
            "Inspection" => Ok(IssueKind::Inspection),
            "Output" => Ok(IssueKind::Output),
            other => Err(other.to_string()),
        }
    }
}

/// Raw `viewissue` output for a single issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: IssueId,
    text: String,
}

impl Record {
    pub fn new(id: IssueId, text: impl Into<String>) -> Self {
        Record {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    /// The dump exactly as the tracker printed it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the rest of the first line that starts with `<name>:`.
    ///
    /// One space after the colon is dropped. The match is case-sensitive and
    /// must start at the beginning of a line; `\r\n` line endings are
    /// handled.
    pub fn field(&self, name: &str) -> Result<String> {
        let pattern = format!(r"(?mR)^{}: ?(.*)$", regex::escape(name));
        let re = Regex::new(&pattern).map_err(|e| Error::FieldNotFound {
            field: name.to_string(),
            dump: format!("(invalid field pattern: {e})"),
        })?;

        re.captures(&self.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::FieldNotFound {
                field: name.to_string(),
                dump: self.text.clone(),
            })
    }

    /// The raw `Type` field.
    pub fn type_name(&self) -> Result<String> {
        self.field("Type")
    }

    pub fn name(&self) -> Result<String> {
        self.field("Name")
    }

    pub fn description(&self) -> Result<String> {
        self.field("Description")
    }

    fn issue_id_field(&self, name: &str) -> Result<IssueId> {
        self.field(name)?.parse()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MKS Issue: {}\n{}", self.id, self.text)
    }
}

/// Accessors shared by every typed issue view.
macro_rules! record_view {
    ($ty:ident) => {
        impl $ty {
            pub fn record(&self) -> &Record {
                &self.0
            }

            pub fn id(&self) -> IssueId {
                self.0.id()
            }

            pub fn name(&self) -> Result<String> {
                self.0.name()
            }

            pub fn description(&self) -> Result<String> {
                self.0.description()
            }

            pub fn field(&self, name: &str) -> Result<String> {
                self.0.field(name)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// An issue whose `Type` is `Task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task(Record);

record_view!(Task);

impl Task {
    pub fn from_record(record: Record) -> Result<Self> {
        Issue::from_record(record)?.into_task()
    }

    pub fn project_name(&self) -> Result<String> {
        self.0.field("Project Name")
    }

    pub fn feature_id(&self) -> Result<String> {
        self.0.field("Feature ID")
    }
}

/// An issue whose `Type` is `Inspection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection(Record);

record_view!(Inspection);

impl Inspection {
    pub fn from_record(record: Record) -> Result<Self> {
        Issue::from_record(record)?.into_inspection()
    }

    pub fn author(&self) -> Result<String> {
        self.0.field("Author")
    }

    pub fn moderator(&self) -> Result<String> {
        self.0.field("Moderator")
    }

    /// The reviewers, as the tracker lists them.
    pub fn team_members(&self) -> Result<String> {
        self.0.field("Team Members")
    }
}

/// An issue whose `Type` is `Output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output(Record);

record_view!(Output);

impl Output {
    pub fn from_record(record: Record) -> Result<Self> {
        Issue::from_record(record)?.into_output()
    }

    /// True only when `Inspections completed` is exactly `Yes`.
    pub fn inspection_completed(&self) -> Result<bool> {
        Ok(self.0.field("Inspections completed")? == "Yes")
    }

    /// Fails with [`Error::InspectionIncomplete`] unless the inspection is done.
    pub fn ensure_inspection_completed(&self) -> Result<()> {
        if self.inspection_completed()? {
            Ok(())
        } else {
            Err(Error::InspectionIncomplete(self.id()))
        }
    }

    pub fn inspection_id(&self) -> Result<IssueId> {
        self.0.issue_id_field("Output To Inspection Relationship")
    }

    pub fn task_id(&self) -> Result<IssueId> {
        self.0.issue_id_field("Output To Task Relationship")
    }
}

/// A record classified by its `Type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Task(Task),
    Inspection(Inspection),
    Output(Output),
}

impl Issue {
    /// Classifies the `viewissue` dump of issue `id`.
    pub fn parse(id: IssueId, text: impl Into<String>) -> Result<Self> {
        Self::from_record(Record::new(id, text))
    }

    pub fn from_record(record: Record) -> Result<Self> {
        let type_name = record.type_name()?;
        let kind = type_name
            .parse::<IssueKind>()
            .map_err(|actual| Error::UnknownIssueType {
                id: record.id(),
                actual,
            })?;

        Ok(match kind {
            IssueKind::Task => Issue::Task(Task(record)),
            IssueKind::Inspection => Issue::Inspection(Inspection(record)),
            IssueKind::Output => Issue::Output(Output(record)),
        })
    }

    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::Task(_) => IssueKind::Task,
            Issue::Inspection(_) => IssueKind::Inspection,
            Issue::Output(_) => IssueKind::Output,
        }
    }

    pub fn record(&self) -> &Record {
        match self {
            Issue::Task(t) => t.record(),
            Issue::Inspection(i) => i.record(),
            Issue::Output(o) => o.record(),
        }
    }

    pub fn into_task(self) -> Result<Task> {
        match self {
            Issue::Task(task) => Ok(task),
            other => Err(other.wrong_type(IssueKind::Task)),
        }
    }

    pub fn into_inspection(self) -> Result<Inspection> {
        match self {
            Issue::Inspection(inspection) => Ok(inspection),
            other => Err(other.wrong_type(IssueKind::Inspection)),
        }
    }

    pub fn into_output(self) -> Result<Output> {
        match self {
            Issue::Output(output) => Ok(output),
            other => Err(other.wrong_type(IssueKind::Output)),
        }
    }

    fn wrong_type(&self, expected: IssueKind) -> Error {
        let record = self.record();
        Error::WrongIssueType {
            id: record.id(),
            expected,
            actual: self.kind(),
            dump: record.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
