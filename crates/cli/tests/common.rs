// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const OUTPUT_ID: u64 = 300;

pub const TASK_TEXT: &str = "Type: Task\n\
Name: Refactor the front end\n\
Project Name: /Compiler/project.pj\n\
Feature ID: 4242\n";

pub const INSPECTION_TEXT: &str = "Type: Inspection\n\
Author: ann\n\
Moderator: bob\n\
Team Members: cy, dee\n";

pub const COMMENT: &str = "Remove dead branches\n\
\n\
Description :\n\
Parser cleanup\n\
---Output description---\n\
Remove dead branches\n\
---Task Description---\n\
Refactor the front end\n\
MKS Output ID: mks://300\n\
MKS Feature ID: mks://4242\n\
MKS Project Name: /Compiler/project.pj\n\
Reviewed by:  200 bob, cy, dee\n";

const IM_SCRIPT: &str = r#"#!/bin/sh
printf 'im %s\n' "$*" >> "$FAKE_DIR/calls.log"
f=""
case "$1" in
  viewissue) f="$FAKE_DIR/issue-$2.txt" ;;
  issues)
    case "$2" in
      --query=*) f="$FAKE_DIR/outputs.txt" ;;
      --fields=*) f="$FAKE_DIR/hash-$3.txt" ;;
    esac
    ;;
esac
if [ -n "$f" ] && [ -f "$f" ]; then
  cat "$f"
else
  echo "MKS124814: Cannot show view information" >&2
  exit 1
fi
"#;

const GIT_SCRIPT: &str = r#"#!/bin/sh
printf 'git %s\n' "$1" >> "$FAKE_DIR/calls.log"
case "$1" in
  rev-parse)
    if [ -f "$FAKE_DIR/rev-$2.txt" ]; then
      cat "$FAKE_DIR/rev-$2.txt"
    else
      echo "fatal: ambiguous argument '$2'" >&2
      exit 128
    fi
    ;;
  merge) printf '%s\n' "$3" > "$FAKE_DIR/merged.txt" ;;
  commit) printf '%s' "$3" > "$FAKE_DIR/commit-msg.txt" ;;
esac
"#;

/// A scratch directory holding fake `im` and `git` executables and the
/// canned records they serve.
pub struct FakeMks {
    dir: TempDir,
}

impl FakeMks {
    /// One Output (300) with its Task (100) and Inspection (200).
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let fake = FakeMks { dir };
        fake.write_script("im", IM_SCRIPT);
        fake.write_script("git", GIT_SCRIPT);
        fake.write("issue-100.txt", TASK_TEXT);
        fake.write("issue-200.txt", INSPECTION_TEXT);
        fake.write("outputs.txt", "");
        fake.completed("Yes")
    }

    /// Sets the Output's `Inspections completed` field.
    pub fn completed(self, value: &str) -> Self {
        let text = format!(
            "Type: Output\n\
             Name: Parser cleanup\n\
             Description: Remove dead branches\n\
             Inspections completed: {value}\n\
             Output To Inspection Relationship: 200\n\
             Output To Task Relationship: 100\n"
        );
        self.write(&format!("issue-{OUTPUT_ID}.txt"), &text);
        self
    }

    /// Lists `ids` under "My outputs", each paired with its stored hash.
    pub fn outputs(self, entries: &[(u64, &str)]) -> Self {
        let ids: Vec<String> = entries.iter().map(|(id, _)| id.to_string()).collect();
        self.write("outputs.txt", &format!("{}\n", ids.join("\n")));
        for (id, hash) in entries {
            self.write(&format!("hash-{id}.txt"), &format!("{hash}\n"));
        }
        self
    }

    /// Makes `git rev-parse <branch>` print `hash`.
    pub fn branch(self, branch: &str, hash: &str) -> Self {
        self.write(&format!("rev-{branch}.txt"), &format!("{hash}\n"));
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Every recorded invocation, one per line, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Contents of a file the fake git wrote, if any.
    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path().join(name)).ok()
    }

    /// The mksgit binary wired to the fakes, with no config file and no
    /// inherited overrides.
    pub fn mksgit(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mksgit");
        cmd.current_dir(self.path())
            .env("FAKE_DIR", self.path())
            .env("MKSGIT_IM", self.path().join("im"))
            .env("MKSGIT_GIT", self.path().join("git"))
            .env("MKSGIT_CONFIG", self.path().join("no-config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("MKSGIT_LOG")
            .env_remove("COLOR");
        cmd
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).unwrap();
    }

    fn write_script(&self, name: &str, contents: &str) {
        let path: PathBuf = self.path().join(name);
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
