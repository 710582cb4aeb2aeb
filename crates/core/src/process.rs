// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process invocation.
//!
//! Both the tracker client and the git client talk to their tools through a
//! [`Runner`]. The runner only reports what happened (exit code, stdout,
//! stderr); deciding whether that counts as success is up to the caller,
//! usually via [`CommandOutput::into_stdout`].

use std::fmt;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// A program plus its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Everything a finished child process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Returns stdout if the process exited with 0, otherwise a
    /// [`Error::CommandFailed`] describing `invocation`.
    pub fn into_stdout(self, invocation: &Invocation) -> Result<String> {
        if self.success() {
            Ok(self.stdout)
        } else {
            Err(Error::CommandFailed {
                command: invocation.to_string(),
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs external commands to completion.
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;

    /// Runs `invocation` and returns its stdout, failing on a non-zero exit.
    fn stdout(&self, invocation: &Invocation) -> Result<String> {
        self.run(invocation)?.into_stdout(invocation)
    }
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        (**self).run(invocation)
    }
}

/// Runs commands as real child processes.
///
/// The child inherits the environment and working directory. There is no
/// timeout: the call blocks until the process exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        tracing::debug!("running {}", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        if !result.success() {
            tracing::debug!("{} exited with {:?}", invocation, result.code);
        }
        Ok(result)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedRunner;

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{CommandOutput, Invocation, Runner};
    use crate::error::Result;

    /// A [`Runner`] that replays canned output instead of spawning processes.
    ///
    /// Responses are keyed by the rendered command line (`im viewissue 7`).
    /// Unknown commands answer with exit code 127. Every invocation is
    /// recorded so tests can assert on what was (or wasn't) run.
    #[derive(Debug, Default)]
    pub struct ScriptedRunner {
        responses: HashMap<String, CommandOutput>,
        calls: RefCell<Vec<Invocation>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `command_line` with a successful run printing `stdout`.
        pub fn on(mut self, command_line: &str, stdout: &str) -> Self {
            self.responses
                .insert(command_line.to_string(), CommandOutput::ok(stdout));
            self
        }

        /// Answer `command_line` with an arbitrary output.
        pub fn on_output(mut self, command_line: &str, output: CommandOutput) -> Self {
            self.responses.insert(command_line.to_string(), output);
            self
        }

        /// Rendered command lines of every invocation so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().iter().map(ToString::to_string).collect()
        }
    }

    impl Runner for ScriptedRunner {
        fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(self
                .responses
                .get(&invocation.to_string())
                .cloned()
                .unwrap_or_else(|| {
                    CommandOutput::failed(127, format!("no scripted response for {}", invocation))
                }))
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
