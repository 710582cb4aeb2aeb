// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod branch;
pub mod comment;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use mks_core::{Git, Runner, Tracker};

use crate::config::Config;

/// The tracker and git clients a command works with, sharing one runner.
pub struct Context<R> {
    pub tracker: Tracker<R>,
    pub git: Git<R>,
}

impl<R: Runner + Copy> Context<R> {
    pub fn new(runner: R, config: &Config) -> Self {
        Context {
            tracker: Tracker::new(runner, config.tracker_settings()),
            git: Git::new(runner, config.git.program.clone()),
        }
    }
}
