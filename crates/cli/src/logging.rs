// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Stdout carries only the comment or help text, so log lines go to stderr.
//! `MKSGIT_LOG` takes an `EnvFilter` directive (`debug`, `mks_core=debug`,
//! ...); the default is `warn`.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `directive`, falling back to the default when it is
/// absent or malformed.
pub fn filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let directive = env::log_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
