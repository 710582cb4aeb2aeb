// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `$MKSGIT_CONFIG`, or from
//! `<config dir>/mksgit/config.toml` when that variable is unset. Every key
//! is optional; a missing file means defaults throughout:
//!
//! ```toml
//! [tracker]
//! program = "im"
//! outputs_query = "My outputs"
//! hash_field = "AfterHash"
//!
//! [git]
//! program = "git"
//! ```
//!
//! `MKSGIT_IM` and `MKSGIT_GIT` override the two program paths.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use mks_core::tracker::{DEFAULT_HASH_FIELD, DEFAULT_OUTPUTS_QUERY};
use mks_core::TrackerSettings;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "mksgit";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub git: GitConfig,
}

/// The `[tracker]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Tracker CLI executable (default: "im").
    #[serde(default = "default_im_program")]
    pub program: String,
    /// Saved query listing the user's open outputs (default: "My outputs").
    #[serde(default = "default_outputs_query")]
    pub outputs_query: String,
    /// Field holding the delivered commit hash (default: "AfterHash").
    #[serde(default = "default_hash_field")]
    pub hash_field: String,
}

/// The `[git]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable (default: "git").
    #[serde(default = "default_git_program")]
    pub program: String,
}

fn default_im_program() -> String {
    mks_core::tracker::DEFAULT_PROGRAM.to_string()
}

fn default_outputs_query() -> String {
    DEFAULT_OUTPUTS_QUERY.to_string()
}

fn default_hash_field() -> String {
    DEFAULT_HASH_FIELD.to_string()
}

fn default_git_program() -> String {
    mks_core::git::DEFAULT_PROGRAM.to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            program: default_im_program(),
            outputs_query: default_outputs_query(),
            hash_field: default_hash_field(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            program: default_git_program(),
        }
    }
}

impl Config {
    /// Loads the configuration file at `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads from the default location and applies environment overrides.
    pub fn discover() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        config.apply_overrides(env::im_program(), env::git_program());
        Ok(config)
    }

    /// Replaces the program paths with any override that is present.
    pub fn apply_overrides(&mut self, im: Option<String>, git: Option<String>) {
        if let Some(im) = im {
            self.tracker.program = im;
        }
        if let Some(git) = git {
            self.git.program = git;
        }
    }

    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            program: self.tracker.program.clone(),
            outputs_query: self.tracker.outputs_query.clone(),
            hash_field: self.tracker.hash_field.clone(),
        }
    }
}

/// Where the configuration file is looked up.
pub fn config_path() -> Option<PathBuf> {
    env::config_path().or_else(|| {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
