// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Env path formatting and existence checks.

use std::path::{Path, PathBuf};

use crate::Config;

#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;

/// What currently sits at an env's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvState {
    /// Nothing exists at the path.
    Absent,
    /// Something exists, but it is not a directory.
    NotADirectory(PathBuf),
    /// A directory exists at the path.
    Directory(PathBuf),
}

/// Join an env name and trailing segments onto the base directory.
///
/// No I/O is performed and the name is not validated.
pub fn env_path(config: &Config, env_name: &str, segments: &[&str]) -> PathBuf {
    let mut path = config.env_base.join(env_name);
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Inspect the filesystem entry for the named env.
///
/// Symlinks are followed, so a link to a directory counts as a directory.
pub fn env_state(config: &Config, env_name: &str) -> EnvState {
    let path = env_path(config, env_name, &[]);
    classify(&path)
}

fn classify(path: &Path) -> EnvState {
    if !path.exists() {
        EnvState::Absent
    } else if !path.is_dir() {
        EnvState::NotADirectory(path.to_path_buf())
    } else {
        EnvState::Directory(path.to_path_buf())
    }
}

/// Check that the named env exists and is a directory.
pub fn check_env_exists(config: &Config, env_name: &str) -> crate::Result<()> {
    tracing::debug!("checking if env {env_name:?} exists");

    match env_state(config, env_name) {
        EnvState::Absent => {
            tracing::debug!("env {env_name:?} does not exist");
            Err(crate::Error::EnvNotFound(env_name.to_string()))
        }
        EnvState::NotADirectory(path) => {
            tracing::debug!("file named {env_name:?} exists but is not a directory");
            Err(crate::Error::EnvNotADirectory(path))
        }
        EnvState::Directory(path) => {
            tracing::debug!("env {env_name:?} exists at {path:?}");
            Ok(())
        }
    }
}
