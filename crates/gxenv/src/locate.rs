// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Executable lookup restricted to an env's bin directory.

use std::path::PathBuf;

use crate::environment::env_path;
use crate::{BIN_DIR, Config};

#[cfg(test)]
#[path = "./locate_test.rs"]
mod locate_test;

/// Find `executable_name` in the named env's bin directory.
///
/// Only the env's bin directory is searched, never the inherited `PATH`.
/// The platform rules for executables apply (execute permission on unix,
/// `PATHEXT` suffixes on windows). The returned path is not canonicalized,
/// so a symlinked interpreter is reported at its location inside the env.
///
/// Returns `None` when nothing matches, including when the env or its bin
/// directory does not exist. Callers needing the env to exist should run
/// [`crate::check_env_exists`] first.
pub fn which(config: &Config, env_name: &str, executable_name: &str) -> Option<PathBuf> {
    let bin_dir = env_path(config, env_name, &[BIN_DIR]);
    tracing::debug!("finding {executable_name:?} in env {env_name:?}");

    let found = match which::which_in(executable_name, Some(&bin_dir), &bin_dir) {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::trace!("lookup in {bin_dir:?} failed: {err}");
            None
        }
    };

    tracing::debug!("{executable_name:?} was found in env {env_name:?} at {found:?}");
    found
}
