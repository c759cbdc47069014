// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Env creation on top of `python -m venv`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::Config;
use crate::environment::env_path;

#[cfg(test)]
#[path = "./create_test.rs"]
mod create_test;

#[cfg(windows)]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(windows))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Something that can populate a directory with a fresh env.
///
/// The result must contain a bin directory holding an interpreter and
/// a package installer.
pub trait EnvCreator {
    fn create(&self, path: &Path) -> std::io::Result<()>;
}

/// Creates envs by running `<python> -m venv`.
///
/// The env gets no system site packages, is never cleared if it already
/// exists, links its interpreter where the platform allows it, and has pip
/// installed.
#[derive(Debug, Clone, Default)]
pub struct VenvCreator {
    /// Interpreter to bootstrap with (default: first python on PATH).
    pub python: Option<PathBuf>,
}

impl VenvCreator {
    /// Creator using the interpreter configured for this process, if any.
    pub fn from_config(config: &Config) -> Self {
        Self {
            python: config.python.clone(),
        }
    }

    fn bootstrap_python(&self) -> std::io::Result<PathBuf> {
        if let Some(python) = &self.python {
            return Ok(python.clone());
        }

        PYTHON_CANDIDATES
            .iter()
            .find_map(|candidate| which::which(candidate).ok())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Python not found in PATH (tried: {})", PYTHON_CANDIDATES.join(", ")),
                )
            })
    }

    /// The full command that would create an env at `path`.
    pub fn command(&self, path: &Path) -> std::io::Result<Command> {
        let mut cmd = Command::new(self.bootstrap_python()?);
        cmd.arg("-m").arg("venv");
        if cfg!(unix) {
            cmd.arg("--symlinks");
        }
        cmd.arg(path);
        Ok(cmd)
    }
}

impl EnvCreator for VenvCreator {
    fn create(&self, path: &Path) -> std::io::Result<()> {
        let mut cmd = self.command(path)?;
        tracing::debug!("running {cmd:?}");

        let status = cmd.status()?;
        if !status.success() {
            return Err(std::io::Error::other(format!(
                "python -m venv exited with {status}"
            )));
        }

        Ok(())
    }
}

/// Create the named env under the configured base directory.
///
/// There is no rollback: a failed creation may leave a partial directory
/// behind, which [`crate::purge_env`] can remove.
pub fn create_env(config: &Config, env_name: &str, creator: &dyn EnvCreator) -> crate::Result<()> {
    let path = env_path(config, env_name, &[]);
    tracing::info!("creating env {env_name:?} at {path:?}");

    creator
        .create(&path)
        .map_err(|error| crate::Error::CreateFailed {
            env: env_name.to_string(),
            path: path.clone(),
            error,
        })?;

    tracing::info!("successfully created env {env_name:?}");
    Ok(())
}
