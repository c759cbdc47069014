// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Env removal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::environment::{check_env_exists, env_path};
use crate::{Config, RemovalFailure, RemovalOp};

#[cfg(test)]
#[path = "./purge_test.rs"]
mod purge_test;

/// Remove the named env and everything inside it.
///
/// A missing env is an error unless `force` is set; a non-directory at the
/// env's path is always an error. Removal keeps going past entries that
/// cannot be deleted and reports all of them at the end as one
/// [`crate::Error::PurgeFailed`].
pub fn purge_env(config: &Config, env_name: &str, force: bool) -> crate::Result<()> {
    match check_env_exists(config, env_name) {
        Ok(()) => {}
        Err(crate::Error::EnvNotFound(_)) if force => {
            tracing::debug!("env {env_name:?} does not exist, nothing to purge");
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    let env_dir = env_path(config, env_name, &[]);
    tracing::info!("removing env {env_name:?} at {env_dir:?}");

    let failures = remove_tree(&env_dir);
    if !failures.is_empty() {
        return Err(crate::Error::PurgeFailed {
            env: env_name.to_string(),
            failures,
        });
    }

    tracing::info!("successfully removed env {env_name:?} at {env_dir:?}");
    Ok(())
}

/// Delete a directory tree bottom-up, collecting every failure.
///
/// Symlinks are removed, never followed, including a symlinked root.
fn remove_tree(root: &Path) -> Vec<RemovalFailure> {
    let mut failures = Vec::new();
    let mut record = |path: PathBuf, op: RemovalOp, error: std::io::Error| {
        tracing::warn!("{op} failed for {path:?}: {error}");
        failures.push(RemovalFailure { path, op, error });
    };

    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .contents_first(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // only directory reads fail here; the directory itself is
                // still yielded afterwards and its removal will fail too
                let path = err.path().unwrap_or(root).to_path_buf();
                let error = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                record(path, RemovalOp::ReadDir, error);
                continue;
            }
        };

        let (op, result) = if entry.file_type().is_dir() {
            (RemovalOp::RemoveDir, std::fs::remove_dir(entry.path()))
        } else {
            (RemovalOp::RemoveFile, std::fs::remove_file(entry.path()))
        };

        if let Err(error) = result {
            record(entry.into_path(), op, error);
        }
    }

    failures
}
