// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Listing the entries under the base directory.

use std::path::{Path, PathBuf};

use crate::Config;

#[cfg(test)]
#[path = "./list_test.rs"]
mod list_test;

/// List every entry directly under the base directory.
///
/// This is a `<env_base>/*` glob: entries are not validated as envs, so a
/// stray file shows up too. Hidden entries are skipped, and entries that
/// cannot be read while matching are logged and left out.
pub fn list_envs(config: &Config) -> crate::Result<Vec<PathBuf>> {
    let escaped_base = glob::Pattern::escape(&config.env_base.to_string_lossy());
    let query = Path::new(&escaped_base).join("*");
    tracing::debug!(
        "finding envs in {:?} by glob, query = {query:?}",
        config.env_base
    );

    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    let mut envs = Vec::new();
    for entry in glob::glob_with(&query.to_string_lossy(), options)? {
        match entry {
            Ok(path) => envs.push(path),
            Err(err) => tracing::warn!("skipping unreadable entry: {err}"),
        }
    }

    Ok(envs)
}
