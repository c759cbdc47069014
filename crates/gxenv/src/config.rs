// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration for gxenv.
//!
//! The base directory is resolved once per process from, in order, the
//! system config file and the user config file. Later files override the
//! fields they set. When no file exists a warning is logged and the platform
//! temp directory is used instead.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{GXENV_TEST_VAR, SYSTEM_CONFIG_PATH, USER_CONFIG_PATH};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Resolved, immutable gxenv configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one subdirectory per env.
    pub env_base: PathBuf,

    /// Interpreter used to bootstrap new envs (default: first python on PATH).
    pub python: Option<PathBuf>,
}

impl Config {
    /// Create a config rooted at the given base directory.
    pub fn new<P: Into<PathBuf>>(env_base: P) -> Self {
        Self {
            env_base: env_base.into(),
            python: None,
        }
    }

    /// Resolve the config for this process from the default sources.
    pub fn resolve() -> crate::Result<Self> {
        ConfigLoader::from_env().load()
    }
}

/// On-disk shape of a config file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    env_base: String,

    #[serde(default)]
    python: Option<String>,
}

impl ConfigFile {
    fn load(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| crate::Error::ConfigReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        Self::parse(&json).map_err(|e| crate::Error::InvalidConfig {
            path: path.to_path_buf(),
            error: e,
        })
    }

    fn parse(json: &str) -> serde_json::Result<Self> {
        // derived structs also accept a sequence
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "expected a JSON object at the top level",
            ));
        }
        serde_json::from_value(value)
    }
}

/// Where to look for configuration, and whether to look at all.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Config files in application order (later files win).
    pub sources: Vec<PathBuf>,

    /// Ignore all sources and use the temp directory (from GXENV_TEST).
    pub testing: bool,

    /// Home directory used to expand `~` in config values.
    pub home: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader for the default system and user config locations.
    pub fn from_env() -> Self {
        let home = dirs::home_dir();
        let mut sources = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
        if let Some(home) = &home {
            sources.push(home.join(USER_CONFIG_PATH));
        }

        Self {
            sources,
            testing: std::env::var_os(GXENV_TEST_VAR).is_some(),
            home,
        }
    }

    /// Apply every existing source in order and produce the final config.
    pub fn load(&self) -> crate::Result<Config> {
        if self.testing {
            tracing::debug!("{GXENV_TEST_VAR} is set, ignoring config files");
            return Ok(Config::new(std::env::temp_dir()));
        }

        let mut env_base = None;
        let mut python = None;

        for path in &self.sources {
            if !path.exists() {
                tracing::debug!("config file {path:?} does not exist");
                continue;
            }

            tracing::debug!("loading config file {path:?}");
            let file = ConfigFile::load(path)?;
            let config_dir = path.parent().unwrap_or_else(|| Path::new("/"));

            let resolve = |value: &str| {
                resolve_config_path(value, config_dir, self.home.as_deref()).map_err(|e| {
                    crate::Error::InvalidConfig {
                        path: path.clone(),
                        error: e,
                    }
                })
            };

            env_base = Some(resolve(&file.env_base)?);
            if let Some(p) = file.python {
                python = Some(resolve(&p)?);
            }
        }

        let env_base = match env_base {
            Some(base) => base,
            None => {
                let fallback = std::env::temp_dir();
                tracing::warn!(
                    "env base path is not configured. Falling back to {}. To change it, \
                     please create a config in ~/{USER_CONFIG_PATH} or {SYSTEM_CONFIG_PATH}.",
                    fallback.display()
                );
                fallback
            }
        };

        tracing::debug!("using env base {env_base:?}");
        Ok(Config { env_base, python })
    }
}

/// Resolve a path value from a config file (absolute, home-relative, or relative).
///
/// Relative paths are taken relative to the directory holding the config file.
fn resolve_config_path(
    value: &str,
    config_dir: &Path,
    home: Option<&Path>,
) -> serde_json::Result<PathBuf> {
    if value == "~" || value.starts_with("~/") {
        let Some(home) = home else {
            return Err(serde::de::Error::custom(format!(
                "cannot expand {value:?} without a home directory"
            )));
        };
        let rel = value.strip_prefix("~/").unwrap_or("");
        return Ok(home.join(rel));
    }

    let path = Path::new(value);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(config_dir.join(path))
    }
}
