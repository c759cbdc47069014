// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! gxenv - Named Python Virtual Environment Manager
//!
//! This crate provides the core library for managing named Python virtual
//! environments that live side by side under a single base directory.
//!
//! # Overview
//!
//! Every environment is a plain directory at `<env_base>/<name>`, populated by
//! `python -m venv`. There is no registry: the directory listing under the
//! base directory is the set of environments, and every operation inspects
//! the filesystem afresh.
//!
//! # Example
//!
//! ```json
//! // /etc/gxenv/config.json or ~/.config/gxenv/config.json
//! {
//!     "env_base": "/var/lib/python3/envs",
//!     "python": "/usr/bin/python3"
//! }
//! ```
//!
//! ```no_run
//! let config = gxenv::Config::resolve()?;
//! gxenv::create_env(&config, "tools", &gxenv::VenvCreator::from_config(&config))?;
//! if let Some(pip) = gxenv::which(&config, "tools", "pip") {
//!     println!("{}", pip.display());
//! }
//! # Ok::<(), gxenv::Error>(())
//! ```

pub mod config;
pub mod create;
pub mod environment;
pub mod error;
pub mod list;
pub mod locate;
pub mod purge;
pub mod run;
#[cfg(test)]
mod test_utils;

pub use config::{Config, ConfigLoader};
pub use create::{EnvCreator, VenvCreator, create_env};
pub use environment::{EnvState, check_env_exists, env_path, env_state};
pub use error::{Error, RemovalFailure, RemovalOp, Result};
pub use list::list_envs;
pub use locate::which;
pub use purge::purge_env;
pub use run::{exec_command, prepare_run, run};

/// Environment variable that switches gxenv into hermetic test mode.
///
/// When set to any value, config files are ignored and the base directory
/// is forced to the platform temp directory.
pub const GXENV_TEST_VAR: &str = "GXENV_TEST";

/// Location of the system wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/gxenv/config.json";

/// Location of the user configuration file, relative to the home directory.
pub const USER_CONFIG_PATH: &str = ".config/gxenv/config.json";

/// Name of the executables directory inside an environment.
#[cfg(windows)]
pub const BIN_DIR: &str = "Scripts";

/// Name of the executables directory inside an environment.
#[cfg(not(windows))]
pub const BIN_DIR: &str = "bin";
