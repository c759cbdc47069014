// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for gxenv operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with gxenv Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during gxenv operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// No entry exists at the environment's path
    #[error("Specified env \"{0}\" does not exist")]
    #[diagnostic(
        code(gxenv::env_not_found),
        help("Create it with 'gxenv create' or check 'gxenv list'")
    )]
    EnvNotFound(String),

    /// Something other than a directory sits at the environment's path
    #[error("Non-directory file is at {0:?}")]
    #[diagnostic(
        code(gxenv::env_not_a_directory),
        help("Remove or rename the file before using this env name")
    )]
    EnvNotADirectory(PathBuf),

    /// Executable missing from the environment's bin directory
    #[error("Executable {executable} was not found in env {env}")]
    #[diagnostic(
        code(gxenv::executable_not_found),
        help("Install the package providing it, e.g. 'gxenv run {env} pip install ...'")
    )]
    ExecutableNotFound { executable: String, env: String },

    /// The environment creation mechanism failed
    #[error("Failed to create env \"{env}\" at {path:?}")]
    #[diagnostic(code(gxenv::create_failed))]
    CreateFailed {
        env: String,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// One or more entries could not be removed while purging
    #[error("Could not purge the env \"{env}\": {} entries could not be removed", .failures.len())]
    #[diagnostic(
        code(gxenv::purge_failed),
        help("Fix the reported entries and run 'gxenv purge {env}' again")
    )]
    PurgeFailed {
        env: String,
        #[related]
        failures: Vec<RemovalFailure>,
    },

    /// Invalid JSON in a config file
    #[error("Invalid config file {path:?}: {error}")]
    #[diagnostic(
        code(gxenv::invalid_config),
        help("The config must be a JSON object with a string 'env_base' field")
    )]
    InvalidConfig {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    /// Failed to read a config file that exists
    #[error("Failed to read config file: {path:?}")]
    #[diagnostic(code(gxenv::config_read_failed))]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Replacing the current process failed
    #[error("Failed to execute {path:?}")]
    #[diagnostic(code(gxenv::exec_failed))]
    ExecFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Glob pattern error passthrough
    #[error(transparent)]
    #[diagnostic(code(gxenv::pattern_error))]
    Pattern(#[from] glob::PatternError),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(gxenv::io_error))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit code the command line reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EnvNotFound(_) => 2,
            Self::EnvNotADirectory(_) => 3,
            Self::ExecutableNotFound { .. } => 4,
            Self::CreateFailed { .. } => 5,
            Self::PurgeFailed { .. } => 6,
            Self::InvalidConfig { .. } => 7,
            Self::ExecFailed { .. } => 126,
            Self::ConfigReadFailed { .. } | Self::Pattern(_) | Self::Io(_) => 1,
        }
    }
}

/// Filesystem operation that failed while purging an env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOp {
    /// Listing a directory's entries
    ReadDir,
    /// Unlinking a file or symlink
    RemoveFile,
    /// Removing an (emptied) directory
    RemoveDir,
}

impl std::fmt::Display for RemovalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDir => f.write_str("read_dir"),
            Self::RemoveFile => f.write_str("remove_file"),
            Self::RemoveDir => f.write_str("remove_dir"),
        }
    }
}

/// A single entry that could not be removed during a purge.
#[derive(Error, Diagnostic, Debug)]
#[error("{op} failed for {path:?}")]
#[diagnostic(code(gxenv::removal_failed))]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub op: RemovalOp,
    #[source]
    pub error: std::io::Error,
}
