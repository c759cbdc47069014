// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Running executables from an env.
//!
//! On unix the current process is replaced (`execv`), so the program keeps
//! this process's id, standard streams, controlling terminal and
//! environment. Elsewhere the program runs as a child with inherited stdio
//! and its exit code is passed through.

use std::ffi::OsStr;
use std::process::Command;

use crate::Config;
use crate::environment::check_env_exists;
use crate::locate::which;

#[cfg(test)]
#[path = "./run_test.rs"]
mod run_test;

/// Build the command that runs `executable_name` from the named env.
///
/// The env must exist and contain the executable. `args` are the
/// arguments after the program name; argv[0] is the located path.
pub fn prepare_run<I, S>(
    config: &Config,
    env_name: &str,
    executable_name: &str,
    args: I,
) -> crate::Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!("executable_name: {executable_name:?}");

    check_env_exists(config, env_name)?;
    let found =
        which(config, env_name, executable_name).ok_or_else(|| crate::Error::ExecutableNotFound {
            executable: executable_name.to_string(),
            env: env_name.to_string(),
        })?;

    let mut cmd = Command::new(&found);
    cmd.args(args);

    tracing::debug!("new argv: {cmd:?}");
    Ok(cmd)
}

/// Hand this process over to `cmd`.
///
/// On unix this only returns if the exec itself failed. Elsewhere it
/// returns the child's exit code once it finishes.
pub fn exec_command(mut cmd: Command) -> crate::Result<i32> {
    let path = std::path::PathBuf::from(cmd.get_program());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        let error = cmd.exec();
        Err(crate::Error::ExecFailed { path, error })
    }

    #[cfg(not(unix))]
    {
        let status = cmd
            .status()
            .map_err(|error| crate::Error::ExecFailed { path, error })?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Run `executable_name` from the named env in place of this process.
pub fn run<I, S>(
    config: &Config,
    env_name: &str,
    executable_name: &str,
    args: I,
) -> crate::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let cmd = prepare_run(config, env_name, executable_name, args)?;
    exec_command(cmd)
}
