// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `gxenv run` command.

use std::ffi::OsString;

use clap::Args;

/// Run an executable in an env
#[derive(Debug, Args)]
pub struct CmdRun {
    /// Name of env
    env_name: String,

    /// Name of executable
    executable_name: String,

    /// Arguments passed to the executable as-is
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl CmdRun {
    pub fn run(&mut self, config: &gxenv::Config) -> gxenv::Result<i32> {
        tracing::debug!("original argv: {:?}", std::env::args_os().collect::<Vec<_>>());

        let cmd = gxenv::prepare_run(config, &self.env_name, &self.executable_name, &self.args)?;
        tracing::info!("running {:?} from env {:?}", self.executable_name, self.env_name);
        gxenv::exec_command(cmd)
    }
}
