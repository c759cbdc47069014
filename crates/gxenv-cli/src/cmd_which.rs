// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `gxenv which` command.

use clap::Args;

/// Find specified executable in an env
#[derive(Debug, Args)]
pub struct CmdWhich {
    /// Name of env
    env_name: String,

    /// Name of executable
    executable_name: String,
}

impl CmdWhich {
    pub fn run(&mut self, config: &gxenv::Config) -> gxenv::Result<i32> {
        gxenv::check_env_exists(config, &self.env_name)?;

        let found = gxenv::which(config, &self.env_name, &self.executable_name).ok_or_else(|| {
            gxenv::Error::ExecutableNotFound {
                executable: self.executable_name.clone(),
                env: self.env_name.clone(),
            }
        })?;

        println!("{}", found.display());
        Ok(0)
    }
}
