// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `gxenv purge` command.

use clap::Args;

/// Delete an env
#[derive(Debug, Args)]
pub struct CmdPurge {
    /// Name of env
    env_name: String,

    /// Do not fail if the env does not exist
    #[clap(short, long)]
    force: bool,
}

impl CmdPurge {
    pub fn run(&mut self, config: &gxenv::Config) -> gxenv::Result<i32> {
        gxenv::purge_env(config, &self.env_name, self.force)?;
        Ok(0)
    }
}
