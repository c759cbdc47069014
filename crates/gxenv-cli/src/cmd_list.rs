// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `gxenv list` command.

use clap::Args;

/// List envs
#[derive(Debug, Args)]
pub struct CmdList {}

impl CmdList {
    pub fn run(&mut self, config: &gxenv::Config) -> gxenv::Result<i32> {
        for env in gxenv::list_envs(config)? {
            println!("{}", env.display());
        }
        Ok(0)
    }
}
