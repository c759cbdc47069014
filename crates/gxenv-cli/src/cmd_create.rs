// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `gxenv create` command.

use clap::Args;

/// Create an env
#[derive(Debug, Args)]
pub struct CmdCreate {
    /// Name of new env
    env_name: String,
}

impl CmdCreate {
    pub fn run(&mut self, config: &gxenv::Config) -> gxenv::Result<i32> {
        let creator = gxenv::VenvCreator::from_config(config);
        gxenv::create_env(config, &self.env_name, &creator)?;
        Ok(0)
    }
}
