// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! gxenv - Named Python Virtual Environment Manager CLI

use clap::{Parser, Subcommand};

mod cmd_create;
mod cmd_list;
mod cmd_purge;
mod cmd_run;
mod cmd_which;

use cmd_create::CmdCreate;
use cmd_list::CmdList;
use cmd_purge::CmdPurge;
use cmd_run::CmdRun;
use cmd_which::CmdWhich;

#[derive(Parser)]
#[clap(
    name = "gxenv",
    about = "gxenv - a GX-flavored venv wrapper",
    version,
    long_about = "Create, list, purge and run named Python virtual environments kept under one base directory"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create an env
    Create(CmdCreate),

    /// List envs
    List(CmdList),

    /// Delete an env
    Purge(CmdPurge),

    /// Find specified executable in an env
    Which(CmdWhich),

    /// Run an executable in an env
    Run(CmdRun),
}

impl Opt {
    fn run(self) -> gxenv::Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        let config = gxenv::Config::resolve()?;

        // Dispatch to command
        match self.cmd {
            Command::Create(mut cmd) => cmd.run(&config),
            Command::List(mut cmd) => cmd.run(&config),
            Command::Purge(mut cmd) => cmd.run(&config),
            Command::Which(mut cmd) => cmd.run(&config),
            Command::Run(mut cmd) => cmd.run(&config),
        }
    }
}

fn main() {
    let opt = Opt::parse();
    let code = match opt.run() {
        Ok(code) => code,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };
    std::process::exit(code);
}
