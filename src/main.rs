mod check_cmd;
mod cli;
mod config;
mod convert;
mod group_cmd;
mod index_cmd;
mod logging;
mod ordinal_cmd;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let format = convert::parse_format(cli.format.as_deref().unwrap_or(&config.output.format))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Check(args) => check_cmd::run(args, format, &mut out),
        Command::Index(args) => {
            let clock = convert::build_clock(&config.clock);
            index_cmd::run(args, clock.as_ref(), format, &mut out)
        }
        Command::Day(args) => ordinal_cmd::run_day(args, format, &mut out),
        Command::Period(args) => ordinal_cmd::run_period(args, format, &mut out),
        Command::Running(args) => ordinal_cmd::run_running(args, format, &mut out),
        Command::Group(args) => {
            let key = convert::parse_group_key(&config.group.key)?;
            group_cmd::run(args, key, format, &mut out)
        }
    }
}
