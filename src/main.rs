use std::{io, process};

use anyhow::Result;

use amconfig::{
    cmd::{Command, Outcome},
    config::Config,
    logging::Logger,
};

fn main() -> Result<()> {
    let command = Command::init();

    if command.logging {
        Logger::init()?;
    }

    let config = Config::load(command.config_load_option()?)?;

    let stdout = io::stdout();

    let outcome = command.subcommand.run(&config, &mut stdout.lock())?;

    if outcome == Outcome::Failure {
        process::exit(1);
    }

    Ok(())
}
