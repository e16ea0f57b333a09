use std::error::Error;

use clap::Parser;
use sched_model::{SimError, config::Cli, dispatch, logging};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_tracing();

    match dispatch::run(&cli.algorithm, cli.jobs()) {
        Ok(schedule) => print!("{schedule}"),
        // Reported, but not a failure
        Err(SimError::UnknownAlgorithm(_)) => println!("Unknown scheduling algorithm."),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
