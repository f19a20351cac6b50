/* 3rd party libraries */
use clap::{Arg, Command};
use log::{info, warn};
use std::path::Path;

/* Custom libraries */
use console::Shell;
use simulation::Simulation;
use trace::TraceWriter;

/* Modules */
mod config;
mod console;
mod dispatcher;
mod elevator;
mod shared;
mod simulation;
mod trace;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::init();

    let matches = Command::new("elevator-sim")
        .about("Discrete-time simulation of a bank of elevators")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .value_name("PATH")
                .default_value("sim.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .value_name("N")
                .help("Number of floors (5-20), overrides the config file"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .value_name("N")
                .help("Number of elevators (1-5), overrides the config file"),
        )
        .arg(
            Arg::new("auto")
                .long("auto")
                .takes_value(true)
                .value_name("TICKS")
                .help("Run the given number of ticks non-interactively"),
        )
        .get_matches();

    // Load the configuration; CLI overrides are clamped the same way as
    // file values.
    let mut config = config::load_config(matches.value_of("config").unwrap());
    if let Some(value) = matches.value_of("floors") {
        match value.parse::<u8>() {
            Ok(n_floors) => config.building.n_floors = config::clamp_floors(n_floors),
            Err(_) => warn!("--floors {:?} is not a number, ignoring", value),
        }
    }
    if let Some(value) = matches.value_of("elevators") {
        match value.parse::<u8>() {
            Ok(n_elevators) => {
                config.building.n_elevators = config::clamp_elevators(n_elevators)
            }
            Err(_) => warn!("--elevators {:?} is not a number, ignoring", value),
        }
    }
    info!(
        "starting with {} floors, {} elevators, trace file {}",
        config.building.n_floors, config.building.n_elevators, config.trace.path
    );

    // Wire the core to its collaborators
    let sim = Simulation::new(&config.building);
    let trace = crate::unwrap_or_exit!(TraceWriter::create(Path::new(&config.trace.path)));
    let shell = Shell::new(sim, trace);

    match matches.value_of("auto") {
        Some(value) => {
            let ticks = crate::unwrap_or_exit!(value.parse::<u32>());
            shell.run_auto(ticks)
        }
        None => shell.run(),
    }
}
