/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command as Cli};
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::thread::Builder;
use thiserror::Error;

/* Custom libraries */
use elevator_dispatch::config;
use elevator_dispatch::dispatcher::{Command, Dispatcher};
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::{Direction, ElevatorController, ElevatorError, ElevatorSnapshot, Visit};

#[derive(Error, Debug)]
enum ArgError {
    #[error("invalid floor '{0}'")]
    InvalidFloor(String),

    #[error("invalid call '{0}', expected <floor>:<up|down>")]
    InvalidCall(String),

    #[error(transparent)]
    Direction(#[from] ElevatorError),
}

fn cli() -> Cli<'static> {
    Cli::new("elevator_dispatch")
        .about("Runs one dispatch sweep of a single elevator car")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("stop")
                .long("stop")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Stop request from inside the car, e.g. --stop 5"),
        )
        .arg(
            Arg::new("call")
                .long("call")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Landing call, e.g. --call 3:down"),
        )
}

fn parse_floor(raw: &str) -> Result<u8, ArgError> {
    raw.trim()
        .parse::<u8>()
        .map_err(|_| ArgError::InvalidFloor(raw.to_string()))
}

fn parse_call(raw: &str) -> Result<(u8, Direction), ArgError> {
    let (floor, direction) = raw
        .split_once(':')
        .ok_or_else(|| ArgError::InvalidCall(raw.to_string()))?;
    Ok((parse_floor(floor)?, direction.parse::<Direction>()?))
}

fn parse_commands(matches: &ArgMatches) -> Result<Vec<Command>, ArgError> {
    let mut commands = Vec::new();
    for raw in matches.values_of("stop").into_iter().flatten() {
        commands.push(Command::RequestStop(parse_floor(raw)?));
    }
    for raw in matches.values_of("call").into_iter().flatten() {
        let (floor, direction) = parse_call(raw)?;
        commands.push(Command::Call(floor, direction));
    }
    Ok(commands)
}

/* Main */
fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    let config_path = matches.value_of("config").unwrap_or("config.toml");

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(config_path));
    let mut commands = unwrap_or_exit!(parse_commands(&matches));
    commands.push(Command::Sweep);

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (visit_tx, visit_rx) = cbc::unbounded::<Visit>();
    let (state_tx, state_rx) = cbc::unbounded::<ElevatorSnapshot>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the dispatcher
    let dispatcher = Dispatcher::new(
        ElevatorController::from_config(&config.elevator),
        &config.dispatcher,
        command_rx,
        visit_tx,
        state_tx,
        terminate_rx,
    );
    let dispatcher_thread = Builder::new().name("dispatcher".into());
    let dispatcher_handle = unwrap_or_exit!(dispatcher_thread.spawn(move || dispatcher.run()));

    // Every command is answered with one snapshot
    let n_commands = commands.len();
    for command in commands {
        unwrap_or_exit!(command_tx.send(command));
    }
    let mut state = None;
    for _ in 0..n_commands {
        state = Some(unwrap_or_exit!(state_rx.recv()));
    }

    let visits: Vec<Visit> = visit_rx.try_iter().collect();
    for visit in &visits {
        info!("stopped at floor {} going {}", visit.floor, visit.direction);
    }

    if let Err(e) = terminate_tx.send(()) {
        warn!("dispatcher already stopped: {}", e);
    }
    if dispatcher_handle.join().is_err() {
        error!("dispatcher thread panicked");
        std::process::exit(1);
    }

    let report = serde_json::json!({
        "visits": visits,
        "state": state,
    });
    println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&report)));
}
