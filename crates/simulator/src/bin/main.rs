//! Queueing Simulator CLI
//!
//! Run deterministic `G/G/c/K` queue simulations and print their reports.
//!
//! # Example
//!
//! ```bash
//! # The reference pair, G/G/1/5 and G/G/2/5
//! queuesim
//!
//! # Sweep 1..4 servers with a larger waiting room, as JSON
//! queuesim --servers 1,2,3,4 --capacity 10 --format json
//!
//! # Run with a random seed
//! queuesim --random-seed
//! ```

use clap::Parser;
use queuesim_simulator::report::render;
use queuesim_simulator::{OutputFormat, Simulator, SimulatorConfig};
use queuesim_types::ScenarioParameters;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Queueing Simulator
///
/// Runs deterministic discrete-event simulations of finite-capacity,
/// multi-server queues. Reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "queuesim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Server counts to simulate, one scenario each
    #[arg(short = 's', long, value_delimiter = ',', default_values_t = [1u32, 2])]
    servers: Vec<u32>,

    /// Maximum customers in the system (in service plus waiting)
    #[arg(short = 'k', long, default_value = "5")]
    capacity: u32,

    /// Time of the first arrival
    #[arg(long, default_value = "2.0")]
    first_arrival: f64,

    /// Minimum interarrival time
    #[arg(long, default_value = "2.0")]
    arrival_min: f64,

    /// Maximum interarrival time
    #[arg(long, default_value = "5.0")]
    arrival_max: f64,

    /// Minimum service time
    #[arg(long, default_value = "3.0")]
    service_min: f64,

    /// Maximum service time
    #[arg(long, default_value = "5.0")]
    service_max: f64,

    /// Number of random draws each run may consume
    #[arg(short = 'b', long, default_value = "100000")]
    budget: u64,

    /// Seed of the random stream
    #[arg(long, default_value = "12345", conflicts_with = "random_seed")]
    seed: u64,

    /// Use a random seed instead of --seed
    #[arg(long)]
    random_seed: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,queuesim_simulator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = if args.random_seed {
        rand::random()
    } else {
        args.seed
    };

    info!(
        servers = ?args.servers,
        capacity = args.capacity,
        budget = args.budget,
        seed,
        "Starting simulation batch"
    );

    let base = ScenarioParameters::new(1, args.capacity)
        .with_first_arrival(args.first_arrival)
        .with_arrival(args.arrival_min, args.arrival_max)
        .with_service(args.service_min, args.service_max)
        .with_budget(args.budget)
        .with_seed(seed);
    let config = SimulatorConfig::new(base).with_server_counts(args.servers);

    let output = Simulator::new(config)
        .and_then(|simulator| simulator.run())
        .and_then(|reports| render(&reports, args.format));

    match output {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
