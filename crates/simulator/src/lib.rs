//! Queueing Simulator
//!
//! Batch front end built on top of the simulation engine. Runs a set of
//! `G/G/c/K` scenarios and renders their results.
//!
//! # Architecture
//!
//! The simulator builds on `queuesim-simulation` to provide:
//!
//! - **Configuration**: a base scenario plus the server counts to sweep
//! - **Batch runs**: every scenario gets its own freshly seeded stream
//! - **Reporting**: plain-text and JSON renderings of each result
//!
//! # Example
//!
//! ```ignore
//! use queuesim_simulator::{Simulator, SimulatorConfig};
//!
//! // The reference pair: G/G/1/5 and G/G/2/5.
//! let simulator = Simulator::new(SimulatorConfig::default())?;
//! for report in simulator.run()? {
//!     println!("{report}");
//! }
//! ```

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimulatorConfig;
pub use report::{OutputFormat, ScenarioReport};
pub use runner::{Simulator, SimulatorError};
