//! Core types for the queueing simulator.
//!
//! This crate provides the foundational types shared by the simulation engine
//! and the reporting front end:
//!
//! - **Scenario inputs**: ScenarioParameters, Interval, QueueDescriptor
//! - **Run outputs**: SimulationResult, RunStats, Termination
//! - **Errors**: ParameterError
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies. It does not depend on
//! any other workspace crates, making it the foundation layer.

mod error;
mod result;
mod scenario;

pub use error::ParameterError;
pub use result::{RunStats, SimulationResult, Termination};
pub use scenario::{Interval, QueueDescriptor, ScenarioParameters};

/// Simulated time, in the same unit as the scenario's interval bounds.
pub type SimTime = f64;
