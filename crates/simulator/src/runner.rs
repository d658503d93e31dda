//! Batch runner over the configured scenarios.

use crate::config::SimulatorConfig;
use crate::report::ScenarioReport;
use queuesim_simulation::{simulate, SimulationError};
use queuesim_types::ParameterError;
use thiserror::Error;
use tracing::info;

/// Errors from the simulator front end.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// A configured scenario is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ParameterError),

    /// A run failed.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// Reports could not be serialized.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Runs every scenario of a [`SimulatorConfig`] in order.
///
/// Each scenario is simulated with its own freshly seeded stream, so results
/// do not depend on which scenarios ran before.
#[derive(Debug)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Validate the configuration and create a simulator.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this simulator runs.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run every scenario and collect their reports.
    pub fn run(&self) -> Result<Vec<ScenarioReport>, SimulatorError> {
        let scenarios = self.config.scenarios();
        info!(count = scenarios.len(), "Running scenarios");

        scenarios
            .iter()
            .map(|params| -> Result<ScenarioReport, SimulatorError> {
                let report = ScenarioReport::new(simulate(params)?);
                info!(
                    queue = %report.label,
                    losses = report.result.losses,
                    simulation_time = report.result.simulation_time,
                    "Scenario complete"
                );
                Ok(report)
            })
            .collect()
    }
}
