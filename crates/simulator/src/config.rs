//! Configuration types for the simulator.

use queuesim_types::{ParameterError, ScenarioParameters};

/// Configuration for a batch of runs.
///
/// Every server count in `server_counts` produces one scenario that shares
/// all other parameters with `base`.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Parameters shared by every scenario.
    pub base: ScenarioParameters,

    /// Server count of each scenario, in run order.
    pub server_counts: Vec<u32>,
}

impl SimulatorConfig {
    /// Create a configuration running `base` once with its own server count.
    pub fn new(base: ScenarioParameters) -> Self {
        let server_counts = vec![base.servers];
        Self {
            base,
            server_counts,
        }
    }

    /// Set the server counts to sweep.
    pub fn with_server_counts(mut self, server_counts: Vec<u32>) -> Self {
        self.server_counts = server_counts;
        self
    }

    /// Set the capacity of every scenario.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.base.capacity = capacity;
        self
    }

    /// Set the random seed of every scenario.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base.seed = seed;
        self
    }

    /// Set the draw budget of every scenario.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.base.budget = budget;
        self
    }

    /// Expand into one parameter set per server count.
    pub fn scenarios(&self) -> Vec<ScenarioParameters> {
        self.server_counts
            .iter()
            .map(|&servers| self.base.clone().with_servers(servers))
            .collect()
    }

    /// Validate every scenario before anything runs.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.scenarios()
            .iter()
            .try_for_each(ScenarioParameters::validate)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(ScenarioParameters::new(1, 5)).with_server_counts(vec![1, 2])
    }
}
