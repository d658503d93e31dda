//! Turn accrued dwell times into occupancy statistics.

use queuesim_types::{RunStats, ScenarioParameters, SimTime, SimulationResult, Termination};

/// Raw quantities accrued by the engine over one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AccruedTime {
    /// Dwell time per occupancy level.
    pub time_in_state: Vec<SimTime>,
    /// Time of the last processed event.
    pub clock: SimTime,
    /// Rejected arrivals.
    pub losses: u64,
}

/// Percentage of `clock` spent in each state. All zero when `clock` is zero.
pub fn occupancy_probabilities(time_in_state: &[SimTime], clock: SimTime) -> Vec<f64> {
    time_in_state
        .iter()
        .map(|&t| if clock > 0.0 { t / clock * 100.0 } else { 0.0 })
        .collect()
}

/// Time-weighted mean occupancy. Zero when `clock` is zero.
pub fn mean_population(time_in_state: &[SimTime], clock: SimTime) -> f64 {
    if clock <= 0.0 {
        return 0.0;
    }
    time_in_state
        .iter()
        .enumerate()
        .map(|(level, &t)| level as f64 * (t / clock))
        .sum()
}

/// Build the result record for a finished run. Pure; no side effects.
pub fn aggregate(
    parameters: ScenarioParameters,
    accrued: AccruedTime,
    stats: RunStats,
    termination: Termination,
) -> SimulationResult {
    let probabilities = occupancy_probabilities(&accrued.time_in_state, accrued.clock);
    let avg_population = mean_population(&accrued.time_in_state, accrued.clock);

    SimulationResult {
        parameters,
        simulation_time: accrued.clock,
        time_in_state: accrued.time_in_state,
        probabilities,
        losses: accrued.losses,
        avg_population,
        stats,
        termination,
    }
}
