//! Output record of a completed simulation run.

use crate::{QueueDescriptor, ScenarioParameters, SimTime};
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The draw budget was fully consumed between events.
    BudgetExhausted,
    /// A draw failed while an event was being handled. The event's state
    /// change was applied up to that draw and nothing further was scheduled.
    TruncatedTransition,
}

/// Counters collected during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Total events popped from the scheduler.
    pub events_processed: u64,
    /// Arrival events processed, accepted or lost.
    pub arrivals: u64,
    /// Departure events processed.
    pub departures: u64,
    /// Random variates consumed.
    pub draws: u64,
}

/// Time-weighted occupancy statistics for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Parameters the run was started with.
    pub parameters: ScenarioParameters,

    /// Time of the last processed event.
    pub simulation_time: SimTime,

    /// Cumulative dwell time per occupancy level, indexed `0..=capacity`.
    pub time_in_state: Vec<SimTime>,

    /// Share of simulated time spent in each occupancy level, in percent.
    pub probabilities: Vec<f64>,

    /// Arrivals rejected because the system was full.
    pub losses: u64,

    /// Time-weighted mean number of customers in the system.
    pub avg_population: f64,

    /// Event and draw counters.
    pub stats: RunStats,

    /// Why the run stopped.
    pub termination: Termination,
}

impl SimulationResult {
    /// Kendall descriptor of the simulated queue.
    pub fn descriptor(&self) -> QueueDescriptor {
        self.parameters.descriptor()
    }

    /// Sum of all per-state probabilities. Close to 100 whenever any time elapsed.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Fraction of arrivals that were lost.
    pub fn loss_rate(&self) -> f64 {
        if self.stats.arrivals == 0 {
            0.0
        } else {
            self.losses as f64 / self.stats.arrivals as f64
        }
    }
}
