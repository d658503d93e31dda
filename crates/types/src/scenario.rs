//! Scenario parameters for a single simulation run.

use crate::{ParameterError, SimTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[min, max]` that a uniform variate is scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound.
    pub min: SimTime,
    /// Upper bound.
    pub max: SimTime,
}

impl Interval {
    /// Create a new interval.
    pub const fn new(min: SimTime, max: SimTime) -> Self {
        Self { min, max }
    }

    /// Map a variate in `[0, 1)` onto the interval.
    pub fn scale(&self, variate: f64) -> SimTime {
        self.min + (self.max - self.min) * variate
    }

    /// Whether both bounds are finite, non-negative, and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ... {:?}", self.min, self.max)
    }
}

/// Kendall-notation descriptor of a queue, rendered as `G/G/c/K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueDescriptor {
    /// Number of parallel servers (`c`).
    pub servers: u32,
    /// Maximum customers in the system, in service or waiting (`K`).
    pub capacity: u32,
}

impl fmt::Display for QueueDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G/G/{}/{}", self.servers, self.capacity)
    }
}

/// Configuration for a single simulation run.
///
/// Immutable once handed to the engine. Defaults describe the reference
/// workload: first arrival at 2.0, interarrival times uniform in `[2, 5]`,
/// service times uniform in `[3, 5]`, a budget of 100 000 draws and seed 12345.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Number of servers.
    pub servers: u32,

    /// Maximum customers in the system, including those in service.
    pub capacity: u32,

    /// Time of the first arrival.
    pub first_arrival: SimTime,

    /// Bounds of the uniform interarrival time.
    pub arrival: Interval,

    /// Bounds of the uniform service time.
    pub service: Interval,

    /// Number of random draws the run may consume.
    pub budget: u64,

    /// Seed of the random stream.
    pub seed: u64,
}

impl ScenarioParameters {
    /// Create parameters for a `G/G/servers/capacity` queue with the
    /// reference workload.
    pub fn new(servers: u32, capacity: u32) -> Self {
        Self {
            servers,
            capacity,
            first_arrival: 2.0,
            arrival: Interval::new(2.0, 5.0),
            service: Interval::new(3.0, 5.0),
            budget: 100_000,
            seed: 12345,
        }
    }

    /// Set the server count.
    pub fn with_servers(mut self, servers: u32) -> Self {
        self.servers = servers;
        self
    }

    /// Set the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the time of the first arrival.
    pub fn with_first_arrival(mut self, time: SimTime) -> Self {
        self.first_arrival = time;
        self
    }

    /// Set the interarrival bounds.
    pub fn with_arrival(mut self, min: SimTime, max: SimTime) -> Self {
        self.arrival = Interval::new(min, max);
        self
    }

    /// Set the service-time bounds.
    pub fn with_service(mut self, min: SimTime, max: SimTime) -> Self {
        self.service = Interval::new(min, max);
        self
    }

    /// Set the random draw budget.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Kendall descriptor of this queue.
    pub fn descriptor(&self) -> QueueDescriptor {
        QueueDescriptor {
            servers: self.servers,
            capacity: self.capacity,
        }
    }

    /// Latest time any event can be scheduled at.
    ///
    /// Every draw schedules one event at most one interval bound after the
    /// current clock, so no event lands later than this.
    pub fn worst_case_horizon(&self) -> SimTime {
        let longest = self.arrival.max.max(self.service.max);
        self.first_arrival + self.budget as f64 * longest
    }

    /// Number of occupancy levels tracked, `0..=capacity`.
    pub fn num_states(&self) -> usize {
        self.capacity as usize + 1
    }

    /// Check the parameters before a run.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.servers == 0 {
            return Err(ParameterError::NoServers);
        }
        if self.capacity < self.servers {
            return Err(ParameterError::CapacityBelowServers {
                servers: self.servers,
                capacity: self.capacity,
            });
        }
        if !self.first_arrival.is_finite() || self.first_arrival < 0.0 {
            return Err(ParameterError::InvalidFirstArrival(self.first_arrival));
        }
        if !self.arrival.is_valid() {
            return Err(ParameterError::InvalidArrivalInterval {
                min: self.arrival.min,
                max: self.arrival.max,
            });
        }
        if !self.service.is_valid() {
            return Err(ParameterError::InvalidServiceInterval {
                min: self.service.min,
                max: self.service.max,
            });
        }
        if self.budget == 0 {
            return Err(ParameterError::ZeroBudget);
        }
        // Half of f64::MAX leaves room for rounding in the accumulated clock.
        let horizon = self.worst_case_horizon();
        if !horizon.is_finite() || horizon > f64::MAX / 2.0 {
            return Err(ParameterError::HorizonOverflow { horizon });
        }
        Ok(())
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::new(1, 5)
    }
}
