//! Error types for scenario validation.

use thiserror::Error;

/// Reasons a [`ScenarioParameters`](crate::ScenarioParameters) is rejected
/// before a run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// At least one server is required.
    #[error("server count must be positive")]
    NoServers,

    /// The system must hold at least as many customers as it has servers.
    #[error("capacity {capacity} is below server count {servers}")]
    CapacityBelowServers {
        /// Configured server count.
        servers: u32,
        /// Configured capacity.
        capacity: u32,
    },

    /// First arrival must be a finite, non-negative time.
    #[error("invalid first arrival time: {0}")]
    InvalidFirstArrival(f64),

    /// Interarrival bounds are reversed, negative or non-finite.
    #[error("invalid arrival interval [{min}, {max}]")]
    InvalidArrivalInterval {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Service-time bounds are reversed, negative or non-finite.
    #[error("invalid service interval [{min}, {max}]")]
    InvalidServiceInterval {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A run needs at least one random draw.
    #[error("random draw budget must be positive")]
    ZeroBudget,

    /// Event times could grow past what `f64` represents within the budget.
    #[error("event times may overflow: worst-case horizon {horizon}")]
    HorizonOverflow {
        /// `first_arrival + budget * longest interval bound`.
        horizon: f64,
    },
}
