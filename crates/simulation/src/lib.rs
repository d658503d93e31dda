//! Deterministic queue simulation.
//!
//! This crate runs finite-capacity, multi-server queues (`G/G/c/K`) as a
//! discrete-event simulation. Given the same parameters, it produces
//! identical results every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Simulation                         │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     LcgStream (seed, remaining budget)             │ │
//! │  │     Supplies interarrival / service variates       │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     EventQueue (BTreeMap<EventKey, EventKind>)     │ │
//! │  │     Ordered by: time, sequence                     │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Arrival / departure transitions                │ │
//! │  │     accrue dwell time per occupancy level          │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     aggregate() → SimulationResult                 │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every run owns its own [`LcgStream`]; there is no shared generator state,
//! so scenarios can be run in any order, repeatedly, or on separate threads.

mod aggregate;
mod event_queue;
mod runner;
mod stream;

pub use aggregate::{aggregate, mean_population, occupancy_probabilities, AccruedTime};
pub use event_queue::{Event, EventKey, EventKind, EventQueue, EventQueueEmpty};
pub use runner::{simulate, Simulation, SimulationError, StepOutcome};
pub use stream::{LcgStream, StreamExhausted};
