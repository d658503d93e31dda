//! Deterministic simulation runner.
//!
//! Drives one `G/G/c/K` run from its first arrival until the random stream
//! runs dry. Every transition is applied synchronously; there is no time
//! horizon, only the draw budget.

use crate::aggregate::{aggregate, AccruedTime};
use crate::event_queue::{Event, EventKind, EventQueue};
use crate::stream::{LcgStream, StreamExhausted};
use queuesim_types::{
    Interval, ParameterError, RunStats, ScenarioParameters, SimTime, SimulationResult, Termination,
};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors surfaced to the caller of a run.
///
/// Stream exhaustion is not among them: it ends the run normally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The scenario was rejected before the run started.
    #[error("invalid scenario parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// The scheduler ran dry while draws remained. The transition rules
    /// always keep an arrival pending, so this is an engine defect.
    #[error("event queue drained at t={clock} with {remaining} draws left")]
    EventQueueDrained {
        /// Clock when the queue was found empty.
        clock: SimTime,
        /// Draws still available.
        remaining: u64,
    },
}

/// Result of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The event was popped, its interval accrued and its transition applied.
    Processed(Event),
    /// The run is over; no event was processed.
    Halted(Termination),
}

/// One simulation run.
///
/// Owns its random stream, scheduler and state for the whole run. Given the
/// same parameters, produces identical results every time.
#[derive(Debug)]
pub struct Simulation {
    /// Scenario being simulated.
    params: ScenarioParameters,

    /// Random stream, reset from the scenario's seed and budget.
    stream: LcgStream,

    /// Pending arrivals and departures.
    queue: EventQueue,

    /// Time of the last processed event.
    clock: SimTime,

    /// Customers in the system, in service or waiting.
    occupancy: u32,

    /// Arrivals turned away at full capacity.
    losses: u64,

    /// Dwell time per occupancy level, `0..=capacity`.
    time_in_state: Vec<SimTime>,

    /// Statistics.
    stats: RunStats,

    /// Set once the run has stopped.
    termination: Option<Termination>,
}

impl Simulation {
    /// Validate `params` and prepare a run with the first arrival scheduled.
    pub fn new(params: ScenarioParameters) -> Result<Self, SimulationError> {
        params.validate()?;

        let stream = LcgStream::new(params.seed, params.budget);
        let mut queue = EventQueue::new();
        queue.schedule(params.first_arrival, EventKind::Arrival);
        let time_in_state = vec![0.0; params.num_states()];

        Ok(Self {
            params,
            stream,
            queue,
            clock: 0.0,
            occupancy: 0,
            losses: 0,
            time_in_state,
            stats: RunStats::default(),
            termination: None,
        })
    }

    /// Process the earliest pending event.
    ///
    /// Once the run has stopped, every further call returns
    /// [`StepOutcome::Halted`] with the same reason.
    pub fn step(&mut self) -> Result<StepOutcome, SimulationError> {
        if let Some(termination) = self.termination {
            return Ok(StepOutcome::Halted(termination));
        }
        if self.stream.is_exhausted() {
            return Ok(self.halt(Termination::BudgetExhausted));
        }

        let event = self
            .queue
            .pop_next()
            .map_err(|_| SimulationError::EventQueueDrained {
                clock: self.clock,
                remaining: self.stream.remaining(),
            })?;

        self.stats.events_processed += 1;
        self.time_in_state[self.occupancy as usize] += event.time - self.clock;
        self.clock = event.time;

        let handled = match event.kind {
            EventKind::Arrival => self.on_arrival(),
            EventKind::Departure => self.on_departure(),
        };

        trace!(
            time = event.time,
            kind = ?event.kind,
            occupancy = self.occupancy,
            losses = self.losses,
            "Processed event"
        );

        if handled.is_err() {
            self.halt(Termination::TruncatedTransition);
        }
        Ok(StepOutcome::Processed(event))
    }

    /// Run to completion and aggregate the result.
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        info!(
            queue = %self.params.descriptor(),
            seed = self.params.seed,
            budget = self.params.budget,
            "Starting simulation"
        );

        let termination = loop {
            if let StepOutcome::Halted(termination) = self.step()? {
                break termination;
            }
        };

        let result = self.finish(termination);
        info!(
            queue = %result.descriptor(),
            simulation_time = result.simulation_time,
            losses = result.losses,
            avg_population = result.avg_population,
            events = result.stats.events_processed,
            "Simulation finished"
        );
        Ok(result)
    }

    fn on_arrival(&mut self) -> Result<(), StreamExhausted> {
        self.stats.arrivals += 1;

        if self.occupancy < self.params.capacity {
            self.occupancy += 1;
            // A server is free: start service right away.
            if self.occupancy <= self.params.servers {
                self.schedule_departure()?;
            }
        } else {
            self.losses += 1;
        }

        let gap = self.sample(self.params.arrival)?;
        self.queue.schedule(self.clock + gap, EventKind::Arrival);
        Ok(())
    }

    fn on_departure(&mut self) -> Result<(), StreamExhausted> {
        debug_assert!(self.occupancy > 0, "departure from an empty system");
        self.stats.departures += 1;
        self.occupancy -= 1;

        // Someone was waiting; they take the freed server.
        if self.occupancy >= self.params.servers {
            self.schedule_departure()?;
        }
        Ok(())
    }

    fn schedule_departure(&mut self) -> Result<(), StreamExhausted> {
        let service = self.sample(self.params.service)?;
        self.queue
            .schedule(self.clock + service, EventKind::Departure);
        Ok(())
    }

    fn sample(&mut self, interval: Interval) -> Result<SimTime, StreamExhausted> {
        let variate = self.stream.draw()?;
        self.stats.draws += 1;
        Ok(interval.scale(variate))
    }

    fn halt(&mut self, termination: Termination) -> StepOutcome {
        debug!(
            clock = self.clock,
            ?termination,
            pending = self.queue.len(),
            "Simulation halted"
        );
        self.termination = Some(termination);
        StepOutcome::Halted(termination)
    }

    fn finish(self, termination: Termination) -> SimulationResult {
        let accrued = AccruedTime {
            time_in_state: self.time_in_state,
            clock: self.clock,
            losses: self.losses,
        };
        aggregate(self.params, accrued, self.stats, termination)
    }

    /// Scenario being simulated.
    pub fn parameters(&self) -> &ScenarioParameters {
        &self.params
    }

    /// Time of the last processed event.
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    /// Customers currently in the system.
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Arrivals lost so far.
    pub fn losses(&self) -> u64 {
        self.losses
    }

    /// Dwell time accrued per occupancy level so far.
    pub fn time_in_state(&self) -> &[SimTime] {
        &self.time_in_state
    }

    /// Counters so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Draws left in the stream.
    pub fn remaining_draws(&self) -> u64 {
        self.stream.remaining()
    }

    /// Events waiting in the scheduler.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Why the run stopped, once it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }
}

/// Run one scenario to completion with its own freshly seeded stream.
pub fn simulate(params: &ScenarioParameters) -> Result<SimulationResult, SimulationError> {
    Simulation::new(params.clone())?.run()
}
