//! Invariants checked event by event over randomized scenarios.
//!
//! Scenario parameters come from a seeded ChaCha8 RNG so failures are
//! reproducible.

use queuesim_simulation::{simulate, EventKind, Simulation, StepOutcome};
use queuesim_types::{ScenarioParameters, Termination};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPSILON: f64 = 1e-6;

fn random_scenario(rng: &mut ChaCha8Rng) -> ScenarioParameters {
    let servers = rng.gen_range(1..=4);
    let capacity = servers + rng.gen_range(0..=5);
    let arrival_min = rng.gen_range(0.0..3.0);
    let service_min = rng.gen_range(0.0..6.0);

    ScenarioParameters::new(servers, capacity)
        .with_first_arrival(rng.gen_range(0.0..5.0))
        .with_arrival(arrival_min, arrival_min + rng.gen_range(0.0..4.0))
        .with_service(service_min, service_min + rng.gen_range(0.0..4.0))
        .with_budget(rng.gen_range(1..3_000))
        .with_seed(rng.gen())
}

fn scenarios(count: usize) -> Vec<ScenarioParameters> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count).map(|_| random_scenario(&mut rng)).collect()
}

#[test]
fn test_occupancy_stays_within_bounds() {
    for params in scenarios(200) {
        let mut sim = Simulation::new(params.clone()).unwrap();
        while let StepOutcome::Processed(_) = sim.step().unwrap() {
            assert!(
                sim.occupancy() <= params.capacity,
                "occupancy {} exceeds capacity in {:?}",
                sim.occupancy(),
                params
            );
        }
    }
}

#[test]
fn test_dwell_times_sum_to_clock() {
    for params in scenarios(200) {
        let result = simulate(&params).unwrap();
        let accrued: f64 = result.time_in_state.iter().sum();
        assert!(
            (accrued - result.simulation_time).abs() <= EPSILON * result.simulation_time.max(1.0),
            "accrued {accrued} != clock {} in {:?}",
            result.simulation_time,
            params
        );
        assert_eq!(result.time_in_state.len(), params.num_states());
    }
}

#[test]
fn test_probabilities_sum_to_one_hundred() {
    for params in scenarios(200) {
        let result = simulate(&params).unwrap();
        if result.simulation_time > 0.0 {
            assert!((result.total_probability() - 100.0).abs() < EPSILON);
        } else {
            assert!(result.probabilities.iter().all(|&p| p == 0.0));
            assert_eq!(result.avg_population, 0.0);
        }
    }
}

#[test]
fn test_losses_only_on_full_arrivals() {
    for params in scenarios(200) {
        let mut sim = Simulation::new(params.clone()).unwrap();
        loop {
            let before_occupancy = sim.occupancy();
            let before_losses = sim.losses();
            match sim.step().unwrap() {
                StepOutcome::Processed(event) => {
                    let lost = sim.losses() - before_losses;
                    let expected =
                        event.kind == EventKind::Arrival && before_occupancy == params.capacity;
                    assert_eq!(lost, u64::from(expected), "event {event:?} in {params:?}");
                }
                StepOutcome::Halted(_) => break,
            }
        }
    }
}

#[test]
fn test_draw_and_event_bounds() {
    for params in scenarios(200) {
        let result = simulate(&params).unwrap();
        assert!(result.stats.draws <= params.budget);
        assert!(result.stats.events_processed <= 2 * params.budget);
        assert_eq!(
            result.stats.events_processed,
            result.stats.arrivals + result.stats.departures
        );
        if result.termination == Termination::BudgetExhausted {
            assert_eq!(result.stats.draws, params.budget);
        }
    }
}

#[test]
fn test_no_waiting_room_never_queues() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let servers = rng.gen_range(1..=3);
        let params = random_scenario(&mut rng)
            .with_servers(servers)
            .with_capacity(servers);

        let mut sim = Simulation::new(params.clone()).unwrap();
        loop {
            let full = sim.occupancy() == params.capacity;
            let before_losses = sim.losses();
            match sim.step().unwrap() {
                StepOutcome::Processed(event) if event.kind == EventKind::Arrival && full => {
                    assert_eq!(sim.losses(), before_losses + 1);
                    assert_eq!(sim.occupancy(), params.capacity);
                }
                StepOutcome::Processed(_) => {}
                StepOutcome::Halted(_) => break,
            }
            assert!(sim.occupancy() <= params.servers);
        }
    }
}

#[test]
fn test_truncation_only_on_interarrival_draw() {
    // A handler always starts with at least one draw left, and the service
    // draw is the first draw of both handlers, so only the interarrival draw
    // of an arrival that just started service can fail.
    let mut truncated = 0;
    for params in scenarios(300) {
        let mut sim = Simulation::new(params.clone()).unwrap();
        loop {
            let before = sim.occupancy();
            let pending = sim.pending_events();
            match sim.step().unwrap() {
                StepOutcome::Processed(event) => {
                    if sim.termination() != Some(Termination::TruncatedTransition) {
                        continue;
                    }
                    truncated += 1;
                    assert_eq!(event.kind, EventKind::Arrival, "{params:?}");
                    assert_eq!(sim.clock(), event.time);
                    assert_eq!(sim.occupancy(), before + 1);
                    assert!(sim.occupancy() <= params.servers);
                    // The arrival was popped and only its departure was pushed.
                    assert_eq!(sim.pending_events(), pending);
                    assert_eq!(sim.remaining_draws(), 0);
                }
                StepOutcome::Halted(_) => break,
            }
        }
    }
    assert!(truncated > 0, "sweep never hit a truncated transition");
}
