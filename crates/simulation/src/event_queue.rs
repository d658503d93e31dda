//! Event queue with deterministic ordering.

use queuesim_types::SimTime;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

/// What happens at an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A customer reaches the system.
    Arrival,
    /// A customer finishes service and leaves.
    Departure,
}

/// A scheduled event, popped from the queue in time order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// When the event fires.
    pub time: SimTime,
    /// What the event does.
    pub kind: EventKind,
}

/// Key for ordering events in the queue.
///
/// Events are ordered by:
/// 1. Time (earlier first)
/// 2. Sequence number (FIFO for equal times)
#[derive(Debug, Clone, Copy)]
pub struct EventKey {
    /// When this event should be processed.
    pub time: SimTime,
    /// Sequence number for deterministic FIFO ordering.
    pub sequence: u64,
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventKey {}

impl Ord for EventKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Order by time first
        match self.time.total_cmp(&other.time) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Then by sequence (FIFO)
        self.sequence.cmp(&other.sequence)
    }
}

impl PartialOrd for EventKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Popped from an empty [`EventQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event queue is empty")]
pub struct EventQueueEmpty;

/// Pending events, ordered by time and then insertion order.
///
/// Events are never modified once scheduled, only removed.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: BTreeMap<EventKey, EventKind>,
    sequence: u64,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event at `time`. O(log n).
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> EventKey {
        debug_assert!(time.is_finite(), "event time must be finite: {time}");
        let key = EventKey {
            time,
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.events.insert(key, kind);
        key
    }

    /// Remove and return the earliest event.
    pub fn pop_next(&mut self) -> Result<Event, EventQueueEmpty> {
        self.events
            .pop_first()
            .map(|(key, kind)| Event {
                time: key.time,
                kind,
            })
            .ok_or(EventQueueEmpty)
    }

    /// Time of the earliest pending event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.events.first_key_value().map(|(key, _)| key.time)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_ordering() {
        let earlier = EventKey {
            time: 1.0,
            sequence: 2,
        };
        let later = EventKey {
            time: 2.0,
            sequence: 1,
        };
        assert!(earlier < later);
    }

    #[test]
    fn test_sequence_breaks_ties() {
        let first = EventKey {
            time: 3.5,
            sequence: 1,
        };
        let second = EventKey {
            time: 3.5,
            sequence: 2,
        };
        assert!(first < second, "Earlier insertion should process first");
    }

    #[test]
    fn test_pops_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(5.0, EventKind::Departure);
        queue.schedule(2.0, EventKind::Arrival);
        queue.schedule(3.0, EventKind::Departure);

        let times: Vec<SimTime> = std::iter::from_fn(|| queue.pop_next().ok())
            .map(|e| e.time)
            .collect();
        assert_eq!(times, vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_equal_times_pop_in_insertion_order() {
        let mut queue = EventQueue::new();
        queue.schedule(4.0, EventKind::Departure);
        queue.schedule(4.0, EventKind::Arrival);
        queue.schedule(4.0, EventKind::Departure);

        assert_eq!(queue.pop_next().unwrap().kind, EventKind::Departure);
        assert_eq!(queue.pop_next().unwrap().kind, EventKind::Arrival);
        assert_eq!(queue.pop_next().unwrap().kind, EventKind::Departure);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_time(), None);
        assert_eq!(queue.pop_next(), Err(EventQueueEmpty));

        queue.schedule(1.0, EventKind::Arrival);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_time(), Some(1.0));
        assert!(queue.pop_next().is_ok());
        assert_eq!(queue.pop_next(), Err(EventQueueEmpty));
    }

    #[test]
    fn test_many_pending_events() {
        let mut queue = EventQueue::new();
        for i in (0..10_000).rev() {
            queue.schedule(i as f64, EventKind::Arrival);
        }
        assert_eq!(queue.len(), 10_000);

        let mut last = f64::NEG_INFINITY;
        while let Ok(event) = queue.pop_next() {
            assert!(event.time >= last);
            last = event.time;
        }
    }
}
