//! Bounded in-memory event history.

use std::collections::VecDeque;

use skyfleet_types::Event;

/// Default ring capacity for a session's event history.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// A fixed-capacity ring of events; the oldest entries fall off first.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<Event>,
    capacity: usize,
}

impl EventLog {
    /// Create a log holding at most `capacity` events. A zero capacity
    /// is bumped to one so pushes never panic.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event, evicting the oldest when full.
    pub fn push(&mut self, event: Event) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    /// The most recent `n` events, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Event> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Number of events currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no events.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use skyfleet_types::{EventType, Vec2};

    use super::*;

    fn event(ts: f64) -> Event {
        Event {
            ts,
            event_type: EventType::ZoneEntry,
            drone_id: "D1".to_owned(),
            pos: Vec2::new(0.0, 0.0),
            message: String::new(),
            payload: serde_json::Value::Null,
            severity: 0.5,
            confidence: 0.6,
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.push(event(f64::from(i)));
        }
        assert_eq!(log.len(), 3);
        let recent = log.recent(10);
        assert_eq!(recent.first().map(|e| e.ts), Some(2.0));
        assert_eq!(recent.last().map(|e| e.ts), Some(4.0));
    }

    #[test]
    fn recent_returns_tail_oldest_first() {
        let mut log = EventLog::default();
        for i in 0..10 {
            log.push(event(f64::from(i)));
        }
        let recent = log.recent(3);
        let ts: Vec<f64> = recent.iter().map(|e| e.ts).collect();
        assert_eq!(ts, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn zero_capacity_still_retains_latest() {
        let mut log = EventLog::new(0);
        log.push(event(1.0));
        log.push(event(2.0));
        assert_eq!(log.recent(5).last().map(|e| e.ts), Some(2.0));
    }
}
