use crate::status::Status;
use std::collections::VecDeque;

/// Number of samples kept for the history chart.
pub const HISTORY_LEN: usize = 10;

/// Highest reading the sensor can report.
pub const MAX_VALUE: u8 = 100;

/// Rolling window of the most recent readings, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    samples:  VecDeque<u8>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples:  VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: u8) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<u8> {
        self.samples.back().copied()
    }

    /// Samples in chronological order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.samples.iter().copied()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_LEN)
    }
}

/// State owned by the Home screen for as long as it is mounted.
///
/// Created fresh on every visit and dropped on the way out, so nothing
/// carries over between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Latest reading (0 until the first tick).
    pub current: u8,
    /// Readings shown on the chart.
    pub history: History,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick.  Current value and history change together so a
    /// render never sees one without the other.
    pub fn record(&mut self, value: u8) {
        let value = value.min(MAX_VALUE);
        self.history.push(value);
        self.current = value;
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status::classify(self.current)
    }

    /// `true` once at least one reading has arrived.
    pub fn has_data(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_keeps_last_ten_in_order() {
        let mut history = History::default();
        for v in 1..=15 {
            history.push(v);
        }
        assert_eq!(history.len(), HISTORY_LEN);
        assert_eq!(history.iter().collect::<Vec<_>>(), (6..=15).collect::<Vec<_>>());
        assert_eq!(history.latest(), Some(15));
    }

    #[test]
    fn history_never_exceeds_capacity() {
        let mut history = History::new(3);
        for v in 0..50 {
            history.push(v);
            assert!(history.len() <= 3);
        }
    }

    #[test]
    fn zero_capacity_history_stays_empty() {
        let mut history = History::new(0);
        history.push(42);
        assert!(history.is_empty());
    }

    #[test]
    fn record_updates_current_and_history() {
        let mut state = HomeState::new();
        assert!(!state.has_data());

        state.record(12);
        state.record(88);

        assert!(state.has_data());
        assert_eq!(state.current, 88);
        assert_eq!(state.history.iter().collect::<Vec<_>>(), vec![12, 88]);
        assert_eq!(state.status(), Status::Danger);
    }

    #[test]
    fn record_clamps_out_of_range_values() {
        let mut state = HomeState::new();
        state.record(250);
        assert_eq!(state.current, MAX_VALUE);
        assert_eq!(state.history.latest(), Some(MAX_VALUE));
    }

    #[test]
    fn fresh_state_is_normal_and_empty() {
        let state = HomeState::new();
        assert_eq!(state.current, 0);
        assert_eq!(state.status(), Status::Normal);
        assert!(state.history.is_empty());
    }
}
