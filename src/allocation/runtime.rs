//! Per-worker runtime state carried from slot to slot.

use std::collections::HashMap;

use crate::models::Station;

/// What the engine remembers about one worker between slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerRuntime {
    /// Station held in the most recent slot, if any.
    pub current_station: Option<Station>,
    /// Consecutive slots spent on `current_station`.
    pub streak: u32,
    /// True if the most recent assignment was a line-buster station.
    pub line_buster_last: bool,
    last_assigned: HashMap<Station, usize>,
}

impl WorkerRuntime {
    /// Slot index of the worker's last assignment to `station`.
    pub fn last_assigned(&self, station: Station) -> Option<usize> {
        self.last_assigned.get(&station).copied()
    }

    /// Consecutive slots spent on `station` up to the previous slot.
    pub fn streak_at(&self, station: Station) -> u32 {
        if self.current_station == Some(station) {
            self.streak
        } else {
            0
        }
    }

    /// Returns true if the line-buster repeat rule bars `station`.
    pub fn barred_from(&self, station: Station) -> bool {
        station.is_line_buster() && self.line_buster_last
    }

    /// Records an assignment to `station` in slot `slot_index`.
    pub fn record_assignment(&mut self, station: Station, slot_index: usize) {
        self.line_buster_last = station.is_line_buster();
        if self.current_station == Some(station) {
            self.streak += 1;
        } else {
            self.current_station = Some(station);
            self.streak = 1;
        }
        self.last_assigned.insert(station, slot_index);
    }

    /// Clears the streak and repeat flag. Assignment history is kept.
    pub fn reset(&mut self) {
        self.current_station = None;
        self.streak = 0;
        self.line_buster_last = false;
    }
}

/// Runtime state for every worker seen during one run, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RuntimeBook {
    workers: HashMap<String, WorkerRuntime>,
}

impl RuntimeBook {
    /// Returns the state for `worker`, if the worker has been seen.
    pub fn get(&self, worker: &str) -> Option<&WorkerRuntime> {
        self.workers.get(worker)
    }

    /// See [`WorkerRuntime::last_assigned`]; `None` for unseen workers.
    pub fn last_assigned(&self, worker: &str, station: Station) -> Option<usize> {
        self.get(worker).and_then(|w| w.last_assigned(station))
    }

    /// See [`WorkerRuntime::streak_at`]; zero for unseen workers.
    pub fn streak_at(&self, worker: &str, station: Station) -> u32 {
        self.get(worker).map_or(0, |w| w.streak_at(station))
    }

    /// See [`WorkerRuntime::barred_from`]; false for unseen workers.
    pub fn barred_from(&self, worker: &str, station: Station) -> bool {
        self.get(worker).is_some_and(|w| w.barred_from(station))
    }

    /// Records an assignment, creating the worker's state on first use.
    pub fn record_assignment(&mut self, worker: &str, station: Station, slot_index: usize) {
        self.workers
            .entry(worker.to_string())
            .or_default()
            .record_assignment(station, slot_index);
    }

    /// Resets the worker's streak and repeat flag.
    pub fn reset(&mut self, worker: &str) {
        self.workers.entry(worker.to_string()).or_default().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_station_extends_streak() {
        let mut state = WorkerRuntime::default();
        state.record_assignment(Station::Conductor, 1);
        state.record_assignment(Station::Conductor, 2);
        assert_eq!(state.streak_at(Station::Conductor), 2);
        assert_eq!(state.streak_at(Station::Handout), 0);
        assert_eq!(state.last_assigned(Station::Conductor), Some(2));
    }

    #[test]
    fn test_new_station_restarts_streak() {
        let mut state = WorkerRuntime::default();
        state.record_assignment(Station::Conductor, 1);
        state.record_assignment(Station::Expo, 2);
        assert_eq!(state.current_station, Some(Station::Expo));
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_assigned(Station::Conductor), Some(1));
    }

    #[test]
    fn test_line_buster_flag_bars_every_line_buster() {
        let mut state = WorkerRuntime::default();
        state.record_assignment(Station::LineBuster2, 1);
        assert!(state.barred_from(Station::LineBuster1));
        assert!(state.barred_from(Station::LineBuster2));
        assert!(state.barred_from(Station::LineBuster3));
        assert!(!state.barred_from(Station::Handout));

        state.record_assignment(Station::Handout, 2);
        assert!(!state.barred_from(Station::LineBuster1));
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut state = WorkerRuntime::default();
        state.record_assignment(Station::LineBuster1, 3);
        state.reset();
        assert_eq!(state.current_station, None);
        assert_eq!(state.streak, 0);
        assert!(!state.line_buster_last);
        assert_eq!(state.last_assigned(Station::LineBuster1), Some(3));
    }

    #[test]
    fn test_book_defaults_for_unseen_workers() {
        let book = RuntimeBook::default();
        assert_eq!(book.streak_at("Ana B.", Station::Handout), 0);
        assert_eq!(book.last_assigned("Ana B.", Station::Handout), None);
        assert!(!book.barred_from("Ana B.", Station::LineBuster1));
    }

    #[test]
    fn test_book_records_per_worker() {
        let mut book = RuntimeBook::default();
        book.record_assignment("Ana B.", Station::LineBuster1, 1);
        book.record_assignment("Ben C.", Station::Handout, 1);
        assert!(book.barred_from("Ana B.", Station::LineBuster3));
        assert!(!book.barred_from("Ben C.", Station::LineBuster3));

        book.reset("Ana B.");
        assert!(!book.barred_from("Ana B.", Station::LineBuster3));
    }
}
