//! Rotation pairs.
//!
//! Two stations form a pair whose occupants swap at the half-hour mark,
//! giving one rotation-hour. A pair moves through three phases:
//!
//! - forming (`halves_done` 0 or 2): a top-of-hour slot may start a new pair;
//! - swapping (`halves_done` 1): the next slot swaps the two occupants;
//! - broken: ideal pairing is abandoned until the next top of the hour.
//!
//! A new pair is only recorded once both stations were started in the same
//! slot. One half starting on its own leaves the pair unformed. Every top of
//! the hour starts a fresh rotation-hour, so rotations follow clock hours.

use crate::models::{AssignmentRule, Station};

/// Rotation state for two paired stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPair {
    stations: [Station; 2],
    /// Who held `stations[0]` and `stations[1]` in the opening half.
    occupants: Option<[String; 2]>,
    halves_done: u8,
    broken: bool,
    started: [Option<String>; 2],
    swapped: [bool; 2],
}

impl StationPair {
    /// Creates an unformed pair.
    pub fn new(first: Station, second: Station) -> Self {
        Self {
            stations: [first, second],
            occupants: None,
            halves_done: 0,
            broken: false,
            started: [None, None],
            swapped: [false, false],
        }
    }

    /// The rota's two pairs: Handout with Line Buster 1, Line Buster 2 with Expo.
    pub fn standard() -> Vec<StationPair> {
        vec![
            StationPair::new(Station::Handout, Station::LineBuster1),
            StationPair::new(Station::LineBuster2, Station::Expo),
        ]
    }

    fn side(&self, station: Station) -> Option<usize> {
        self.stations.iter().position(|s| *s == station)
    }

    /// The two paired stations.
    pub fn stations(&self) -> [Station; 2] {
        self.stations
    }

    /// Returns true if `station` belongs to this pair.
    pub fn contains(&self, station: Station) -> bool {
        self.side(station).is_some()
    }

    /// Returns true once ideal pairing has been abandoned for the hour.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Half-hour slots of the current rotation-hour completed so far.
    pub fn halves_done(&self) -> u8 {
        self.halves_done
    }

    /// Opening-half occupants of the first and second station.
    pub fn occupants(&self) -> Option<(&str, &str)> {
        self.occupants
            .as_ref()
            .map(|[a, b]| (a.as_str(), b.as_str()))
    }

    /// Returns true while the pair waits for its half-hour swap.
    pub fn awaiting_swap(&self) -> bool {
        !self.broken && self.halves_done == 1 && self.occupants.is_some()
    }

    /// The worker due to take `station` in the swap: whoever held the other
    /// station in the opening half.
    pub fn swap_candidate(&self, station: Station) -> Option<&str> {
        if !self.awaiting_swap() {
            return None;
        }
        let side = self.side(station)?;
        self.occupants.as_ref().map(|o| o[1 - side].as_str())
    }

    /// Top-of-hour reset: clears the broken flag and forgets the last
    /// rotation-hour, including one still waiting for its swap.
    pub fn start_hour(&mut self) {
        self.broken = false;
        self.halves_done = 0;
        self.occupants = None;
        self.started = [None, None];
        self.swapped = [false, false];
    }

    /// Abandons ideal pairing until the next top of the hour. A rotation
    /// awaiting its swap is closed so it resets with the hour.
    pub fn mark_broken(&mut self) {
        self.broken = true;
        if self.halves_done == 1 {
            self.halves_done = 2;
        }
        self.started = [None, None];
        self.swapped = [false, false];
    }

    /// Notes an assignment to one of the pair's stations this slot.
    ///
    /// Only [`AssignmentRule::PairStart`] and [`AssignmentRule::PairSwap`]
    /// affect rotation state.
    pub fn record(&mut self, station: Station, worker: &str, rule: AssignmentRule) {
        if self.broken {
            return;
        }
        let Some(side) = self.side(station) else {
            return;
        };
        match rule {
            AssignmentRule::PairStart => self.started[side] = Some(worker.to_string()),
            AssignmentRule::PairSwap => self.swapped[side] = true,
            _ => {}
        }
    }

    /// Settles the slot: confirms a new pair when both halves started, and
    /// completes or abandons a pending swap.
    pub fn finish_slot(&mut self) {
        if !self.broken {
            if self.halves_done == 1 {
                if self.swapped.iter().all(|s| *s) {
                    self.halves_done = 2;
                } else {
                    self.mark_broken();
                }
            } else if let [Some(first), Some(second)] = &self.started {
                self.occupants = Some([first.clone(), second.clone()]);
                self.halves_done = 1;
            }
        }
        self.started = [None, None];
        self.swapped = [false, false];
    }
}
