//! Station model.
//!
//! Stations are the fixed positions of the rota: eight work stations filled
//! by the allocation loop, plus the Break and Training categories that only
//! collect workers who are off the line.

use serde::{Deserialize, Serialize};

/// A named position on the schedule.
///
/// # Example
///
/// ```
/// use station_rota::models::Station;
///
/// assert_eq!(Station::LineBuster1.label(), "Line Buster 1");
/// assert!(Station::LineBuster1.is_line_buster());
/// assert!(!Station::Break.is_work());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    /// Hands finished orders to customers.
    Handout,
    /// First rotating line-buster position.
    LineBuster1,
    /// Runs the line; held in two-slot stints.
    Conductor,
    /// Second rotating line-buster position.
    LineBuster2,
    /// Expedites orders.
    Expo,
    /// First drink station.
    DrinkMaker1,
    /// Second drink station.
    DrinkMaker2,
    /// Third rotating line-buster position.
    LineBuster3,
    /// Workers on their unpaid break.
    Break,
    /// Workers in off-line training.
    Training,
}

impl Station {
    /// Work stations in the order the priority pass fills them.
    pub const WORK_PRIORITY: [Station; 8] = [
        Station::Handout,
        Station::LineBuster1,
        Station::Conductor,
        Station::LineBuster2,
        Station::Expo,
        Station::DrinkMaker1,
        Station::DrinkMaker2,
        Station::LineBuster3,
    ];

    /// Row order of the rendered schedule; Break and Training always last.
    pub const DISPLAY_ORDER: [Station; 10] = [
        Station::Handout,
        Station::LineBuster1,
        Station::Conductor,
        Station::LineBuster2,
        Station::Expo,
        Station::DrinkMaker1,
        Station::DrinkMaker2,
        Station::LineBuster3,
        Station::Break,
        Station::Training,
    ];

    /// Returns true for the three line-buster stations.
    pub fn is_line_buster(self) -> bool {
        matches!(
            self,
            Station::LineBuster1 | Station::LineBuster2 | Station::LineBuster3
        )
    }

    /// Returns true for stations filled by the allocation loop.
    pub fn is_work(self) -> bool {
        !matches!(self, Station::Break | Station::Training)
    }

    /// The row label used in the rendered schedule.
    pub fn label(self) -> &'static str {
        match self {
            Station::Handout => "Handout",
            Station::LineBuster1 => "Line Buster 1",
            Station::Conductor => "Conductor",
            Station::LineBuster2 => "Line Buster 2",
            Station::Expo => "Expo",
            Station::DrinkMaker1 => "Drink Maker 1",
            Station::DrinkMaker2 => "Drink Maker 2",
            Station::LineBuster3 => "Line Buster 3",
            Station::Break => "Break",
            Station::Training => "Training",
        }
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
