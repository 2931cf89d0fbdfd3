//! Schedule output models.
//!
//! This module contains the [`ScheduleMatrix`] produced by the report
//! assembler, the [`AllocationTrace`] recording every work-station decision,
//! and the [`ScheduleOutcome`] returned to callers.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Station;

/// Returned in place of a table when no worker contributes any slot.
pub const NO_DATA_SENTINEL: &str = "No employee slots generated from input.";

/// The selection rule that placed a worker on a work station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRule {
    /// Second slot of a two-slot Conductor stint.
    ConductorContinuation,
    /// A new Conductor stint.
    ConductorStart,
    /// Half-hour swap inside a formed rotation pair.
    PairSwap,
    /// First half of a new rotation pair.
    PairStart,
    /// Least-recently-used pick after the pair broke for the hour.
    BrokenPair,
    /// Least-recently-used pick for an unpaired station.
    LeastRecentlyUsed,
    /// Placed by the backfill pass.
    Backfill,
}

/// One work-station decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Sequence index of the slot.
    pub slot: usize,
    /// Time of day of the slot.
    pub time: NaiveTime,
    /// The station filled.
    pub station: Station,
    /// The worker placed.
    pub worker: String,
    /// The rule that chose the worker.
    pub rule: AssignmentRule,
}

/// Every work-station decision of one run, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTrace {
    /// The recorded decisions.
    pub records: Vec<AssignmentRecord>,
}

impl AllocationTrace {
    /// Appends a decision.
    pub fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    /// Decisions made during the slot with the given sequence index.
    pub fn for_slot(&self, slot: usize) -> impl Iterator<Item = &AssignmentRecord> {
        self.records.iter().filter(move |r| r.slot == slot)
    }

    /// Number of decisions made by `rule`.
    pub fn count_rule(&self, rule: AssignmentRule) -> usize {
        self.records.iter().filter(|r| r.rule == rule).count()
    }
}

/// One station row of the schedule matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// The station for this row.
    pub station: Station,
    /// One cell per column; empty string for an empty cell.
    pub cells: Vec<String>,
}

/// Station-by-time matrix: rows in display order, columns in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMatrix {
    /// Column labels, e.g. `9:00 AM`.
    pub columns: Vec<String>,
    /// Rows in [`Station::DISPLAY_ORDER`].
    pub rows: Vec<MatrixRow>,
}

impl ScheduleMatrix {
    /// Returns the row for `station`.
    pub fn row(&self, station: Station) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.station == station)
    }

    /// Returns the cell for `station` under the column labelled `column`.
    ///
    /// # Example
    ///
    /// ```
    /// use station_rota::models::{MatrixRow, ScheduleMatrix, Station};
    ///
    /// let matrix = ScheduleMatrix {
    ///     columns: vec!["9:00 AM".to_string()],
    ///     rows: vec![MatrixRow { station: Station::Handout, cells: vec!["Jane D.".to_string()] }],
    /// };
    /// assert_eq!(matrix.cell(Station::Handout, "9:00 AM"), Some("Jane D."));
    /// assert_eq!(matrix.cell(Station::Handout, "9:30 AM"), None);
    /// ```
    pub fn cell(&self, station: Station, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.row(station)
            .and_then(|r| r.cells.get(col))
            .map(String::as_str)
    }
}

/// The result of one schedule-generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScheduleOutcome {
    /// A schedule was produced.
    Schedule {
        /// The station-by-time matrix.
        matrix: ScheduleMatrix,
        /// How each work station was filled.
        trace: AllocationTrace,
    },
    /// No worker contributed any slot.
    NoData,
}

impl ScheduleOutcome {
    /// Returns the matrix, if a schedule was produced.
    pub fn matrix(&self) -> Option<&ScheduleMatrix> {
        match self {
            ScheduleOutcome::Schedule { matrix, .. } => Some(matrix),
            ScheduleOutcome::NoData => None,
        }
    }

    /// Returns the allocation trace, if a schedule was produced.
    pub fn trace(&self) -> Option<&AllocationTrace> {
        match self {
            ScheduleOutcome::Schedule { trace, .. } => Some(trace),
            ScheduleOutcome::NoData => None,
        }
    }
}
