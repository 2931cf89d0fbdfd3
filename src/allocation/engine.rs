//! The allocation engine.
//!
//! Slots are processed strictly in order because every decision depends on
//! streaks, pairing progress and assignment history built by earlier slots.
//! Each slot runs the same steps:
//!
//! 1. partition active workers into break, training and the available pool;
//! 2. reset rotation pairs at the top of the hour, open or not;
//! 3. gate on store hours;
//! 4. fill work stations in priority order, stopping at the first gap;
//! 5. backfill anyone still idle into any open station;
//! 6. reset runtime state of workers left without a station.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveTime;
use tracing::{debug, info};

use crate::models::{
    AllocationTrace, AssignmentRecord, AssignmentRule, OccupancyRecord, ScheduleOutcome,
    SlotActivity, Station, TimeSlot, Worker,
};
use crate::report::assemble;

use super::expander::{build_slots, expand_workers};
use super::pairing::StationPair;
use super::runtime::RuntimeBook;
use super::store_hours::StoreHours;
use super::strategy::{SelectionContext, strategies_for};

/// Who went where during one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAssignment {
    /// Work-station occupants.
    pub work: BTreeMap<Station, String>,
    /// Workers on break, sorted by name.
    pub on_break: Vec<String>,
    /// Workers in training, sorted by name.
    pub training: Vec<String>,
    /// Available workers left without a station, sorted by name.
    pub unassigned: Vec<String>,
}

impl SlotAssignment {
    /// Returns the station or category `worker` ended up in, if any.
    pub fn placement_of(&self, worker: &str) -> Option<Station> {
        if self.on_break.iter().any(|w| w == worker) {
            return Some(Station::Break);
        }
        if self.training.iter().any(|w| w == worker) {
            return Some(Station::Training);
        }
        self.work
            .iter()
            .find(|(_, w)| w.as_str() == worker)
            .map(|(station, _)| *station)
    }
}

/// Runs one schedule generation. All state is owned by the engine and
/// dropped with it.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    store_hours: StoreHours,
    runtime: RuntimeBook,
    pairs: Vec<StationPair>,
    trace: AllocationTrace,
}

impl AllocationEngine {
    /// Creates an engine with the standard rotation pairs.
    pub fn new(store_hours: StoreHours) -> Self {
        Self {
            store_hours,
            runtime: RuntimeBook::default(),
            pairs: StationPair::standard(),
            trace: AllocationTrace::default(),
        }
    }

    /// Allocates every slot covered by `records` and assembles the matrix.
    ///
    /// Returns [`ScheduleOutcome::NoData`] when there are no records.
    pub fn run(mut self, records: &[OccupancyRecord]) -> ScheduleOutcome {
        if records.is_empty() {
            info!("no worker contributed any slot");
            return ScheduleOutcome::NoData;
        }

        let slots = build_slots(records);
        let mut by_time: HashMap<NaiveTime, Vec<&OccupancyRecord>> = HashMap::new();
        for record in records {
            by_time.entry(record.time_of_day()).or_default().push(record);
        }

        let assignments: Vec<SlotAssignment> = slots
            .iter()
            .map(|slot| {
                let active = by_time.get(&slot.time).map_or(&[][..], Vec::as_slice);
                self.process_slot(slot, active)
            })
            .collect();

        info!(
            slots = slots.len(),
            records = records.len(),
            assignments = self.trace.records.len(),
            backfilled = self.trace.count_rule(AssignmentRule::Backfill),
            "schedule allocated"
        );

        ScheduleOutcome::Schedule {
            matrix: assemble(&slots, &assignments),
            trace: self.trace,
        }
    }

    /// Allocates a single slot given the records active in it.
    pub fn process_slot(&mut self, slot: &TimeSlot, active: &[&OccupancyRecord]) -> SlotAssignment {
        let mut assignment = SlotAssignment::default();
        let mut pool: Vec<String> = Vec::new();

        for record in active {
            match record.activity {
                SlotActivity::OnBreak => {
                    self.runtime.reset(&record.worker);
                    assignment.on_break.push(record.worker.clone());
                }
                SlotActivity::Training => {
                    self.runtime.reset(&record.worker);
                    assignment.training.push(record.worker.clone());
                }
                SlotActivity::Available => pool.push(record.worker.clone()),
            }
        }
        for names in [&mut assignment.on_break, &mut assignment.training, &mut pool] {
            names.sort();
            names.dedup();
        }
        // A name already on break or in training is not also available.
        pool.retain(|w| !assignment.on_break.contains(w) && !assignment.training.contains(w));

        if slot.is_top_of_hour() {
            self.pairs.iter_mut().for_each(StationPair::start_hour);
        }
        if self.store_hours.is_open(slot.time) {
            self.priority_pass(slot, &mut pool, &mut assignment);
            self.backfill(slot, &mut pool, &mut assignment);
            self.pairs.iter_mut().for_each(StationPair::finish_slot);
        } else {
            debug!(slot = %slot.label(), "store closed; no stations filled");
        }

        for worker in &pool {
            self.runtime.reset(worker);
        }
        assignment.unassigned = pool;

        debug!(
            slot = %slot.label(),
            filled = assignment.work.len(),
            on_break = assignment.on_break.len(),
            training = assignment.training.len(),
            unassigned = assignment.unassigned.len(),
            "slot allocated"
        );
        assignment
    }

    /// Fills stations in priority order. The first station nobody can take
    /// leaves every lower-priority station open for the backfill pass.
    fn priority_pass(
        &mut self,
        slot: &TimeSlot,
        pool: &mut Vec<String>,
        assignment: &mut SlotAssignment,
    ) {
        for station in Station::WORK_PRIORITY {
            match self.select_candidate(slot, station, pool) {
                Some((worker, rule)) => self.assign(slot, station, worker, rule, pool, assignment),
                None => {
                    debug!(
                        slot = %slot.label(),
                        station = %station,
                        "no candidate; lower-priority stations held open"
                    );
                    break;
                }
            }
        }
    }

    fn select_candidate(
        &mut self,
        slot: &TimeSlot,
        station: Station,
        pool: &[String],
    ) -> Option<(String, AssignmentRule)> {
        let pair_index = self.pairs.iter().position(|p| p.contains(station));
        let strategies = strategies_for(station, pair_index.map(|i| &self.pairs[i]));

        for strategy in strategies {
            if strategy.breaks_pair() {
                if let Some(i) = pair_index {
                    self.pairs[i].mark_broken();
                }
            }
            let ctx = SelectionContext {
                station,
                slot,
                pool,
                runtime: &self.runtime,
                pair: pair_index.map(|i| &self.pairs[i]),
            };
            if let Some(worker) = strategy.select(&ctx) {
                return Some((worker, strategy.rule()));
            }
        }
        None
    }

    /// Places idle workers, alphabetically, into the first open station
    /// the line-buster repeat rule allows.
    fn backfill(&mut self, slot: &TimeSlot, pool: &mut Vec<String>, assignment: &mut SlotAssignment) {
        let waiting = pool.clone();
        for worker in waiting {
            let open = Station::WORK_PRIORITY.into_iter().find(|s| {
                !assignment.work.contains_key(s) && !self.runtime.barred_from(&worker, *s)
            });
            if let Some(station) = open {
                self.assign(slot, station, worker, AssignmentRule::Backfill, pool, assignment);
            }
        }
    }

    fn assign(
        &mut self,
        slot: &TimeSlot,
        station: Station,
        worker: String,
        rule: AssignmentRule,
        pool: &mut Vec<String>,
        assignment: &mut SlotAssignment,
    ) {
        pool.retain(|w| *w != worker);
        self.runtime.record_assignment(&worker, station, slot.index);
        if let Some(pair) = self.pairs.iter_mut().find(|p| p.contains(station)) {
            pair.record(station, &worker, rule);
        }
        self.trace.push(AssignmentRecord {
            slot: slot.index,
            time: slot.time,
            station,
            worker: worker.clone(),
            rule,
        });
        assignment.work.insert(station, worker);
    }
}

/// Expands `workers` and allocates every slot of their combined shifts.
pub fn generate_schedule(workers: &[Worker], store_hours: &StoreHours) -> ScheduleOutcome {
    let records = expand_workers(workers);
    AllocationEngine::new(*store_hours).run(&records)
}
