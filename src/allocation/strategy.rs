//! Candidate-selection strategies.
//!
//! Each station is filled by trying an ordered list of strategies; the
//! first one to return a worker wins. Strategies only read state, so the
//! engine applies any side effect (breaking a pair) itself.

use crate::models::{AssignmentRule, Station, TimeSlot};

use super::pairing::StationPair;
use super::runtime::RuntimeBook;

/// Everything a strategy may look at when choosing a worker.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// The station being filled.
    pub station: Station,
    /// The slot being processed.
    pub slot: &'a TimeSlot,
    /// Unassigned available workers, sorted by name.
    pub pool: &'a [String],
    /// Runtime state as of the previous slot plus this slot's assignments.
    pub runtime: &'a RuntimeBook,
    /// The rotation pair the station belongs to, if any.
    pub pair: Option<&'a StationPair>,
}

/// One way of choosing a worker for a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Keep a worker who has held Conductor for exactly one slot.
    ConductorContinuation,
    /// Start a new Conductor stint; unless `any_minute`, only on the hour.
    ConductorStart {
        /// Allow a start on the half hour.
        any_minute: bool,
    },
    /// Give the station to the pair occupant who has not held it this hour.
    PairSwap,
    /// Start one half of a new pair; only on the hour.
    PairStart,
    /// Least-recently-used pick after abandoning ideal pairing.
    BrokenPair,
    /// Least-recently-used pick for an unpaired station.
    LeastRecentlyUsed,
}

/// The ordered strategies for `station`, most preferred first.
///
/// # Example
///
/// ```
/// use station_rota::allocation::{Strategy, strategies_for};
/// use station_rota::models::Station;
///
/// assert_eq!(strategies_for(Station::Expo, None), vec![Strategy::LeastRecentlyUsed]);
/// ```
pub fn strategies_for(station: Station, pair: Option<&StationPair>) -> Vec<Strategy> {
    if station == Station::Conductor {
        return vec![
            Strategy::ConductorContinuation,
            Strategy::ConductorStart { any_minute: false },
            Strategy::ConductorStart { any_minute: true },
        ];
    }
    match pair {
        Some(pair) if pair.is_broken() => vec![Strategy::BrokenPair],
        Some(pair) if pair.awaiting_swap() => vec![Strategy::PairSwap, Strategy::BrokenPair],
        Some(_) => vec![Strategy::PairStart, Strategy::BrokenPair],
        None => vec![Strategy::LeastRecentlyUsed],
    }
}

impl Strategy {
    /// The rule recorded for a worker chosen by this strategy.
    pub fn rule(self) -> AssignmentRule {
        match self {
            Strategy::ConductorContinuation => AssignmentRule::ConductorContinuation,
            Strategy::ConductorStart { .. } => AssignmentRule::ConductorStart,
            Strategy::PairSwap => AssignmentRule::PairSwap,
            Strategy::PairStart => AssignmentRule::PairStart,
            Strategy::BrokenPair => AssignmentRule::BrokenPair,
            Strategy::LeastRecentlyUsed => AssignmentRule::LeastRecentlyUsed,
        }
    }

    /// Returns true if trying this strategy abandons ideal pairing.
    pub fn breaks_pair(self) -> bool {
        self == Strategy::BrokenPair
    }

    /// Chooses a worker, or `None` if nobody qualifies.
    pub fn select(self, ctx: &SelectionContext<'_>) -> Option<String> {
        match self {
            Strategy::ConductorContinuation => ctx
                .pool
                .iter()
                .find(|w| ctx.runtime.streak_at(w, Station::Conductor) == 1)
                .cloned(),
            Strategy::ConductorStart { any_minute } => {
                if !any_minute && !ctx.slot.is_top_of_hour() {
                    return None;
                }
                least_recently_used(
                    ctx,
                    ctx.pool
                        .iter()
                        .filter(|w| ctx.runtime.streak_at(w, Station::Conductor) < 2),
                )
            }
            Strategy::PairSwap => {
                let candidate = ctx.pair?.swap_candidate(ctx.station)?;
                let available = ctx.pool.iter().any(|w| w == candidate);
                (available && !ctx.runtime.barred_from(candidate, ctx.station))
                    .then(|| candidate.to_string())
            }
            Strategy::PairStart => {
                if !ctx.slot.is_top_of_hour() {
                    return None;
                }
                least_recently_used(ctx, ctx.pool.iter().filter(|w| fresh_for(ctx, w)))
            }
            Strategy::BrokenPair | Strategy::LeastRecentlyUsed => {
                least_recently_used(ctx, ctx.pool.iter().filter(|w| fresh_for(ctx, w)))
            }
        }
    }
}

/// Not barred by the repeat rule and not already on this station.
fn fresh_for(ctx: &SelectionContext<'_>, worker: &str) -> bool {
    !ctx.runtime.barred_from(worker, ctx.station) && ctx.runtime.streak_at(worker, ctx.station) == 0
}

/// Oldest (or never) assignment to the station first, then by name.
fn least_recently_used<'a>(
    ctx: &SelectionContext<'_>,
    eligible: impl Iterator<Item = &'a String>,
) -> Option<String> {
    eligible
        .min_by(|a, b| {
            ctx.runtime
                .last_assigned(a, ctx.station)
                .cmp(&ctx.runtime.last_assigned(b, ctx.station))
                .then_with(|| a.cmp(b))
        })
        .cloned()
}
