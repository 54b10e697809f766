// src/types.rs
use std::fmt;

use indexmap::IndexMap;

use crate::config::consts::STAT_WIDTH;

/// One player's projected line from the forecast table.
/// Index 1 = points, 2 = rebounds, 3 = assists; 0, 4, 5 are carried but unused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatVector([f64; STAT_WIDTH]);

impl StatVector {
    pub const POINTS: usize = 1;
    pub const REBOUNDS: usize = 2;
    pub const ASSISTS: usize = 3;

    pub fn new(values: [f64; STAT_WIDTH]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; STAT_WIDTH] {
        &self.0
    }

    pub fn get(&self, ix: usize) -> Option<f64> {
        self.0.get(ix).copied()
    }

    /// Sum of the values at `indices`; out-of-range indices contribute nothing.
    pub fn sum_at(&self, indices: &[usize]) -> f64 {
        indices.iter().filter_map(|&i| self.get(i)).sum()
    }
}

impl TryFrom<&[f64]> for StatVector {
    type Error = usize;

    /// Fails with the slice length when it is not exactly `STAT_WIDTH`.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        <[f64; STAT_WIDTH]>::try_from(values).map(Self).map_err(|_| values.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    /// e.g. `BOS@NYK`
    pub game_tag: String,
    /// As published, e.g. `2024-01-05T00:30:00.000Z`
    pub scheduled_time_utc: String,
    pub home_label: String,
}

/// A single over/under threshold. `handle` belongs to the board adapter.
#[derive(Clone, Debug, PartialEq)]
pub struct PropLine<H> {
    pub category: String,
    pub line: f64,
    pub handle: H,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiscrepancyRecord {
    pub abs_difference: f64,
    pub player: String,
    pub line: f64,
    pub stat_sum: f64,
}

impl fmt::Display for DiscrepancyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?}, {:?})", self.abs_difference, self.player, self.line, self.stat_sum)
    }
}

/// Source-A aggregate: player → projection, in first-seen order.
pub type Projections = IndexMap<String, StatVector>;

/// One card's lines: category label → line.
pub type PlayerLines<H> = IndexMap<String, PropLine<H>>;

/// Source-B aggregate: player → lines, in board order.
pub type Lines<H> = IndexMap<String, PlayerLines<H>>;
