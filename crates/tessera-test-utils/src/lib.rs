//! Test utilities for Tessera development.
//!
//! Provides a recording [`ScoreTable`] implementing [`ScoreSink`] and
//! tile fixtures for the common designs used across test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;
use tessera_core::{PlayerId, ScoreSink};

/// Score sink that keeps a running total per player.
///
/// Also records every individual credit so tests can assert on the
/// exact sequence of deltas.
#[derive(Debug, Default)]
pub struct ScoreTable {
    totals: IndexMap<PlayerId, u32>,
    credits: Vec<(PlayerId, u32)>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total for `player`; zero if never credited.
    pub fn score(&self, player: PlayerId) -> u32 {
        self.totals.get(&player).copied().unwrap_or(0)
    }

    /// Every credit received, in order.
    pub fn credits(&self) -> &[(PlayerId, u32)] {
        &self.credits
    }

    /// Forget all credits.
    pub fn reset(&mut self) {
        self.totals.clear();
        self.credits.clear();
    }
}

impl ScoreSink for ScoreTable {
    fn credit(&mut self, player: PlayerId, points: u32) {
        *self.totals.entry(player).or_insert(0) += points;
        self.credits.push((player, points));
    }
}
