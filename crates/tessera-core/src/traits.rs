//! Core abstraction traits for crediting scores.

use crate::id::PlayerId;

/// Receives score deltas for players when features are scored.
///
/// The engine owns no player state. Whoever keeps score (a game loop,
/// a test table, a network layer) implements this trait and is handed
/// each credit as it is settled. Every closure is reported once, so an
/// implementation does not need to deduplicate.
pub trait ScoreSink {
    /// Add `points` to `player`'s total.
    fn credit(&mut self, player: PlayerId, points: u32);
}

impl<S: ScoreSink + ?Sized> ScoreSink for &mut S {
    fn credit(&mut self, player: PlayerId, points: u32) {
        (**self).credit(player, points);
    }
}
