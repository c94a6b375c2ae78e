//! Feature values and majority-share crediting.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tessera_core::{ConfigError, FeatureKey, PlayerId, ScoreSink};

use crate::feature::{FeatureRef, LinearFeature, PointFeature};

/// Players credited for one scored feature.
pub type Credited = SmallVec<[PlayerId; 4]>;

/// Point values for each feature kind.
///
/// The defaults give paths one point per cell, zones two points per cell
/// and bonus when closed (one when open), and points one plus their
/// filled neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringRules {
    /// Zone multiplier once the zone is closed. Default: 2.
    pub zone_closed_multiplier: u32,
    /// Zone multiplier while the zone is still open. Default: 1.
    pub zone_open_multiplier: u32,
    /// Value of a point feature before counting neighbours. Default: 1.
    pub point_base: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            zone_closed_multiplier: 2,
            zone_open_multiplier: 1,
            point_base: 1,
        }
    }
}

impl ScoringRules {
    /// Check the rules for nonsensical multipliers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_closed_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier {
                name: "zone_closed_multiplier",
            });
        }
        if self.zone_open_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier {
                name: "zone_open_multiplier",
            });
        }
        if self.zone_closed_multiplier < self.zone_open_multiplier {
            return Err(ConfigError::ClosedBelowOpen {
                closed: self.zone_closed_multiplier,
                open: self.zone_open_multiplier,
            });
        }
        Ok(())
    }

    /// Value of a path: its length in cells.
    pub fn path_value(&self, path: &LinearFeature) -> u32 {
        path.cells().len() as u32
    }

    /// Value of a zone: cells plus bonus, times the closed or open multiplier.
    pub fn zone_value(&self, zone: &LinearFeature) -> u32 {
        let multiplier = if zone.is_closed() {
            self.zone_closed_multiplier
        } else {
            self.zone_open_multiplier
        };
        zone.base_value() * multiplier
    }

    /// Value of a point: the base plus its filled neighbours.
    pub fn point_value(&self, point: &PointFeature) -> u32 {
        self.point_base + u32::from(point.neighbours())
    }

    /// Value of any feature in its current state.
    pub fn value(&self, feature: FeatureRef<'_>) -> u32 {
        match feature {
            FeatureRef::Path(path) => self.path_value(path),
            FeatureRef::Zone(zone) => self.zone_value(zone),
            FeatureRef::Point(point) => self.point_value(point),
        }
    }
}

/// The players holding the most markers, in order of first appearance.
///
/// Ties are not split: every player sharing the top count is returned.
/// No markers means nobody is credited.
///
/// ```
/// use tessera_board::scoring::majority;
/// use tessera_core::PlayerId;
///
/// let (a, b) = (PlayerId(1), PlayerId(2));
/// assert_eq!(majority(&[a, a, b]).as_slice(), &[a]);
/// assert_eq!(majority(&[a, b, b, a]).as_slice(), &[a, b]);
/// assert!(majority(&[]).is_empty());
/// ```
pub fn majority(markers: &[PlayerId]) -> Credited {
    let mut counts: IndexMap<PlayerId, u32> = IndexMap::new();
    for &player in markers {
        *counts.entry(player).or_insert(0) += 1;
    }
    let Some(&top) = counts.values().max() else {
        return Credited::new();
    };
    counts
        .into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(player, _)| player)
        .collect()
}

/// A feature scored by a closure scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Closure {
    /// The feature that closed.
    pub feature: FeatureKey,
    /// Its value at the moment it closed.
    pub score: u32,
    /// Players receiving the full value. Empty if nobody had a marker on it.
    pub credited: Credited,
}

impl Closure {
    /// Credit every player in [`credited`](Self::credited) with the score.
    pub fn apply<S: ScoreSink + ?Sized>(&self, sink: &mut S) {
        for &player in &self.credited {
            sink.credit(player, self.score);
        }
    }
}
