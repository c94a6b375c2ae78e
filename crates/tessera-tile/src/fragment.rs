//! Tile-local pieces of board features.

use smallvec::SmallVec;
use tessera_core::{Direction, FeatureKind};

/// Directions touched by a fragment. At most four, so always inline.
pub type Directions = SmallVec<[Direction; 4]>;

/// The part of a feature printed on a single tile design.
///
/// Path and zone fragments list the tile edges they reach; once placed,
/// those edges become open edges of a board feature. A point fragment
/// sits in the middle of the tile and touches no edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// A stretch of path running to the listed edges.
    Path {
        /// Edges the path reaches.
        directions: Directions,
    },
    /// A piece of enclosed zone bordering the listed edges.
    Zone {
        /// Edges the zone reaches.
        directions: Directions,
        /// Whether the piece carries a bonus marker.
        bonus: bool,
    },
    /// A point feature anchored on the tile itself.
    Point,
}

impl Fragment {
    /// A path fragment reaching `directions`.
    pub fn path(directions: &[Direction]) -> Self {
        Self::Path {
            directions: SmallVec::from_slice(directions),
        }
    }

    /// A zone fragment without a bonus.
    pub fn zone(directions: &[Direction]) -> Self {
        Self::Zone {
            directions: SmallVec::from_slice(directions),
            bonus: false,
        }
    }

    /// A zone fragment carrying a bonus marker.
    pub fn zone_with_bonus(directions: &[Direction]) -> Self {
        Self::Zone {
            directions: SmallVec::from_slice(directions),
            bonus: true,
        }
    }

    /// A point fragment.
    pub fn point() -> Self {
        Self::Point
    }

    /// Which kind of board feature this fragment becomes.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Path { .. } => FeatureKind::Path,
            Self::Zone { .. } => FeatureKind::Zone,
            Self::Point => FeatureKind::Point,
        }
    }

    /// Edges this fragment reaches. Empty for point fragments.
    pub fn directions(&self) -> &[Direction] {
        match self {
            Self::Path { directions } | Self::Zone { directions, .. } => directions.as_slice(),
            Self::Point => &[],
        }
    }

    /// Whether this is a zone fragment with a bonus marker.
    pub fn has_bonus(&self) -> bool {
        matches!(self, Self::Zone { bonus: true, .. })
    }

    /// The same fragment turned clockwise by `steps` quarter turns.
    pub fn rotated(&self, steps: u8) -> Self {
        let turn = |directions: &Directions| -> Directions {
            directions.iter().map(|d| d.rotated(steps)).collect()
        };
        match self {
            Self::Path { directions } => Self::Path {
                directions: turn(directions),
            },
            Self::Zone { directions, bonus } => Self::Zone {
                directions: turn(directions),
                bonus: *bonus,
            },
            Self::Point => Self::Point,
        }
    }
}
