//! Strongly-typed identifiers for features and players.

use std::fmt;

/// Index of a feature within its kind's arena.
///
/// IDs are assigned sequentially as features are created and are never
/// reused. After a merge the absorbed ID stays valid: looking it up
/// resolves to the surviving feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub u32);

impl FeatureId {
    /// The arena slot this ID refers to.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FeatureId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque handle to a player.
///
/// The engine never holds player state; it only records which handles
/// placed markers and reports them back when a feature is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The three kinds of feature a tile can carry.
///
/// The derived ordering is used to sort edge codes so that edges compare
/// as multisets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    /// A linear route scored by length.
    Path,
    /// An enclosed area scored by size and bonus markers.
    Zone,
    /// A single-cell feature scored by its filled surroundings.
    Point,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Path => "path",
            Self::Zone => "zone",
            Self::Point => "point",
        };
        f.write_str(name)
    }
}

/// Board-wide handle to a feature: its kind plus its arena ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey {
    /// Which arena the ID belongs to.
    pub kind: FeatureKind,
    /// Index within that arena.
    pub id: FeatureId,
}

impl FeatureKey {
    /// Key for a path feature.
    pub fn path(id: FeatureId) -> Self {
        Self {
            kind: FeatureKind::Path,
            id,
        }
    }

    /// Key for a zone feature.
    pub fn zone(id: FeatureId) -> Self {
        Self {
            kind: FeatureKind::Zone,
            id,
        }
    }

    /// Key for a point feature.
    pub fn point(id: FeatureId) -> Self {
        Self {
            kind: FeatureKind::Point,
            id,
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
