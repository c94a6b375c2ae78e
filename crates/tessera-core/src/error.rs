//! Error types for the Tessera engine.
//!
//! Rejections are expected outcomes of play: an illegal placement or an
//! illegal marker leaves the board untouched and reports why. Tile
//! authoring mistakes surface when a tile is built from its fragments.
//! Broken internal bookkeeping is not represented here; it panics.

use std::error::Error;
use std::fmt;

use crate::geometry::{Cell, Direction};
use crate::id::FeatureKind;

/// Errors from building a tile out of fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileError {
    /// A path or zone fragment touches no edge.
    EmptyFragment {
        /// Kind of the offending fragment.
        kind: FeatureKind,
    },
    /// A fragment lists the same direction more than once.
    DuplicateDirection {
        /// Kind of the offending fragment.
        kind: FeatureKind,
        /// The repeated direction.
        direction: Direction,
    },
    /// Two fragments of the same kind touch the same edge.
    ///
    /// Each board edge can be claimed by at most one feature per kind.
    EdgeClaimedTwice {
        /// Kind of the clashing fragments.
        kind: FeatureKind,
        /// The shared direction.
        direction: Direction,
    },
    /// More than one point fragment on a tile.
    ///
    /// A cell anchors at most one point feature.
    PointClaimedTwice,
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFragment { kind } => write!(f, "{kind} fragment touches no edge"),
            Self::DuplicateDirection { kind, direction } => {
                write!(f, "{kind} fragment lists {direction} twice")
            }
            Self::EdgeClaimedTwice { kind, direction } => {
                write!(f, "two {kind} fragments claim the {direction} edge")
            }
            Self::PointClaimedTwice => write!(f, "tile carries more than one point fragment"),
        }
    }
}

impl Error for TileError {}

/// Why a tile could not be placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The target cell already holds a tile.
    Occupied {
        /// The occupied cell.
        cell: Cell,
    },
    /// The board is not empty and the target cell has no placed neighbour.
    Detached {
        /// The isolated cell.
        cell: Cell,
    },
    /// An edge of the tile does not match the neighbour across it.
    EdgeMismatch {
        /// The target cell.
        cell: Cell,
        /// Side of the new tile whose features disagree with the neighbour.
        direction: Direction,
    },
    /// The cell sits on the rim of the coordinate range, so some of its
    /// neighbours cannot be addressed.
    OutOfBounds {
        /// The rejected cell.
        cell: Cell,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied { cell } => write!(f, "cell {cell} is already occupied"),
            Self::Detached { cell } => write!(f, "cell {cell} does not touch the board"),
            Self::EdgeMismatch { cell, direction } => {
                write!(f, "tile at {cell} does not match its {direction} neighbour")
            }
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the addressable board"),
        }
    }
}

impl Error for PlacementError {}

/// Why a marker could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerError {
    /// No feature exists for the given key.
    UnknownFeature,
    /// The feature does not include the most recently placed tile.
    NotOnLastTile,
    /// The feature already carries a marker.
    AlreadyMarked,
    /// The feature has closed and been scored; nothing more can be won on it.
    AlreadyScored,
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFeature => write!(f, "no such feature"),
            Self::NotOnLastTile => write!(f, "feature does not touch the last placed tile"),
            Self::AlreadyMarked => write!(f, "feature already carries a marker"),
            Self::AlreadyScored => write!(f, "feature has already been scored"),
        }
    }
}

impl Error for MarkerError {}

/// Errors detected while validating a board configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A scoring multiplier is zero.
    ZeroMultiplier {
        /// Name of the offending setting.
        name: &'static str,
    },
    /// Closed zones would score less than open ones.
    ClosedBelowOpen {
        /// Configured multiplier for closed zones.
        closed: u32,
        /// Configured multiplier for open zones.
        open: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMultiplier { name } => write!(f, "{name} must be non-zero"),
            Self::ClosedBelowOpen { closed, open } => write!(
                f,
                "closed zone multiplier {closed} is below open zone multiplier {open}"
            ),
        }
    }
}

impl Error for ConfigError {}
