//! Tessera: a territory-claiming engine for tile-placement board games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//! use tessera::types::Direction::*;
//!
//! let mut board = Board::new();
//! let cloister = Tile::new(vec![Fragment::point(), Fragment::path(&[South])]).unwrap();
//! board.place_tile(cloister, Cell::new(0, 0)).unwrap();
//!
//! let road = board.find_path_feature(Cell::new(0, 0), South).unwrap();
//! board.place_marker(road, PlayerId(0)).unwrap();
//!
//! let dead_end = Tile::new(vec![Fragment::path(&[North])]).unwrap();
//! board.place_tile(dead_end, Cell::new(0, -1)).unwrap();
//!
//! let closures = board.resolve_closures();
//! assert_eq!(closures.len(), 1);
//! assert_eq!(closures[0].score, 2);
//! assert_eq!(closures[0].credited.as_slice(), &[PlayerId(0)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Geometry, IDs, error types, the score sink trait |
//! | [`tile`] | `tessera-tile` | Fragments and validated, rotatable tiles |
//! | [`board`] | `tessera-board` | Board, feature registries, scoring rules |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tessera-core`).
///
/// Contains cell and edge geometry, feature keys, the error enums and
/// the [`types::ScoreSink`] trait.
pub use tessera_core as types;

/// Tile descriptions (`tessera-tile`).
///
/// A [`tile::Tile`] is a validated set of [`tile::Fragment`]s with its
/// per-edge codes derived once at construction.
pub use tessera_tile as tile;

/// The board and its feature graph (`tessera-board`).
///
/// [`board::Board`] places tiles and markers and reports closures;
/// [`board::ScoringRules`] sets the point values.
pub use tessera_board as board;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tessera_core::{Cell, Direction, FeatureKey, FeatureKind, PlayerId, ScoreSink};

    // Errors
    pub use tessera_core::{ConfigError, MarkerError, PlacementError, TileError};

    // Tiles
    pub use tessera_tile::{Fragment, Tile};

    // Board
    pub use tessera_board::{Board, BoardConfig, Closure, FeatureRef, ScoringRules};
}
