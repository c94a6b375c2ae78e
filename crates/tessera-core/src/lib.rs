//! Core types and traits for the Tessera tile-placement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessera workspace:
//! board geometry, strongly-typed IDs, error types, and the score sink
//! trait through which closed features are credited.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod traits;

pub use error::{ConfigError, MarkerError, PlacementError, TileError};
pub use geometry::{BoardEdge, Cell, Direction};
pub use id::{FeatureId, FeatureKey, FeatureKind, PlayerId};
pub use traits::ScoreSink;
