//! Board feature graph for the Tessera tile-placement engine.
//!
//! This crate owns everything that happens once a tile lands on the
//! board: edge matching, the union-find registries that grow and merge
//! paths and zones, point features counting their surroundings, closure
//! detection, marker rules and majority-share scoring.
//!
//! # Architecture
//!
//! ```text
//! Board (orchestrator)
//! ├── IndexMap<Cell, Tile>            placed tiles
//! ├── EdgeRegistry (paths)            union-find arena + edge table
//! ├── EdgeRegistry (zones)            union-find arena + edge table
//! ├── PointRegistry                   anchor table
//! └── ScoringRules                    from BoardConfig
//! ```
//!
//! Each placement flows one way: `Tile` → `check_placement` → commit
//! (registries mutate) → `resolve_closures` → [`ScoreSink`](tessera_core::ScoreSink).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod feature;
pub mod point;
pub mod registry;
pub mod scoring;

pub use board::Board;
pub use config::BoardConfig;
pub use feature::{FeatureRef, LinearFeature, Markers, PointFeature};
pub use point::PointRegistry;
pub use registry::{Connection, EdgeRegistry};
pub use scoring::{majority, Closure, Credited, ScoringRules};
