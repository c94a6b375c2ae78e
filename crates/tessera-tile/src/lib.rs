//! Tile designs for the Tessera engine.
//!
//! A [`Tile`] is an ordered list of [`Fragment`]s: the pieces of path,
//! zone, or point features printed on it. Tiles are immutable once built;
//! rotating one produces a new tile with relabelled directions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fragment;
pub mod tile;

pub use fragment::Fragment;
pub use tile::{EdgeCodes, Tile};
