//! Reusable tile designs.
//!
//! All fixtures are built in a fixed orientation; use
//! [`Tile::rotated`] to turn them.
//!
//! - [`straight_path`]: path running north to south.
//! - [`path_end`]: path ending in the middle, opening north.
//! - [`path_corner`]: path bending from north to east.
//! - [`crossing`]: four path ends meeting in the middle.
//! - [`cloister`]: a lone point feature.
//! - [`zone_cap`] / [`zone_pair`]: zone pieces.

use tessera_core::Direction::{self, *};
use tessera_tile::{Fragment, Tile};

fn build(fragments: Vec<Fragment>) -> Tile {
    Tile::new(fragments).expect("fixture tiles are well-formed")
}

/// Path running from the north edge to the south edge.
pub fn straight_path() -> Tile {
    build(vec![Fragment::path(&[North, South])])
}

/// Path reaching only the north edge.
pub fn path_end() -> Tile {
    build(vec![Fragment::path(&[North])])
}

/// Path bending from the north edge to the east edge.
pub fn path_corner() -> Tile {
    build(vec![Fragment::path(&[North, East])])
}

/// Four separate path ends, one per edge.
pub fn crossing() -> Tile {
    build(Direction::ALL.iter().map(|&d| Fragment::path(&[d])).collect())
}

/// A point feature with no edges.
pub fn cloister() -> Tile {
    build(vec![Fragment::point()])
}

/// A point feature with a path leaving through the south edge.
pub fn cloister_with_path() -> Tile {
    build(vec![Fragment::point(), Fragment::path(&[South])])
}

/// Zone piece touching only `direction`.
pub fn zone_cap(direction: Direction) -> Tile {
    build(vec![Fragment::zone(&[direction])])
}

/// Zone piece touching `a` and `b`, optionally carrying a bonus.
pub fn zone_pair(a: Direction, b: Direction, bonus: bool) -> Tile {
    let fragment = if bonus {
        Fragment::zone_with_bonus(&[a, b])
    } else {
        Fragment::zone(&[a, b])
    };
    build(vec![fragment])
}

/// Tile with nothing on it.
pub fn blank() -> Tile {
    build(Vec::new())
}
