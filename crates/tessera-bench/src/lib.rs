//! Benchmark profiles for the Tessera board engine.
//!
//! Each profile is a deterministic placement order that stays legal from
//! the first tile to the last:
//!
//! - [`junction_grid`]: every tile carries one path touching all four edges,
//!   so every placement merges into a single growing feature
//! - [`cloister_grid`]: point tiles only, stressing neighbour counting and
//!   closure scans
//! - [`road_line`]: a long straight road capped at both ends
//! - [`scattered_order`]: a seeded permutation of grid cells for lookups

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_board::Board;
use tessera_core::{Cell, Direction, PlacementError};
use tessera_tile::{Fragment, Tile};

/// A tile with a single path reaching all four edges.
pub fn junction_tile() -> Tile {
    Tile::new(vec![Fragment::path(&Direction::ALL)]).expect("junction tile is well-formed")
}

/// A tile with a lone point feature.
pub fn cloister_tile() -> Tile {
    Tile::new(vec![Fragment::point()]).expect("cloister tile is well-formed")
}

/// Cells of a `side`×`side` square in row-major order from the origin.
///
/// Each cell after the first touches an earlier one.
pub fn row_major(side: i32) -> Vec<Cell> {
    (0..side)
        .flat_map(|y| (0..side).map(move |x| Cell::new(x, y)))
        .collect()
}

/// `side`×`side` junction tiles in a legal placement order.
pub fn junction_grid(side: i32) -> Vec<(Cell, Tile)> {
    let tile = junction_tile();
    row_major(side)
        .into_iter()
        .map(|cell| (cell, tile.clone()))
        .collect()
}

/// `side`×`side` cloister tiles in a legal placement order.
pub fn cloister_grid(side: i32) -> Vec<(Cell, Tile)> {
    let tile = cloister_tile();
    row_major(side)
        .into_iter()
        .map(|cell| (cell, tile.clone()))
        .collect()
}

/// A straight road `len` cells long running east, closed at both ends.
///
/// The closing cap is the final placement.
pub fn road_line(len: i32) -> Vec<(Cell, Tile)> {
    let cap = |toward: Direction| {
        Tile::new(vec![Fragment::path(&[toward])]).expect("road cap is well-formed")
    };
    let straight = Tile::new(vec![Fragment::path(&[Direction::West, Direction::East])])
        .expect("road tile is well-formed");

    let mut placements = Vec::with_capacity(len.max(2) as usize);
    placements.push((Cell::new(0, 0), cap(Direction::East)));
    for x in 1..len - 1 {
        placements.push((Cell::new(x, 0), straight.clone()));
    }
    placements.push((Cell::new(len.max(2) - 1, 0), cap(Direction::West)));
    placements
}

/// Apply `placements` to a fresh board, resolving closures after each.
pub fn build_board(placements: &[(Cell, Tile)]) -> Result<Board, PlacementError> {
    let mut board = Board::new();
    for (cell, tile) in placements {
        board.place_tile(tile.clone(), *cell)?;
        board.resolve_closures();
    }
    Ok(board)
}

/// The cells of a `side`×`side` square in a seeded, deterministic order.
///
/// Not a legal placement order; used for lookups against a built board.
pub fn scattered_order(side: i32, seed: u64) -> Vec<Cell> {
    let mut cells = row_major(side);
    let mut state = seed;
    for i in (1..cells.len()).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        cells.swap(i, j);
    }
    cells
}
