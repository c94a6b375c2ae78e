//! Compass geometry on the unbounded square board.
//!
//! Cells are addressed by integer `(x, y)` pairs. North is `+y` and east
//! is `+x`. Every placed tile exposes four edges, one per [`Direction`];
//! a [`BoardEdge`] names one of them.

use std::fmt;

/// One of the four compass directions a tile edge can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards `+y`.
    North,
    /// Towards `+x`.
    East,
    /// Towards `-y`.
    South,
    /// Towards `-x`.
    West,
}

impl Direction {
    /// All four directions in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The direction facing the other way.
    pub fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Rotate clockwise by `steps` quarter turns. Steps are taken modulo 4.
    ///
    /// ```
    /// use tessera_core::Direction;
    ///
    /// assert_eq!(Direction::North.rotated(1), Direction::East);
    /// assert_eq!(Direction::West.rotated(1), Direction::North);
    /// assert_eq!(Direction::South.rotated(6), Direction::North);
    /// ```
    pub fn rotated(self, steps: u8) -> Self {
        Self::ALL[(self.index() + steps as usize) % 4]
    }

    /// Unit offset `(dx, dy)` of the cell across this edge.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// A board cell. The board is sparse, so any `i32` pair is addressable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing eastwards.
    pub x: i32,
    /// Row, growing northwards.
    pub y: i32,
}

impl Cell {
    /// Offsets of the 8-neighbourhood, row by row from the south-west corner.
    const SURROUNDING: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell sharing this cell's edge in `direction`.
    ///
    /// Expects an interior cell; see [`is_interior`](Self::is_interior).
    pub fn neighbour(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// [`neighbour`](Self::neighbour), or `None` past the end of the
    /// coordinate range.
    pub fn checked_neighbour(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The eight cells sharing an edge or a corner with this one.
    ///
    /// Expects an interior cell; see [`is_interior`](Self::is_interior).
    pub fn surrounding(self) -> [Cell; 8] {
        Self::SURROUNDING.map(|(dx, dy)| Self::new(self.x + dx, self.y + dy))
    }

    /// Whether every cell around this one is addressable.
    ///
    /// Only cells on the rim of the `i32` range fail.
    pub fn is_interior(self) -> bool {
        Self::SURROUNDING.iter().all(|&(dx, dy)| {
            self.x.checked_add(dx).is_some() && self.y.checked_add(dy).is_some()
        })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One edge of one cell: the key under which features are registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardEdge {
    /// The cell owning the edge.
    pub cell: Cell,
    /// Which side of the cell.
    pub direction: Direction,
}

impl BoardEdge {
    /// Create the edge of `cell` facing `direction`.
    pub const fn new(cell: Cell, direction: Direction) -> Self {
        Self { cell, direction }
    }

    /// The edge of the neighbouring cell that touches this one.
    pub fn facing(self) -> Self {
        Self::new(
            self.cell.neighbour(self.direction),
            self.direction.opposite(),
        )
    }
}

impl fmt::Display for BoardEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cell, self.direction)
    }
}
