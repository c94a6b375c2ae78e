//! Live board features: multi-tile linear features and single-tile points.

use indexmap::IndexSet;
use smallvec::SmallVec;
use tessera_core::{BoardEdge, Cell, FeatureKind, PlayerId};

/// Markers sitting on a feature, in placement order.
///
/// A player appears more than once only after merges joined features
/// they had each marked.
pub type Markers = SmallVec<[PlayerId; 4]>;

/// A path or zone spanning one or more tiles.
///
/// The feature stays open while any of its edges faces an empty cell.
/// Once every edge has been matched it is closed, and it never reopens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearFeature {
    kind: FeatureKind,
    pub(crate) cells: IndexSet<Cell>,
    pub(crate) open_edges: Vec<BoardEdge>,
    pub(crate) markers: Markers,
    pub(crate) bonus: u32,
    pub(crate) settled: bool,
}

impl LinearFeature {
    pub(crate) fn new(
        kind: FeatureKind,
        cell: Cell,
        open_edges: Vec<BoardEdge>,
        bonus: u32,
    ) -> Self {
        debug_assert!(kind != FeatureKind::Point, "point features are not linear");
        let mut cells = IndexSet::new();
        cells.insert(cell);
        Self {
            kind,
            cells,
            open_edges,
            markers: Markers::new(),
            bonus,
            settled: false,
        }
    }

    /// Path or zone.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Cells the feature runs through, in the order they joined.
    pub fn cells(&self) -> &IndexSet<Cell> {
        &self.cells
    }

    /// Edges not yet matched by a neighbouring tile.
    pub fn open_edges(&self) -> &[BoardEdge] {
        &self.open_edges
    }

    /// Markers currently on the feature.
    pub fn markers(&self) -> &[PlayerId] {
        &self.markers
    }

    /// Bonus markers collected from zone fragments. Always 0 for paths.
    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Cells plus bonus, before any multiplier.
    pub fn base_value(&self) -> u32 {
        self.cells.len() as u32 + self.bonus
    }

    /// Whether every edge of the feature has been matched.
    pub fn is_closed(&self) -> bool {
        self.open_edges.is_empty()
    }

    /// Whether the feature's closure has already been scored.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether the feature runs through `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Fold `other` into `self`, leaving `other` empty.
    pub(crate) fn absorb(&mut self, other: &mut LinearFeature) {
        debug_assert_eq!(self.kind, other.kind);
        self.cells.extend(other.cells.drain(..));
        self.open_edges.append(&mut other.open_edges);
        self.markers.extend(other.markers.drain(..));
        self.bonus += std::mem::take(&mut other.bonus);
    }

    /// Remove `edge` from the open list. Returns whether it was open.
    pub(crate) fn cancel(&mut self, edge: BoardEdge) -> bool {
        match self.open_edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.open_edges.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}

/// A single-cell feature scored by how many of its eight surrounding
/// cells hold tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointFeature {
    anchor: Cell,
    pub(crate) neighbours: u8,
    pub(crate) markers: Markers,
    pub(crate) settled: bool,
}

impl PointFeature {
    pub(crate) fn new(anchor: Cell, neighbours: u8) -> Self {
        debug_assert!(neighbours <= 8);
        Self {
            anchor,
            neighbours,
            markers: Markers::new(),
            settled: false,
        }
    }

    /// The cell holding the point fragment.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// How many of the eight surrounding cells are filled.
    pub fn neighbours(&self) -> u8 {
        self.neighbours
    }

    /// Markers currently on the feature.
    pub fn markers(&self) -> &[PlayerId] {
        &self.markers
    }

    /// Whether the feature is fully surrounded.
    pub fn is_closed(&self) -> bool {
        self.neighbours == 8
    }

    /// Whether the feature's closure has already been scored.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether `cell` is the anchor.
    pub fn contains(&self, cell: Cell) -> bool {
        self.anchor == cell
    }
}

/// Borrowed view of any feature on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureRef<'a> {
    /// A path feature.
    Path(&'a LinearFeature),
    /// A zone feature.
    Zone(&'a LinearFeature),
    /// A point feature.
    Point(&'a PointFeature),
}

impl<'a> FeatureRef<'a> {
    /// Which kind of feature this is.
    pub fn kind(&self) -> FeatureKind {
        match *self {
            Self::Path(_) => FeatureKind::Path,
            Self::Zone(_) => FeatureKind::Zone,
            Self::Point(_) => FeatureKind::Point,
        }
    }

    /// Markers currently on the feature.
    pub fn markers(&self) -> &'a [PlayerId] {
        match *self {
            Self::Path(f) | Self::Zone(f) => f.markers(),
            Self::Point(p) => p.markers(),
        }
    }

    /// Whether the feature is closed.
    pub fn is_closed(&self) -> bool {
        match *self {
            Self::Path(f) | Self::Zone(f) => f.is_closed(),
            Self::Point(p) => p.is_closed(),
        }
    }

    /// Whether the feature's closure has already been scored.
    pub fn is_settled(&self) -> bool {
        match *self {
            Self::Path(f) | Self::Zone(f) => f.is_settled(),
            Self::Point(p) => p.is_settled(),
        }
    }

    /// Whether the feature covers `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        match *self {
            Self::Path(f) | Self::Zone(f) => f.contains(cell),
            Self::Point(p) => p.contains(cell),
        }
    }

    /// Number of cells the feature covers. A point covers its anchor only.
    pub fn cell_count(&self) -> usize {
        match *self {
            Self::Path(f) | Self::Zone(f) => f.cells().len(),
            Self::Point(_) => 1,
        }
    }

    /// The linear feature behind a path or zone view.
    pub fn as_linear(&self) -> Option<&'a LinearFeature> {
        match *self {
            Self::Path(f) | Self::Zone(f) => Some(f),
            Self::Point(_) => None,
        }
    }

    /// The point feature behind a point view.
    pub fn as_point(&self) -> Option<&'a PointFeature> {
        match *self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }
}
