//! The board: placement, marker rules, and closure scanning.
//!
//! Placement runs in two phases. [`Board::place_tile`] first checks the
//! target cell and every neighbouring edge without touching any state; only
//! if all checks pass does it commit the tile and grow the feature graph.
//! A rejected placement therefore leaves the board exactly as it was.
//!
//! After each placement the caller runs [`Board::resolve_closures`] (or
//! [`Board::settle`]) to score whatever the new tile closed.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tessera_core::{
    BoardEdge, Cell, ConfigError, Direction, FeatureId, FeatureKey, FeatureKind, MarkerError,
    PlacementError, PlayerId, ScoreSink,
};
use tessera_tile::{Fragment, Tile};
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::feature::{FeatureRef, Markers};
use crate::point::PointRegistry;
use crate::registry::{Connection, EdgeRegistry};
use crate::scoring::{majority, Closure, ScoringRules};

/// A sparse board of placed tiles and the features they form.
///
/// The board exclusively owns tiles, features and lookup tables; callers
/// observe features through [`FeatureKey`]s and borrowed [`FeatureRef`]
/// views.
///
/// # Examples
///
/// ```
/// use tessera_board::Board;
/// use tessera_core::{Cell, Direction::*, PlayerId};
/// use tessera_tile::{Fragment, Tile};
///
/// let mut board = Board::new();
/// let start = Tile::new(vec![Fragment::path(&[North])]).unwrap();
/// board.place_tile(start, Cell::new(0, 0)).unwrap();
///
/// let path = board.find_path_feature(Cell::new(0, 0), North).unwrap();
/// board.place_marker(path, PlayerId(7)).unwrap();
///
/// let end = Tile::new(vec![Fragment::path(&[South])]).unwrap();
/// board.place_tile(end, Cell::new(0, 1)).unwrap();
///
/// let closures = board.resolve_closures();
/// assert_eq!(closures.len(), 1);
/// assert_eq!(closures[0].score, 2);
/// assert_eq!(closures[0].credited.as_slice(), &[PlayerId(7)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rules: ScoringRules,
    tiles: IndexMap<Cell, Tile>,
    paths: EdgeRegistry,
    zones: EdgeRegistry,
    points: PointRegistry,
    last_placed: Option<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with the default scoring rules.
    pub fn new() -> Self {
        Self::build(ScoringRules::default())
    }

    /// An empty board with custom configuration.
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.rules))
    }

    fn build(rules: ScoringRules) -> Self {
        Self {
            rules,
            tiles: IndexMap::new(),
            paths: EdgeRegistry::new(FeatureKind::Path),
            zones: EdgeRegistry::new(FeatureKind::Zone),
            points: PointRegistry::new(),
            last_placed: None,
        }
    }

    // ── Placement ──────────────────────────────────────────────────

    /// Place `tile` at `cell`.
    ///
    /// The first tile goes anywhere off the rim of the `i32` grid. Every
    /// later tile must touch at least one placed tile, and each touching
    /// edge must carry the same multiset of feature kinds as the edge it
    /// faces. On success the tile's fragments become features, joining any
    /// neighbouring features they touch. On failure nothing changes.
    pub fn place_tile(&mut self, tile: Tile, cell: Cell) -> Result<(), PlacementError> {
        if let Err(err) = self.check_placement(&tile, cell) {
            trace!(%cell, error = %err, "placement rejected");
            return Err(err);
        }
        self.commit(tile, cell);
        Ok(())
    }

    /// Whether `tile` could be placed at `cell`. Never mutates the board.
    pub fn check_placement(&self, tile: &Tile, cell: Cell) -> Result<(), PlacementError> {
        if !cell.is_interior() {
            return Err(PlacementError::OutOfBounds { cell });
        }
        if self.tiles.contains_key(&cell) {
            return Err(PlacementError::Occupied { cell });
        }

        let mut touches = false;
        for direction in Direction::ALL {
            let Some(neighbour) = self.tiles.get(&cell.neighbour(direction)) else {
                continue;
            };
            touches = true;
            if tile.edge_codes(direction) != neighbour.edge_codes(direction.opposite()) {
                return Err(PlacementError::EdgeMismatch { cell, direction });
            }
        }

        if !touches && !self.tiles.is_empty() {
            return Err(PlacementError::Detached { cell });
        }
        Ok(())
    }

    fn commit(&mut self, tile: Tile, cell: Cell) {
        let filled = cell
            .surrounding()
            .iter()
            .filter(|around| self.tiles.contains_key(*around))
            .count() as u8;
        let bumped = self.points.note_filled(cell);

        for fragment in tile.fragments() {
            match fragment {
                Fragment::Path { directions } => {
                    grow(&mut self.paths, cell, directions, 0);
                }
                Fragment::Zone { directions, bonus } => {
                    grow(&mut self.zones, cell, directions, u32::from(*bonus));
                }
                Fragment::Point => {
                    let id = self.points.insert(cell, filled);
                    debug!(%cell, point = %id, neighbours = filled, "point feature created");
                }
            }
        }

        self.tiles.insert(cell, tile);
        self.last_placed = Some(cell);
        debug!(%cell, tiles = self.tiles.len(), points_bumped = bumped, "tile placed");
    }

    // ── Markers ────────────────────────────────────────────────────

    /// Put `player`'s marker on a feature.
    ///
    /// Only a feature covering the most recently placed tile, and carrying
    /// no marker yet, can be claimed. A feature that has already closed and
    /// been scored cannot be claimed either.
    pub fn place_marker(&mut self, key: FeatureKey, player: PlayerId) -> Result<(), MarkerError> {
        let result = self.try_place_marker(key, player);
        match &result {
            Ok(()) => debug!(feature = %key, %player, "marker placed"),
            Err(err) => trace!(feature = %key, %player, error = %err, "marker rejected"),
        }
        result
    }

    fn try_place_marker(&mut self, key: FeatureKey, player: PlayerId) -> Result<(), MarkerError> {
        let last = self.last_placed;
        let (touches_last, settled, markers): (bool, bool, &mut Markers) = match key.kind {
            FeatureKind::Path | FeatureKind::Zone => {
                let feature = self
                    .linear_mut(key.kind)
                    .get_mut(key.id)
                    .ok_or(MarkerError::UnknownFeature)?;
                (
                    last.is_some_and(|c| feature.contains(c)),
                    feature.settled,
                    &mut feature.markers,
                )
            }
            FeatureKind::Point => {
                let point = self
                    .points
                    .get_mut(key.id)
                    .ok_or(MarkerError::UnknownFeature)?;
                (
                    last.is_some_and(|c| point.contains(c)),
                    point.settled,
                    &mut point.markers,
                )
            }
        };

        if !touches_last {
            return Err(MarkerError::NotOnLastTile);
        }
        if !markers.is_empty() {
            return Err(MarkerError::AlreadyMarked);
        }
        if settled {
            return Err(MarkerError::AlreadyScored);
        }
        markers.push(player);
        Ok(())
    }

    // ── Closure ────────────────────────────────────────────────────

    /// Score every feature the last placed tile may have closed.
    ///
    /// Looks at the paths and zones on the four edges of the last tile and
    /// at the point features on it and around it. Each closed feature is
    /// reported once, the first time a scan finds it closed, and its
    /// markers are cleared. Later scans skip it.
    pub fn resolve_closures(&mut self) -> Vec<Closure> {
        let Some(last) = self.last_placed else {
            return Vec::new();
        };

        let mut candidates: SmallVec<[FeatureKey; 16]> = SmallVec::new();
        let mut push = |key: FeatureKey| {
            if !candidates.contains(&key) {
                candidates.push(key);
            }
        };
        for direction in Direction::ALL {
            let edge = BoardEdge::new(last, direction);
            if let Some(id) = self.paths.lookup(edge) {
                push(FeatureKey::path(id));
            }
            if let Some(id) = self.zones.lookup(edge) {
                push(FeatureKey::zone(id));
            }
        }
        for cell in std::iter::once(last).chain(last.surrounding()) {
            if let Some(id) = self.points.at(cell) {
                push(FeatureKey::point(id));
            }
        }

        candidates
            .into_iter()
            .filter_map(|key| self.close(key))
            .collect()
    }

    /// [`resolve_closures`](Self::resolve_closures), crediting each result
    /// through `sink` as well as returning it.
    pub fn settle<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) -> Vec<Closure> {
        let closures = self.resolve_closures();
        for closure in &closures {
            closure.apply(sink);
        }
        closures
    }

    /// Score `key` if it is closed and not yet settled.
    fn close(&mut self, key: FeatureKey) -> Option<Closure> {
        let rules = self.rules;
        let (score, markers) = match key.kind {
            FeatureKind::Path | FeatureKind::Zone => {
                let feature = self.linear_mut(key.kind).get_mut(key.id)?;
                if !feature.is_closed() || feature.settled {
                    return None;
                }
                feature.settled = true;
                let score = match key.kind {
                    FeatureKind::Path => rules.path_value(feature),
                    _ => rules.zone_value(feature),
                };
                (score, std::mem::take(&mut feature.markers))
            }
            FeatureKind::Point => {
                let point = self.points.get_mut(key.id)?;
                if !point.is_closed() || point.settled {
                    return None;
                }
                point.settled = true;
                (rules.point_value(point), std::mem::take(&mut point.markers))
            }
        };

        let credited = majority(&markers);
        debug!(
            feature = %key,
            score,
            markers = markers.len(),
            credited = credited.len(),
            "feature closed"
        );
        Some(Closure {
            feature: key,
            score,
            credited,
        })
    }

    // ── Queries ────────────────────────────────────────────────────

    /// The path feature on the `direction` edge of `cell`.
    pub fn find_path_feature(&self, cell: Cell, direction: Direction) -> Option<FeatureKey> {
        self.paths
            .lookup(BoardEdge::new(cell, direction))
            .map(FeatureKey::path)
    }

    /// The zone feature on the `direction` edge of `cell`.
    pub fn find_zone_feature(&self, cell: Cell, direction: Direction) -> Option<FeatureKey> {
        self.zones
            .lookup(BoardEdge::new(cell, direction))
            .map(FeatureKey::zone)
    }

    /// The point feature anchored at `cell`.
    pub fn find_point_feature(&self, cell: Cell) -> Option<FeatureKey> {
        self.points.at(cell).map(FeatureKey::point)
    }

    /// The key of the feature `key` now belongs to.
    ///
    /// Keys captured before a merge keep working everywhere, but two keys
    /// only compare equal once both are resolved.
    pub fn resolve(&self, key: FeatureKey) -> Option<FeatureKey> {
        match key.kind {
            FeatureKind::Path | FeatureKind::Zone => {
                let registry = self.linear(key.kind);
                registry.get(key.id)?;
                Some(FeatureKey {
                    kind: key.kind,
                    id: registry.find(key.id),
                })
            }
            FeatureKind::Point => self.points.get(key.id).map(|_| key),
        }
    }

    /// Borrow the feature behind `key`.
    pub fn feature(&self, key: FeatureKey) -> Option<FeatureRef<'_>> {
        match key.kind {
            FeatureKind::Path => self.paths.get(key.id).map(FeatureRef::Path),
            FeatureKind::Zone => self.zones.get(key.id).map(FeatureRef::Zone),
            FeatureKind::Point => self.points.get(key.id).map(FeatureRef::Point),
        }
    }

    /// Current value of the feature behind `key`, as it would score now.
    pub fn value(&self, key: FeatureKey) -> Option<u32> {
        self.feature(key).map(|f| self.rules.value(f))
    }

    /// The tile at `cell`.
    pub fn tile(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    /// Placed tiles in placement order.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, &Tile)> + '_ {
        self.tiles.iter().map(|(&cell, tile)| (cell, tile))
    }

    /// Number of placed tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been placed.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Cell of the most recent successful placement.
    pub fn last_placed(&self) -> Option<Cell> {
        self.last_placed
    }

    /// The scoring rules in force.
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Keys of every surviving feature of `kind`, in creation order.
    pub fn features(&self, kind: FeatureKind) -> Vec<FeatureKey> {
        match kind {
            FeatureKind::Path | FeatureKind::Zone => self
                .linear(kind)
                .roots()
                .map(|id| FeatureKey { kind, id })
                .collect(),
            FeatureKind::Point => (0..self.points.len() as u32)
                .map(|i| FeatureKey::point(FeatureId(i)))
                .collect(),
        }
    }

    fn linear(&self, kind: FeatureKind) -> &EdgeRegistry {
        match kind {
            FeatureKind::Path => &self.paths,
            FeatureKind::Zone => &self.zones,
            FeatureKind::Point => unreachable!("point features have no edge registry"),
        }
    }

    fn linear_mut(&mut self, kind: FeatureKind) -> &mut EdgeRegistry {
        match kind {
            FeatureKind::Path => &mut self.paths,
            FeatureKind::Zone => &mut self.zones,
            FeatureKind::Point => unreachable!("point features have no edge registry"),
        }
    }
}

/// Register a path or zone fragment at `cell` and connect each of its
/// edges to whatever faces it.
fn grow(registry: &mut EdgeRegistry, cell: Cell, directions: &[Direction], bonus: u32) {
    let kind = registry.kind();
    let id = registry.insert(cell, directions, bonus);
    debug!(%cell, %kind, feature = %id, edges = directions.len(), "feature created");

    for &direction in directions {
        match registry.connect(BoardEdge::new(cell, direction)) {
            Some(Connection::Joined { survivor, absorbed }) => {
                debug!(%kind, %survivor, %absorbed, %direction, "features merged");
            }
            Some(Connection::Looped(id)) => {
                debug!(%kind, feature = %id, %direction, "feature looped onto itself");
            }
            None => {}
        }
    }
}
