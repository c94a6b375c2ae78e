//! Placeable tiles and their per-edge feature codes.

use smallvec::SmallVec;
use tessera_core::{Direction, FeatureKind, TileError};

use crate::fragment::Fragment;

/// Sorted multiset of the feature kinds touching one tile edge.
pub type EdgeCodes = SmallVec<[FeatureKind; 2]>;

/// A tile design: an ordered list of fragments.
///
/// Construction validates the fragments and derives, once, which feature
/// kinds reach each of the four edges. Two tiles can sit side by side only
/// if the facing edges carry the same multiset of kinds; keeping the codes
/// sorted makes that a plain slice comparison.
///
/// # Examples
///
/// ```
/// use tessera_core::{Direction, FeatureKind};
/// use tessera_tile::{Fragment, Tile};
///
/// let straight = Tile::new(vec![Fragment::path(&[Direction::North, Direction::South])]).unwrap();
/// assert_eq!(straight.edge_codes(Direction::North), &[FeatureKind::Path]);
/// assert!(straight.edge_codes(Direction::East).is_empty());
///
/// let turned = straight.rotated(1);
/// assert_eq!(turned.edge_codes(Direction::East), &[FeatureKind::Path]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    fragments: Vec<Fragment>,
    edges: [EdgeCodes; 4],
}

impl Tile {
    /// Build a tile from its fragments.
    ///
    /// Fails if a path or zone fragment touches no edge, lists a direction
    /// twice, or shares an edge with another fragment of the same kind. At
    /// most one point fragment is allowed.
    pub fn new(fragments: Vec<Fragment>) -> Result<Self, TileError> {
        let mut edges: [EdgeCodes; 4] = Default::default();
        let mut has_point = false;

        for fragment in &fragments {
            let kind = fragment.kind();
            if kind == FeatureKind::Point {
                if has_point {
                    return Err(TileError::PointClaimedTwice);
                }
                has_point = true;
            }
            let directions = fragment.directions();
            if kind != FeatureKind::Point && directions.is_empty() {
                return Err(TileError::EmptyFragment { kind });
            }
            for (i, &direction) in directions.iter().enumerate() {
                if directions[..i].contains(&direction) {
                    return Err(TileError::DuplicateDirection { kind, direction });
                }
                let codes = &mut edges[direction.index()];
                if codes.contains(&kind) {
                    return Err(TileError::EdgeClaimedTwice { kind, direction });
                }
                codes.push(kind);
            }
        }

        for codes in &mut edges {
            codes.sort_unstable();
        }

        Ok(Self { fragments, edges })
    }

    /// The fragments in their original order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Sorted feature kinds reaching the edge in `direction`.
    pub fn edge_codes(&self, direction: Direction) -> &[FeatureKind] {
        &self.edges[direction.index()]
    }

    /// Whether the tile carries a point fragment.
    pub fn has_point(&self) -> bool {
        self.fragments.iter().any(|f| matches!(f, Fragment::Point))
    }

    /// The same design turned clockwise by `steps` quarter turns.
    pub fn rotated(&self, steps: u8) -> Self {
        let fragments = self.fragments.iter().map(|f| f.rotated(steps)).collect();
        let mut edges: [EdgeCodes; 4] = Default::default();
        for direction in Direction::ALL {
            edges[direction.rotated(steps).index()] = self.edges[direction.index()].clone();
        }
        Self { fragments, edges }
    }
}
