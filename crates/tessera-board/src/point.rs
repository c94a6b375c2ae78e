//! Registry of point features, keyed by anchor cell.

use indexmap::IndexMap;
use tessera_core::{Cell, FeatureId};

use crate::feature::PointFeature;

/// Arena of point features plus the anchor lookup table.
///
/// Point features never merge, so there is no redirection: an ID maps
/// straight to its slot for the life of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointRegistry {
    features: Vec<PointFeature>,
    anchors: IndexMap<Cell, FeatureId>,
}

impl PointRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of point features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no point feature exists.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Create a point feature at `anchor` with `neighbours` filled cells
    /// already around it.
    pub fn insert(&mut self, anchor: Cell, neighbours: u8) -> FeatureId {
        let id = FeatureId(self.features.len() as u32);
        let previous = self.anchors.insert(anchor, id);
        debug_assert!(previous.is_none(), "two point features at {anchor}");
        self.features.push(PointFeature::new(anchor, neighbours));
        id
    }

    /// The point feature anchored at `cell`, if any.
    pub fn at(&self, cell: Cell) -> Option<FeatureId> {
        self.anchors.get(&cell).copied()
    }

    /// The point feature for `id`.
    pub fn get(&self, id: FeatureId) -> Option<&PointFeature> {
        self.features.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: FeatureId) -> Option<&mut PointFeature> {
        self.features.get_mut(id.index())
    }

    /// Record that `cell` has just been filled.
    ///
    /// Every point anchored in the 8-neighbourhood of `cell` gains one
    /// filled neighbour. Returns how many points were touched.
    pub fn note_filled(&mut self, cell: Cell) -> usize {
        let mut touched = 0;
        for around in cell.surrounding() {
            if let Some(&id) = self.anchors.get(&around) {
                let point = &mut self.features[id.index()];
                debug_assert!(point.neighbours < 8, "point at {around} over-filled");
                point.neighbours += 1;
                touched += 1;
            }
        }
        touched
    }
}
