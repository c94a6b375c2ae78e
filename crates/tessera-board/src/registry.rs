//! Union-find registry of linear features keyed by board edge.
//!
//! Every path or zone fragment placed on the board becomes a fresh
//! [`LinearFeature`] in the arena, and each of its edges is recorded in the
//! edge table. When the fragment's edge meets a neighbour's edge carrying a
//! feature of the same kind, the two features are unioned: the smaller
//! component is folded into the larger, and its ID is redirected to the
//! survivor. IDs are never reused, so an edge or ID recorded before a merge
//! keeps resolving to whichever feature absorbed it.
//!
//! ```text
//! edges:  (0,0)N ─► #0 ─┐
//!         (0,1)S ─► #1 ─┴─► parent #0   (after the tile at (0,1) joins)
//! ```

use indexmap::IndexMap;
use tessera_core::{BoardEdge, Cell, Direction, FeatureId, FeatureKind};

use crate::feature::LinearFeature;

/// Outcome of bringing one edge pair into contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    /// Two distinct features were merged.
    Joined {
        /// The feature that remains.
        survivor: FeatureId,
        /// The feature folded into it.
        absorbed: FeatureId,
    },
    /// Both edges already belonged to the same feature, as when a tile
    /// closes a loop. No merge took place.
    Looped(FeatureId),
}

impl Connection {
    /// The feature both edges belong to after the connection.
    pub fn survivor(self) -> FeatureId {
        match self {
            Self::Joined { survivor, .. } => survivor,
            Self::Looped(id) => id,
        }
    }
}

/// Arena of one kind of linear feature plus the edge lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRegistry {
    kind: FeatureKind,
    features: Vec<LinearFeature>,
    parent: Vec<FeatureId>,
    size: Vec<u32>,
    edges: IndexMap<BoardEdge, FeatureId>,
}

impl EdgeRegistry {
    /// Create an empty registry for `kind` (path or zone).
    pub fn new(kind: FeatureKind) -> Self {
        debug_assert!(kind != FeatureKind::Point, "point features use PointRegistry");
        Self {
            kind,
            features: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            edges: IndexMap::new(),
        }
    }

    /// The feature kind this registry holds.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Total IDs ever allocated, including absorbed ones.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature has been created yet.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of registered board edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Create a feature for a fragment at `cell` reaching `directions`.
    ///
    /// The new feature's open edges are exactly those directions on
    /// `cell`. It is not yet connected to anything; call
    /// [`connect`](Self::connect) for each edge afterwards.
    pub fn insert(&mut self, cell: Cell, directions: &[Direction], bonus: u32) -> FeatureId {
        let id = FeatureId(self.features.len() as u32);
        let open: Vec<BoardEdge> = directions
            .iter()
            .map(|&d| BoardEdge::new(cell, d))
            .collect();
        for &edge in &open {
            let previous = self.edges.insert(edge, id);
            debug_assert!(previous.is_none(), "{} edge {edge} claimed twice", self.kind);
        }
        self.features.push(LinearFeature::new(self.kind, cell, open, bonus));
        self.parent.push(id);
        self.size.push(1);
        id
    }

    /// Follow redirections from `id` to the surviving feature.
    pub fn find(&self, id: FeatureId) -> FeatureId {
        let mut current = id;
        loop {
            let next = self.parent[current.index()];
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Like [`find`](Self::find), pointing every visited ID straight at
    /// the root on the way out.
    fn find_compressing(&mut self, id: FeatureId) -> FeatureId {
        let root = self.find(id);
        let mut current = id;
        while current != root {
            let next = self.parent[current.index()];
            self.parent[current.index()] = root;
            current = next;
        }
        root
    }

    /// The surviving feature registered on `edge`, if any.
    pub fn lookup(&self, edge: BoardEdge) -> Option<FeatureId> {
        self.edges.get(&edge).map(|&id| self.find(id))
    }

    /// The surviving feature for `id`. `None` if `id` was never allocated.
    pub fn get(&self, id: FeatureId) -> Option<&LinearFeature> {
        if id.index() >= self.features.len() {
            return None;
        }
        Some(&self.features[self.find(id).index()])
    }

    /// Mutable access to the surviving feature for `id`.
    ///
    /// Does not compress paths, so a rejected marker leaves the parent
    /// pointers untouched.
    pub(crate) fn get_mut(&mut self, id: FeatureId) -> Option<&mut LinearFeature> {
        if id.index() >= self.features.len() {
            return None;
        }
        let root = self.find(id);
        Some(&mut self.features[root.index()])
    }

    /// IDs of all surviving features, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, p)| p.index() == i)
            .map(|(_, &p)| p)
    }

    /// Bring `edge` into contact with the edge facing it.
    ///
    /// `edge` must already be registered. If the facing edge carries a
    /// feature of this kind, the two features are merged (or found to be
    /// the same one) and the touching pair of edges is removed from the
    /// open list. Returns `None` when nothing faces `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` has no registered feature; placement always
    /// registers a fragment's edges before connecting them.
    pub fn connect(&mut self, edge: BoardEdge) -> Option<Connection> {
        let own = match self.edges.get(&edge) {
            Some(&id) => id,
            None => panic!("no {} feature registered at {edge}", self.kind),
        };
        let facing = edge.facing();
        let other = *self.edges.get(&facing)?;

        let a = self.find_compressing(own);
        let b = self.find_compressing(other);
        let connection = if a == b {
            Connection::Looped(a)
        } else {
            self.union(a, b)
        };

        let survivor = &mut self.features[connection.survivor().index()];
        let cancelled_own = survivor.cancel(edge);
        let cancelled_facing = survivor.cancel(facing);
        debug_assert!(
            cancelled_own && cancelled_facing,
            "edges {edge} and {facing} were not both open"
        );
        Some(connection)
    }

    /// Merge two distinct roots, folding the smaller into the larger.
    fn union(&mut self, a: FeatureId, b: FeatureId) -> Connection {
        let (survivor, absorbed) = if self.size[a.index()] < self.size[b.index()] {
            (b, a)
        } else {
            (a, b)
        };

        let (kept, folded) = pair_mut(&mut self.features, survivor.index(), absorbed.index());
        kept.absorb(folded);

        self.parent[absorbed.index()] = survivor;
        self.size[survivor.index()] += self.size[absorbed.index()];

        Connection::Joined { survivor, absorbed }
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::PlayerId;
    use Direction::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn e(x: i32, y: i32, d: Direction) -> BoardEdge {
        BoardEdge::new(c(x, y), d)
    }

    #[test]
    fn insert_registers_every_edge() {
        let mut reg = EdgeRegistry::new(FeatureKind::Path);
        let id = reg.insert(c(0, 0), &[North, South], 0);
        assert_eq!(reg.lookup(e(0, 0, North)), Some(id));
        assert_eq!(reg.lookup(e(0, 0, South)), Some(id));
        assert_eq!(reg.lookup(e(0, 0, East)), None);
        assert_eq!(reg.get(id).unwrap().open_edges().len(), 2);
        assert_eq!(reg.edge_count(), 2);
    }

    #[test]
    fn connect_without_neighbour_is_a_no_op() {
        let mut reg = EdgeRegistry::new(FeatureKind::Path);
        let id = reg.insert(c(0, 0), &[North], 0);
        assert_eq!(reg.connect(e(0, 0, North)), None);
        assert_eq!(reg.get(id).unwrap().open_edges(), &[e(0, 0, North)]);
    }

    #[test]
    fn connect_merges_and_cancels_the_touching_pair() {
        let mut reg = EdgeRegistry::new(FeatureKind::Zone);
        let a = reg.insert(c(0, 0), &[North, South], 1);
        reg.features[a.index()].markers.push(PlayerId(1));
        let b = reg.insert(c(0, 1), &[South, East], 0);

        let joined = reg.connect(e(0, 1, South)).unwrap();
        assert!(matches!(joined, Connection::Joined { .. }));

        let survivor = reg.lookup(e(0, 1, East)).unwrap();
        assert_eq!(reg.lookup(e(0, 0, South)), Some(survivor));
        assert_eq!(reg.find(a), reg.find(b));

        let f = reg.get(survivor).unwrap();
        assert_eq!(f.cells().len(), 2);
        assert_eq!(f.open_edges().len(), 2 + 2 - 2);
        assert!(f.open_edges().contains(&e(0, 0, South)));
        assert!(f.open_edges().contains(&e(0, 1, East)));
        assert_eq!(f.bonus(), 1);
        assert_eq!(f.markers(), &[PlayerId(1)]);
        assert_eq!(reg.roots().count(), 1);
    }

    #[test]
    fn loop_closing_cancels_without_merging() {
        // Four corners around a 2x2 block: (0,0)N-E, (1,0)W-N, (1,1)S-W, (0,1)E-S.
        let mut reg = EdgeRegistry::new(FeatureKind::Path);
        reg.insert(c(0, 0), &[North, East], 0);
        reg.insert(c(1, 0), &[West, North], 0);
        reg.connect(e(1, 0, West));
        reg.connect(e(1, 0, North));
        reg.insert(c(1, 1), &[South, West], 0);
        reg.connect(e(1, 1, South));
        reg.connect(e(1, 1, West));
        reg.insert(c(0, 1), &[East, South], 0);
        let first = reg.connect(e(0, 1, East)).unwrap();
        assert!(matches!(first, Connection::Joined { .. }));
        let open_before = reg.get(first.survivor()).unwrap().open_edges().len();
        assert_eq!(open_before, 2);

        let second = reg.connect(e(0, 1, South)).unwrap();
        assert_eq!(second, Connection::Looped(first.survivor()));
        let f = reg.get(second.survivor()).unwrap();
        assert!(f.is_closed());
        assert_eq!(f.cells().len(), 4);
        // Interior edges stay registered after they are cancelled.
        assert_eq!(reg.edge_count(), 8);
    }

    #[test]
    fn absorbed_ids_resolve_to_the_survivor() {
        let mut reg = EdgeRegistry::new(FeatureKind::Path);
        let ids: Vec<_> = (0..5)
            .map(|x| reg.insert(c(x, 0), &[East, West], 0))
            .collect();
        for x in 1..5 {
            reg.connect(e(x, 0, West));
        }
        let root = reg.find(ids[0]);
        for id in &ids {
            assert_eq!(reg.find(*id), root);
            assert_eq!(reg.get(*id).unwrap().cells().len(), 5);
        }
        assert_eq!(reg.get(root).unwrap().open_edges().len(), 2);
    }

    #[test]
    fn unknown_id_is_absent() {
        let reg = EdgeRegistry::new(FeatureKind::Zone);
        assert!(reg.get(FeatureId(0)).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    #[should_panic(expected = "no path feature registered")]
    fn connecting_an_unregistered_edge_panics() {
        let mut reg = EdgeRegistry::new(FeatureKind::Path);
        reg.connect(e(0, 0, North));
    }
}
