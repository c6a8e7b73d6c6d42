//! Disjoint-set forest keyed by opaque vertex identifiers.
//!
//! Each registered vertex receives a dense integer index at
//! initialisation; the `parent`/`rank` tables are flat arrays over those
//! indices, with a separate identifier-to-index lookup. This keeps
//! hashing out of the hot path while the public surface stays keyed by
//! identifier. With path compression and union by rank, any sequence of
//! `m` operations over `n` vertices runs in `O(m · α(n))` time.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::{GraphError, Result, display_name};

/// Union-find over a fixed universe of vertices.
///
/// The parent relation is always a forest: every chain of parent links
/// terminates at a root whose parent is itself. `find` rewrites visited
/// parents to point at the root as a side effect; this changes only how
/// the partition is represented, never the partition itself.
///
/// # Examples
/// ```
/// use minspan_core::DisjointForest;
///
/// let mut forest = DisjointForest::try_new(["a", "b", "c"])?;
/// assert_eq!(forest.components(), 3);
/// assert!(forest.union(&"a", &"b")?);
/// assert!(!forest.union(&"b", &"a")?);
/// assert_eq!(forest.components(), 2);
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointForest<V> {
    vertices: Vec<V>,
    lookup: HashMap<V, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<V> DisjointForest<V>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    /// Registers every vertex as a singleton set.
    ///
    /// Duplicates are rejected rather than silently deduplicated so a
    /// repeated identifier in the caller's vertex set surfaces as a bug
    /// instead of vanishing.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when the same identifier
    /// appears twice.
    pub fn try_new(vertices: impl IntoIterator<Item = V>) -> Result<Self> {
        let iter = vertices.into_iter();
        let (lower, _) = iter.size_hint();
        let mut forest = Self {
            vertices: Vec::with_capacity(lower),
            lookup: HashMap::with_capacity(lower),
            parent: Vec::with_capacity(lower),
            rank: Vec::with_capacity(lower),
            components: 0,
        };
        for vertex in iter {
            forest.register(vertex)?;
        }
        Ok(forest)
    }

    fn register(&mut self, vertex: V) -> Result<()> {
        let index = self.vertices.len();
        if self.lookup.insert(vertex.clone(), index).is_some() {
            return Err(GraphError::DuplicateVertex {
                vertex: display_name(&vertex),
            });
        }
        self.vertices.push(vertex);
        self.parent.push(index);
        self.rank.push(0);
        self.components += 1;
        Ok(())
    }

    /// Returns the representative of `vertex`'s set.
    ///
    /// Repeated calls with no intervening [`Self::union`] return the same
    /// representative.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` was not
    /// registered at construction.
    pub fn find(&mut self, vertex: &V) -> Result<&V> {
        let index = self.require(vertex)?;
        let root = self.find_index(index);
        Ok(&self.vertices[root])
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when the sets were distinct and are now merged, or
    /// `false` when the vertices were already in the same set (the edge
    /// between them would close a cycle). `union(x, x)` always returns
    /// `false` and leaves the structure untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either identifier was
    /// not registered at construction.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool> {
        let left = self.require(left)?;
        let right = self.require(right)?;
        Ok(self.union_indices(left, right))
    }

    /// Reports whether `left` and `right` are currently in the same set.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either identifier was
    /// not registered at construction.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool> {
        let left = self.require(left)?;
        let right = self.require(right)?;
        Ok(self.find_index(left) == self.find_index(right))
    }

    /// Returns `true` when `vertex` was registered at construction.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.lookup.contains_key(vertex)
    }

    pub(crate) fn require(&self, vertex: &V) -> Result<usize> {
        self.lookup
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: display_name(vertex),
            })
    }
}

impl<V> DisjointForest<V> {
    /// Returns the number of registered vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when no vertices are registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Returns the number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Walks to the root, then rewrites every visited parent to point at
    /// it. Iterative on purpose: a chain of length `n` must not recurse.
    pub(crate) fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Union by rank over dense indices. The first argument's root wins
    /// rank ties, so merge order is deterministic.
    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_index(left);
        let mut right = self.find_index(right);
        if left == right {
            return false;
        }
        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
