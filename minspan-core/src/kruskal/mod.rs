//! Minimum spanning tree and spanning forest construction.
//!
//! Sequential Kruskal: validate the input, sort a decorated copy of the
//! edge list by `(weight, input position)`, then scan in ascending order
//! with a disjoint-set forest rejecting every edge that would close a
//! cycle. The scan is inherently sequential; each union changes the
//! outcome of subsequent cycle checks.

use std::{fmt, hash::Hash};

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result, display_name},
    forest::DisjointForest,
};

/// A weighted undirected edge between two vertex identifiers.
///
/// The pair is unordered; the stored orientation is only preserved for
/// presentation. Self-loops and parallel edges are legal inputs.
///
/// # Examples
/// ```
/// use minspan_core::Edge;
///
/// let edge = Edge::new("a", "b", 2.5);
/// assert_eq!(*edge.source(), "a");
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge between `source` and `target` with `weight`.
    #[must_use]
    pub const fn new(source: V, target: V, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the second endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning
/// tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<V> {
    edges: Vec<Edge<V>>,
    total_weight: f64,
    component_count: usize,
}

impl<V> SpanningForest<V> {
    /// Returns the selected edges in acceptance order: ascending weight,
    /// input order on ties, caller orientation preserved.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    /// An empty vertex set has zero components and is not a tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Edge decorated with dense vertex indices and its input position, the
/// explicit tie-break that keeps selection reproducible regardless of
/// the sort algorithm's stability.
struct ScanEdge {
    source: usize,
    target: usize,
    weight: f64,
    position: usize,
}

/// Computes a minimum spanning forest of the graph induced by `vertices`
/// and `edges`.
///
/// Every edge endpoint must appear in `vertices`; unknown endpoints are
/// rejected rather than silently registered, so a typo in an edge list
/// surfaces as an error instead of a phantom singleton component. The
/// scan discards self-loops (a vertex is always in its own set) and all
/// but the cheapest of any parallel bundle. A disconnected input yields
/// one tree per connected component; empty input yields an empty forest
/// with zero cost. The input collections are never mutated.
///
/// # Errors
///
/// Returns an error when:
/// - `vertices` contains the same identifier twice
/// - an edge references an identifier absent from `vertices`
/// - an edge weight is NaN or infinite
///
/// # Examples
/// ```
/// use minspan_core::{Edge, minimum_spanning_forest};
///
/// let edges = vec![
///     Edge::new("a", "b", 1.0),
///     Edge::new("b", "c", 2.0),
///     Edge::new("a", "c", 3.0),
/// ];
/// let forest = minimum_spanning_forest(["a", "b", "c"], &edges)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[instrument(
    name = "kruskal.minimum_spanning_forest",
    skip_all,
    fields(edge_count = edges.len()),
)]
pub fn minimum_spanning_forest<V>(
    vertices: impl IntoIterator<Item = V>,
    edges: &[Edge<V>],
) -> Result<SpanningForest<V>>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    let mut forest = DisjointForest::try_new(vertices)?;
    let mut scan = resolve_edges(&forest, edges)?;
    scan.sort_unstable_by(|left, right| {
        left.weight
            .total_cmp(&right.weight)
            .then_with(|| left.position.cmp(&right.position))
    });

    let mut selected = Vec::with_capacity(forest.len().saturating_sub(1));
    let mut total_weight = 0.0_f64;
    for entry in &scan {
        if forest.union_indices(entry.source, entry.target) {
            selected.push(edges[entry.position].clone());
            total_weight += entry.weight;
            if forest.components() == 1 {
                break;
            }
        }
    }

    debug!(
        selected = selected.len(),
        components = forest.components(),
        total_weight,
        "spanning forest complete"
    );

    Ok(SpanningForest {
        edges: selected,
        total_weight,
        component_count: forest.components(),
    })
}

/// Resolves endpoints to dense indices and validates weights. All input
/// errors surface here, before any edge is selected.
fn resolve_edges<V>(forest: &DisjointForest<V>, edges: &[Edge<V>]) -> Result<Vec<ScanEdge>>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    edges
        .iter()
        .enumerate()
        .map(|(position, edge)| {
            let source = forest.require(&edge.source)?;
            let target = forest.require(&edge.target)?;
            if !edge.weight.is_finite() {
                return Err(GraphError::InvalidWeight {
                    source: display_name(&edge.source),
                    target: display_name(&edge.target),
                    weight: edge.weight,
                });
            }
            Ok(ScanEdge {
                source,
                target,
                weight: edge.weight,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod property;
