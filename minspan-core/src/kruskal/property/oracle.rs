//! Reference oracles for the spanning forest property tests.
//!
//! Two trusted implementations, both deliberately independent of the
//! production forest: a Kruskal scan over a union-find with path
//! compression disabled (for the differential property), and an
//! exhaustive spanning-forest enumeration for small graphs (for the
//! minimality property).

use crate::Edge;

use super::helpers::count_components;

/// Kruskal with the same `(weight, position)` sort key and the same
/// union-by-rank tie-break as the production builder, but a `find` that
/// never rewrites parent links. Disabling compression must change
/// performance only, never the selection.
pub(super) fn kruskal_without_compression(
    vertex_count: usize,
    edges: &[Edge<usize>],
) -> (Vec<Edge<usize>>, f64) {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        edges[a]
            .weight()
            .total_cmp(&edges[b].weight())
            .then_with(|| a.cmp(&b))
    });

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<u8> = vec![0; vertex_count];
    let mut selected = Vec::new();
    let mut total = 0.0_f64;

    for position in order {
        let edge = &edges[position];
        let mut left = plain_find(&parent, *edge.source());
        let mut right = plain_find(&parent, *edge.target());
        if left == right {
            continue;
        }
        if rank[left] < rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        parent[right] = left;
        if rank[left] == rank[right] {
            rank[left] = rank[left].saturating_add(1);
        }
        selected.push(edge.clone());
        total += edge.weight();
    }

    (selected, total)
}

/// Root lookup without any parent rewriting.
fn plain_find(parent: &[usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        current = parent[current];
    }
    current
}

/// Minimum total weight over every spanning forest of the graph, found
/// by enumerating all `2^m` edge subsets. A subset qualifies when it is
/// acyclic and connects exactly the components the full edge set does.
/// Only feasible for the small fixtures.
pub(super) fn brute_force_minimum_weight(vertex_count: usize, edges: &[Edge<usize>]) -> f64 {
    let required = vertex_count - count_components(vertex_count, edges);
    let mut best = f64::INFINITY;

    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != required {
            continue;
        }
        if let Some(weight) = forest_weight(vertex_count, edges, mask) {
            best = best.min(weight);
        }
    }

    if required == 0 { 0.0 } else { best }
}

/// Total weight of the subset when it is acyclic, `None` when any edge
/// closes a cycle (self-loops always do).
fn forest_weight(vertex_count: usize, edges: &[Edge<usize>], mask: u32) -> Option<f64> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total = 0.0_f64;

    for (position, edge) in edges.iter().enumerate() {
        if mask & (1 << position) == 0 {
            continue;
        }
        let left = plain_find(&parent, *edge.source());
        let right = plain_find(&parent, *edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        total += edge.weight();
    }

    Some(total)
}
