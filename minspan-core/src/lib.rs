//! Minspan core library.
//!
//! Computes minimum spanning trees and spanning forests over weighted
//! undirected graphs using Kruskal's greedy algorithm, backed by a
//! disjoint-set forest with path compression and union by rank.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod forest;
mod kruskal;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    forest::DisjointForest,
    kruskal::{Edge, SpanningForest, minimum_spanning_forest},
};
