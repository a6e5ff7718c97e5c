//! spanforest core library.
//!
//! Provides a generic disjoint-set forest with path compression and union by
//! rank, an adjacency-list [`Graph`], and two algorithms built on them:
//! [`connected_components`] and [`kruskal_mst`].

mod algorithms;
mod disjoint_set;
mod error;
mod graph;
#[cfg(test)]
mod test_utils;

pub use crate::{
    algorithms::{connected_components, kruskal_mst},
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Edge, EdgeOptions, Graph},
};
