//! Graph algorithms driven by a [`crate::DisjointSet`].
//!
//! Both algorithms borrow the input graph immutably, build a fresh
//! union-find forest over its vertices, and treat every edge as
//! undirected connectivity.

mod components;
mod kruskal;

pub use self::{components::connected_components, kruskal::kruskal_mst};

#[cfg(test)]
mod property;
