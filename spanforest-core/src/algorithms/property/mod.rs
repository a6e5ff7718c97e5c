//! Property-based tests for connected components and Kruskal's algorithm.
//!
//! Checks both algorithms against independent oracles (breadth-first search
//! for components, Prim's algorithm for spanning-forest weight) and
//! validates the structural invariants of the produced forest across
//! several graph shapes and weight distributions.

mod equivalence;
mod oracle;
mod types;
