//! Oracle equivalence for both algorithms.
//!
//! `connected_components` must agree with breadth-first search, and the
//! Kruskal forest must match the total weight and edge count Prim's
//! algorithm reports.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, connected_components, kruskal_mst};

use super::oracle::{bfs_components, prim_forest};
use super::types::GraphFixture;

/// Compares `connected_components` with the breadth-first oracle and with
/// the set count of a hand-driven [`DisjointSet`].
pub(super) fn run_components_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let mut actual = connected_components(&graph)
        .map_err(|err| TestCaseError::fail(format!("connected_components failed: {err}")))?;

    let covered: usize = actual.iter().map(Vec::len).sum();
    prop_assert_eq!(covered, graph.num_nodes(), "components must partition the vertices");

    for component in &mut actual {
        component.sort_unstable();
    }
    actual.sort_unstable();
    let expected = bfs_components(fixture);
    prop_assert_eq!(&actual, &expected, "distribution={:?}", fixture.distribution);

    let mut sets = DisjointSet::new();
    for vertex in graph.vertices() {
        sets.make_set(*vertex).expect("vertices are distinct");
    }
    for edge in graph.edges() {
        sets.union(edge.source(), edge.destination())
            .expect("edges reference vertices");
    }
    prop_assert_eq!(sets.num_sets(), actual.len());
    Ok(())
}

/// Compares the Kruskal forest with Prim's algorithm.
pub(super) fn run_forest_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let forest = kruskal_mst(&graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal_mst failed: {err}")))?;
    let oracle = prim_forest(fixture);

    prop_assert_eq!(
        forest.sum_of_weights(),
        oracle.total_weight,
        "distribution={:?}, nodes={}, edges={}",
        fixture.distribution,
        fixture.node_count,
        fixture.edges.len()
    );
    prop_assert_eq!(forest.num_edges(), oracle.edge_count);
    prop_assert_eq!(
        graph.num_nodes() - forest.num_edges(),
        oracle.component_count
    );
    Ok(())
}
