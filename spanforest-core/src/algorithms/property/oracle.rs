//! Reference implementations used as oracles by the property tests.
//!
//! Neither oracle touches [`crate::DisjointSet`]: components come from a
//! breadth-first search and spanning-forest weights from Prim's algorithm
//! on a dense weight matrix.

use std::collections::VecDeque;

use super::types::{GraphFixture, slot};

/// Summary of a minimum spanning forest computed by the oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: i128,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Connected components (direction ignored), each sorted, sorted overall.
pub(super) fn bfs_components(fixture: &GraphFixture) -> Vec<Vec<u32>> {
    let node_count = fixture.vertex_count();
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in &fixture.edges {
        adjacency[slot(edge.source)].push(edge.destination);
        adjacency[slot(edge.destination)].push(edge.source);
    }

    let mut seen = vec![false; node_count];
    let mut components = Vec::new();
    for start in 0..fixture.node_count {
        if seen[slot(start)] {
            continue;
        }
        seen[slot(start)] = true;

        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &next in &adjacency[slot(vertex)] {
                if !seen[slot(next)] {
                    seen[slot(next)] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    components.sort_unstable();
    components
}

/// Minimum spanning forest via Prim's algorithm run from every unvisited
/// vertex. Self-loops are ignored and parallel edges collapse to their
/// cheapest weight.
pub(super) fn prim_forest(fixture: &GraphFixture) -> OracleForest {
    let node_count = fixture.vertex_count();
    let mut weights: Vec<Vec<Option<i64>>> = vec![vec![None; node_count]; node_count];
    for edge in &fixture.edges {
        let (source, destination) = (slot(edge.source), slot(edge.destination));
        if source == destination {
            continue;
        }
        for (row, column) in [(source, destination), (destination, source)] {
            let cell = &mut weights[row][column];
            *cell = Some(cell.map_or(edge.weight, |current| current.min(edge.weight)));
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut total_weight = 0i128;
    let mut edge_count = 0usize;
    let mut component_count = 0usize;

    for root in 0..node_count {
        if in_tree[root] {
            continue;
        }
        component_count += 1;

        let mut best: Vec<Option<i64>> = vec![None; node_count];
        best[root] = Some(0);
        loop {
            let next = (0..node_count)
                .filter(|&vertex| !in_tree[vertex])
                .filter_map(|vertex| best[vertex].map(|weight| (weight, vertex)))
                .min();
            let Some((weight, vertex)) = next else {
                break;
            };

            in_tree[vertex] = true;
            if vertex != root {
                total_weight += i128::from(weight);
                edge_count += 1;
            }
            for (other, candidate) in weights[vertex].iter().enumerate() {
                if let Some(candidate) = *candidate {
                    if !in_tree[other] && best[other].is_none_or(|current| candidate < current) {
                        best[other] = Some(candidate);
                    }
                }
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}
