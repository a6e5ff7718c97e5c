//! Fixture types shared by the property strategies and runners.

use crate::{EdgeOptions, Graph};

/// Shape and weight pattern of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the minimum forest is unique.
    Unique,
    /// Weights drawn from a tiny range, stressing tie handling.
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges (self-loops
    /// included).
    Sparse,
    /// Near-complete graph with negative and positive weights.
    Dense,
    /// Several blocks with no edges between them.
    Disconnected,
    /// Random mix of directed and undirected edges in either orientation.
    Directed,
}

/// A single generated edge.
#[derive(Clone, Copy, Debug)]
pub(super) struct FixtureEdge {
    pub source: u32,
    pub destination: u32,
    pub weight: i64,
    pub directed: bool,
}

/// A generated graph plus the distribution it was drawn from, kept for
/// failure diagnostics.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Vertices are labelled `0..node_count`.
    pub node_count: u32,
    pub edges: Vec<FixtureEdge>,
    pub distribution: WeightDistribution,
}

/// Converts a fixture vertex label into a table index.
pub(super) fn slot(vertex: u32) -> usize {
    usize::try_from(vertex).expect("u32 vertex labels fit in usize")
}

impl GraphFixture {
    /// Number of vertices as a table length.
    pub(super) fn vertex_count(&self) -> usize {
        slot(self.node_count)
    }

    /// Materialises the fixture as a [`Graph`].
    pub(super) fn build(&self) -> Graph<u32> {
        let mut graph = Graph::with_capacity(self.vertex_count());
        for vertex in 0..self.node_count {
            graph.add_vertex(vertex).expect("fixture vertices are distinct");
        }
        for edge in &self.edges {
            graph
                .add_edge(
                    &edge.source,
                    &edge.destination,
                    EdgeOptions::new()
                        .with_weight(edge.weight)
                        .with_directed(edge.directed),
                )
                .expect("fixture edges reference fixture vertices");
        }
        graph
    }
}
