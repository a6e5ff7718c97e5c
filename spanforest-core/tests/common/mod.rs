//! Graph builders shared by the integration tests.

use spanforest_core::{EdgeOptions, Graph};

/// Six integer vertices joined as `0-1-2` and `3-4`, with `5` isolated.
#[must_use]
pub fn components_graph() -> Graph<u32> {
    let mut graph = Graph::new();
    for vertex in 0..6 {
        graph.add_vertex(vertex).expect("vertices are distinct");
    }
    for (source, destination) in [(0, 1), (1, 2), (3, 4)] {
        graph
            .add_edge(&source, &destination, EdgeOptions::new())
            .expect("endpoints exist");
    }
    graph
}

/// The classic seven-vertex weighted graph `A..G` whose minimum spanning
/// tree weighs 39.
#[must_use]
pub fn weighted_letters_graph() -> Graph<char> {
    let mut graph = Graph::new();
    for vertex in 'A'..='G' {
        graph.add_vertex(vertex).expect("vertices are distinct");
    }
    let edges = [
        ('A', 'B', 7),
        ('A', 'D', 5),
        ('D', 'B', 9),
        ('C', 'B', 8),
        ('C', 'E', 5),
        ('D', 'E', 15),
        ('D', 'F', 6),
        ('F', 'E', 8),
        ('F', 'G', 11),
        ('G', 'E', 9),
        ('B', 'E', 7),
    ];
    for (source, destination, weight) in edges {
        graph
            .add_edge(
                &source,
                &destination,
                EdgeOptions::new().with_weight(weight),
            )
            .expect("endpoints exist");
    }
    graph
}
