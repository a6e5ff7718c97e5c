//! Minimum spanning forest construction via Kruskal's algorithm.

use std::{fmt::Debug, hash::Hash};

use tracing::{info, instrument, trace};

use crate::{DisjointSet, Edge, EdgeOptions, Graph, Result};

/// Builds a minimum spanning forest of `graph`.
///
/// The result holds every vertex of `graph` and, for each connected
/// component, an undirected spanning tree of minimum total weight. Edges
/// are scanned in ascending weight order; ties keep their insertion order.
/// An edge is kept only when its endpoints are still in different sets, so
/// self-loops and cycle-closing edges are skipped. The scan stops once all
/// vertices share one set.
///
/// Edge direction in the input is ignored.
///
/// # Errors
///
/// Returns [`crate::GraphError::DisjointSet`] if the union-find forest
/// rejects a vertex or edge, and [`crate::GraphError::NotFound`] if the
/// output graph rejects an endpoint. Neither happens for a graph built
/// through [`Graph::add_vertex`] and [`Graph::add_edge`].
///
/// # Examples
/// ```
/// use spanforest_core::{EdgeOptions, Graph, kruskal_mst};
///
/// let mut graph = Graph::new();
/// for vertex in ['a', 'b', 'c'] {
///     graph.add_vertex(vertex)?;
/// }
/// graph.add_edge(&'a', &'b', EdgeOptions::new().with_weight(1))?;
/// graph.add_edge(&'b', &'c', EdgeOptions::new().with_weight(2))?;
/// graph.add_edge(&'a', &'c', EdgeOptions::new().with_weight(3))?;
///
/// let forest = kruskal_mst(&graph)?;
/// assert_eq!(forest.num_edges(), 2);
/// assert_eq!(forest.sum_of_weights(), 3);
/// # Ok::<(), spanforest_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.kruskal_mst",
    err,
    skip(graph),
    fields(vertices = graph.num_nodes(), edges = graph.num_edges()),
)]
pub fn kruskal_mst<T>(graph: &Graph<T>) -> Result<Graph<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut forest = Graph::with_capacity(graph.num_nodes());
    let mut sets = DisjointSet::with_capacity(graph.num_nodes());
    for vertex in graph.vertices() {
        forest.add_vertex(vertex.clone())?;
        sets.make_set(vertex.clone())?;
    }

    let mut edges: Vec<&Edge<T>> = graph.edges().iter().collect();
    edges.sort_by_key(|edge| edge.weight());

    for edge in edges {
        if sets.num_sets() <= 1 {
            break;
        }

        let (source, destination) = (edge.source(), edge.destination());
        if sets.same_set(source, destination)? {
            trace!(?source, ?destination, weight = edge.weight(), "skipped cycle edge");
            continue;
        }

        forest.add_edge(
            source,
            destination,
            EdgeOptions::new().with_weight(edge.weight()),
        )?;
        sets.union(source, destination)?;
        trace!(?source, ?destination, weight = edge.weight(), "accepted edge");
    }

    info!(
        edges = forest.num_edges(),
        total_weight = forest.sum_of_weights(),
        components = sets.num_sets(),
        "minimum spanning forest computed"
    );
    Ok(forest)
}
