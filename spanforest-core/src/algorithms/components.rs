//! Connected-component discovery.

use std::{fmt::Debug, hash::Hash};

use tracing::{info, instrument};

use crate::{DisjointSet, Graph, Result};

/// Partitions the vertices of `graph` into connected components.
///
/// Edge direction is ignored, so directed graphs yield their weakly
/// connected components. Components are ordered by the insertion order of
/// their earliest vertex and list their members in insertion order.
///
/// # Errors
///
/// Returns [`crate::GraphError::DisjointSet`] if the union-find forest
/// rejects a vertex or edge, which indicates a graph whose edge list
/// references labels outside its vertex set.
///
/// # Examples
/// ```
/// use spanforest_core::{EdgeOptions, Graph, connected_components};
///
/// let mut graph = Graph::new();
/// for vertex in 0..6 {
///     graph.add_vertex(vertex)?;
/// }
/// graph.add_edge(&0, &1, EdgeOptions::new())?;
/// graph.add_edge(&1, &2, EdgeOptions::new())?;
/// graph.add_edge(&3, &4, EdgeOptions::new())?;
///
/// let components = connected_components(&graph)?;
/// assert_eq!(components, vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), spanforest_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.connected_components",
    err,
    skip(graph),
    fields(vertices = graph.num_nodes(), edges = graph.num_edges()),
)]
pub fn connected_components<T>(graph: &Graph<T>) -> Result<Vec<Vec<T>>>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut sets = DisjointSet::with_capacity(graph.num_nodes());
    for vertex in graph.vertices() {
        sets.make_set(vertex.clone())?;
    }
    for edge in graph.edges() {
        sets.union(edge.source(), edge.destination())?;
    }

    let components: Vec<Vec<T>> = sets
        .groups()
        .into_iter()
        .map(|(_, members)| members)
        .collect();
    info!(
        components = components.len(),
        "connected components computed"
    );
    Ok(components)
}
