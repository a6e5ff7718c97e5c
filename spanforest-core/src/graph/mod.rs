//! Adjacency-list graph over hashable vertex labels.
//!
//! Every call to [`Graph::add_edge`] records one logical edge in the global
//! edge list. Undirected edges also place a synthesized reverse edge in the
//! destination's adjacency list, so adjacency lists are the source for
//! neighbour traversal while [`Graph::edges`] is the source for whole-graph
//! iteration.

mod edge;

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
};

use tracing::debug;

use crate::{Result, error::GraphError};

pub use self::edge::{Edge, EdgeOptions};

#[derive(Clone, Debug)]
struct Vertex<T> {
    label: T,
    neighbours: Vec<Edge<T>>,
}

/// A directed or undirected, weighted or unweighted graph.
///
/// # Examples
/// ```
/// use spanforest_core::{EdgeOptions, Graph};
///
/// let mut graph = Graph::new();
/// for vertex in ['a', 'b', 'c'] {
///     graph.add_vertex(vertex)?;
/// }
/// graph.add_edge(&'a', &'b', EdgeOptions::new().with_weight(3))?;
/// graph.add_edge(&'b', &'c', EdgeOptions::directed())?;
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.sum_of_weights(), 4);
/// assert_eq!(graph.neighbours(&'b')?.len(), 2);
/// assert!(graph.neighbours(&'c')?.is_empty());
/// # Ok::<(), spanforest_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<T> {
    index: HashMap<T, usize>,
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge<T>>,
    sum_of_weights: i128,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            sum_of_weights: 0,
        }
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            index: HashMap::with_capacity(vertices),
            vertices: Vec::with_capacity(vertices),
            ..Self::default()
        }
    }

    /// Registers `label` as a vertex with no incident edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateKey`] when `label` is already a vertex.
    /// The graph is left unchanged in that case.
    pub fn add_vertex(&mut self, label: T) -> Result<()> {
        let id = self.vertices.len();
        match self.index.entry(label) {
            Entry::Occupied(entry) => {
                debug!(label = ?entry.key(), "rejected duplicate vertex");
                Err(GraphError::DuplicateKey {
                    label: format!("{:?}", entry.key()),
                })
            }
            Entry::Vacant(entry) => {
                self.vertices.push(Vertex {
                    label: entry.key().clone(),
                    neighbours: Vec::new(),
                });
                entry.insert(id);
                Ok(())
            }
        }
    }

    /// Adds an edge from `source` to `destination`.
    ///
    /// The edge is appended to the adjacency list of `source` and to the
    /// global edge list. Unless `options` marks it directed, the reversed
    /// edge is also appended to the adjacency list of `destination`; it is
    /// not added to the global list. The weight sum grows by the edge weight
    /// once either way.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] when either endpoint is not a vertex.
    /// Nothing is recorded in that case.
    pub fn add_edge<Q>(&mut self, source: &Q, destination: &Q, options: EdgeOptions) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let source_id = self.id_of(source)?;
        let destination_id = self.id_of(destination)?;

        let edge = Edge::new(
            self.vertices[source_id].label.clone(),
            self.vertices[destination_id].label.clone(),
            options.weight(),
        );

        if !options.is_directed() {
            self.vertices[destination_id]
                .neighbours
                .push(edge.reversed());
        }
        self.vertices[source_id].neighbours.push(edge.clone());
        self.edges.push(edge);
        self.sum_of_weights += i128::from(options.weight());
        Ok(())
    }

    /// Returns the outgoing edges of `label`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] when `label` is not a vertex.
    pub fn neighbours<Q>(&self, label: &Q) -> Result<&[Edge<T>]>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let id = self.id_of(label)?;
        Ok(&self.vertices[id].neighbours)
    }

    /// Returns `true` when `label` is a vertex.
    #[must_use]
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(label)
    }

    /// Iterates over the vertex labels in insertion order.
    #[must_use]
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.vertices.iter().map(|vertex| &vertex.label)
    }

    /// Returns every edge added to the graph, one entry per `add_edge` call.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[Edge<T>] { self.edges.as_slice() }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_nodes(&self) -> usize { self.vertices.len() }

    /// Returns the number of logical edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_edges(&self) -> usize { self.edges.len() }

    /// Returns the sum of all edge weights; equals [`Graph::num_edges`] for
    /// unweighted graphs.
    ///
    /// The sum is kept in `i128`, so it is exact for any number of `i64`
    /// weights that fits in memory and independent of insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sum_of_weights(&self) -> i128 { self.sum_of_weights }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.vertices.is_empty() }

    fn id_of<Q>(&self, label: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NotFound {
                label: format!("{label:?}"),
            })
    }
}
