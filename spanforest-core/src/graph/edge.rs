//! Edge values and per-edge configuration.

use std::fmt;

/// A weighted edge from `source` to `destination`.
///
/// Edges are immutable once created; [`Edge::reversed`] yields a new edge
/// rather than flipping this one.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge<T> {
    source: T,
    destination: T,
    weight: i64,
}

impl<T> Edge<T> {
    /// Creates an edge with an explicit weight.
    #[must_use]
    pub const fn new(source: T, destination: T, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the tail vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &T { &self.source }

    /// Returns the head vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> &T { &self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns a copy of this edge with the endpoints swapped.
    ///
    /// # Examples
    /// ```
    /// use spanforest_core::Edge;
    ///
    /// let edge = Edge::new('a', 'b', 4);
    /// let back = edge.reversed();
    /// assert_eq!((*back.source(), *back.destination(), back.weight()), ('b', 'a', 4));
    /// ```
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source, self.destination, self.weight
        )
    }
}

/// Options applied by [`crate::Graph::add_edge`].
///
/// Defaults to an undirected edge of weight 1.
///
/// # Examples
/// ```
/// use spanforest_core::EdgeOptions;
///
/// let options = EdgeOptions::new().with_weight(7);
/// assert_eq!(options.weight(), 7);
/// assert!(!options.is_directed());
///
/// let arc = EdgeOptions::directed();
/// assert_eq!(arc.weight(), 1);
/// assert!(arc.is_directed());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeOptions {
    weight: i64,
    directed: bool,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeOptions {
    /// Creates options for an undirected edge of weight 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weight: 1,
            directed: false,
        }
    }

    /// Creates options for a directed edge of weight 1.
    #[must_use]
    pub const fn directed() -> Self {
        Self::new().with_directed(true)
    }

    /// Overrides the edge weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets whether the edge is directed.
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns the configured weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when only the forward direction is recorded.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_directed(&self) -> bool { self.directed }
}
