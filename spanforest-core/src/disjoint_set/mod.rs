//! Disjoint-set (union-find) forest over arbitrary hashable labels.
//!
//! Nodes live in a flat arena and refer to their parent by index; a node is
//! a root (its set's representative) when its parent index equals its own
//! index. Lookups use path compression and merges use union by rank, giving
//! near-constant amortised cost per operation.

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
};

use tracing::debug;

use crate::error::DisjointSetError;

#[derive(Clone, Debug)]
struct Node<T> {
    label: T,
    parent: usize,
    rank: usize,
}

/// A partition of labels into disjoint sets.
///
/// # Examples
/// ```
/// use spanforest_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// for label in ["a", "b", "c"] {
///     sets.make_set(label)?;
/// }
/// assert!(sets.union(&"a", &"b")?);
/// assert!(sets.same_set(&"a", &"b")?);
/// assert!(!sets.same_set(&"a", &"c")?);
/// assert_eq!(sets.num_sets(), 2);
/// # Ok::<(), spanforest_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    index: HashMap<T, usize>,
    nodes: Vec<Node<T>>,
    num_sets: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            num_sets: 0,
        }
    }
}

impl<T> DisjointSet<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` labels.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            num_sets: 0,
        }
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_sets(&self) -> usize { self.num_sets }

    /// Returns the number of labels tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.nodes.len() }

    /// Returns `true` when no label has been inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns `true` when `value` owns a node.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Inserts `value` as a new singleton set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::DuplicateKey`] when `value` is already
    /// present. The structure is left unchanged in that case.
    pub fn make_set(&mut self, value: T) -> Result<(), DisjointSetError> {
        let id = self.nodes.len();
        match self.index.entry(value) {
            Entry::Occupied(entry) => {
                debug!(label = ?entry.key(), "rejected duplicate disjoint-set label");
                Err(DisjointSetError::DuplicateKey {
                    label: format!("{:?}", entry.key()),
                })
            }
            Entry::Vacant(entry) => {
                self.nodes.push(Node {
                    label: entry.key().clone(),
                    parent: id,
                    rank: 0,
                });
                entry.insert(id);
                self.num_sets += 1;
                Ok(())
            }
        }
    }

    /// Returns the representative label of the set containing `value`.
    ///
    /// Every node visited on the way to the root is re-pointed at the root.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NotFound`] when `value` is absent.
    pub fn find_set<Q>(&mut self, value: &Q) -> Result<T, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let id = self.id_of(value)?;
        let root = self.compress(id);
        Ok(self.nodes[root].label.clone())
    }

    /// Returns `true` when `first` and `second` share a representative.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NotFound`] when either label is absent.
    pub fn same_set<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<bool, DisjointSetError>
    where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Hash + Eq + Debug + ?Sized,
        Q2: Hash + Eq + Debug + ?Sized,
    {
        let first_id = self.id_of(first)?;
        let second_id = self.id_of(second)?;
        Ok(self.compress(first_id) == self.compress(second_id))
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// Returns `false` without touching the set count when both labels
    /// already share a set. Otherwise the root with the smaller rank is
    /// attached beneath the other; on equal ranks the root of `first`
    /// becomes the child and the root of `second` gains one rank.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NotFound`] when either label is absent.
    /// Both labels are resolved before any node is modified.
    pub fn union<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<bool, DisjointSetError>
    where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Hash + Eq + Debug + ?Sized,
        Q2: Hash + Eq + Debug + ?Sized,
    {
        let first_id = self.id_of(first)?;
        let second_id = self.id_of(second)?;

        let first_root = self.compress(first_id);
        let second_root = self.compress(second_id);
        if first_root == second_root {
            return Ok(false);
        }

        self.link(first_root, second_root);
        self.num_sets -= 1;
        Ok(true)
    }

    /// Groups every label by its current representative.
    ///
    /// Members of each group are listed in insertion order.
    #[must_use]
    pub fn sets(&self) -> HashMap<T, Vec<T>> {
        self.groups().into_iter().collect()
    }

    /// Returns `(representative, members)` pairs ordered by the first
    /// insertion of any member, with members in insertion order.
    ///
    /// Unlike [`DisjointSet::find_set`] this does not compress paths, so it
    /// only needs a shared borrow.
    #[must_use]
    pub fn groups(&self) -> Vec<(T, Vec<T>)> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::with_capacity(self.num_sets);
        let mut groups: Vec<(T, Vec<T>)> = Vec::with_capacity(self.num_sets);

        for (id, node) in self.nodes.iter().enumerate() {
            let root = self.root_of(id);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push((self.nodes[root].label.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(node.label.clone());
        }

        groups
    }

    fn id_of<Q>(&self, value: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| DisjointSetError::NotFound {
                label: format!("{value:?}"),
            })
    }

    fn root_of(&self, id: usize) -> usize {
        let mut current = id;
        loop {
            let parent = self.nodes[current].parent;
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    fn compress(&mut self, id: usize) -> usize {
        let root = self.root_of(id);
        let mut current = id;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }
        root
    }

    fn link(&mut self, first_root: usize, second_root: usize) {
        let first_rank = self.nodes[first_root].rank;
        let second_rank = self.nodes[second_root].rank;

        let (parent, child) = choose_parent_child(first_root, second_root, first_rank, second_rank);
        self.nodes[child].parent = parent;

        if first_rank == second_rank {
            self.nodes[parent].rank += 1;
        }
    }

    #[cfg(test)]
    fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).map(|&id| self.nodes[id].rank)
    }

    #[cfg(test)]
    fn parent_of<Q>(&self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(value)?;
        Some(self.nodes[self.nodes[id].parent].label.clone())
    }
}

/// Ties favour the second root as parent.
const fn choose_parent_child(
    first_root: usize,
    second_root: usize,
    first_rank: usize,
    second_rank: usize,
) -> (usize, usize) {
    if first_rank > second_rank {
        (first_root, second_root)
    } else {
        (second_root, first_root)
    }
}
