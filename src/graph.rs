use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

use crate::error::GraphError;

/// Default maximum number of vertices a graph can hold.
pub const MAXIMUM: usize = 3000;

/// A directed graph whose vertices carry labels of type `T`.
///
/// Vertices are numbered `0..size()` in the order they were added and are
/// never removed or renumbered. Edges are stored as a square boolean
/// adjacency matrix, one row per vertex, so `is_edge` is O(1) and
/// `neighbors` is a single row scan. The graph never holds more than
/// `capacity()` vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph<T> {
    labels: Vec<T>,
    edges: Vec<Vec<bool>>, // edges[i][j] is the edge i -> j
    capacity: usize,
}

impl<T> Default for LabeledGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LabeledGraph<T> {
    /// An empty graph with the default capacity of [`MAXIMUM`] vertices.
    pub fn new() -> Self {
        Self::with_capacity(MAXIMUM)
    }

    /// An empty graph that accepts at most `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::new(),
            edges: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vertices in the graph.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends a vertex with the given label and no edges, returning its id.
    pub fn add_vertex(&mut self, label: T) -> Result<usize, GraphError> {
        if self.size() >= self.capacity {
            return Err(GraphError::CapacityExceeded { capacity: self.capacity });
        }
        let vertex = self.size();
        for row in &mut self.edges {
            row.push(false); // no edge from an old vertex into the new one
        }
        self.edges.push(vec![false; vertex + 1]);
        self.labels.push(label);
        Ok(vertex)
    }

    /// Adds the edge `source -> target`. Adding an existing edge changes nothing.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        self.check_pair(source, target)?;
        self.edges[source][target] = true;
        Ok(())
    }

    /// Removes the edge `source -> target` if present.
    pub fn remove_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        self.check_pair(source, target)?;
        self.edges[source][target] = false;
        Ok(())
    }

    pub fn is_edge(&self, source: usize, target: usize) -> Result<bool, GraphError> {
        self.check_pair(source, target)?;
        Ok(self.edges[source][target])
    }

    /// Every vertex that is the target of an edge leaving `vertex`, ascending.
    pub fn neighbors(&self, vertex: usize) -> Result<BTreeSet<usize>, GraphError> {
        self.check(vertex)?;
        Ok(self.edges[vertex]
            .iter()
            .enumerate()
            .filter(|(_, &connected)| connected)
            .map(|(target, _)| target)
            .collect())
    }

    pub fn label(&self, vertex: usize) -> Result<&T, GraphError> {
        self.check(vertex)?;
        Ok(&self.labels[vertex])
    }

    /// Mutable access to a vertex label. Edges and size are unaffected.
    pub fn label_mut(&mut self, vertex: usize) -> Result<&mut T, GraphError> {
        self.check(vertex)?;
        Ok(&mut self.labels[vertex])
    }

    /// Replaces the label of `vertex`, returning the old one.
    pub fn set_label(&mut self, vertex: usize, label: T) -> Result<T, GraphError> {
        Ok(std::mem::replace(self.label_mut(vertex)?, label))
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Total number of directed edges, self-edges included.
    pub fn edge_count(&self) -> usize {
        self.edges
            .iter()
            .map(|row| row.iter().filter(|&&connected| connected).count())
            .sum()
    }

    pub(crate) fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.size() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange { index: vertex, size: self.size() })
        }
    }

    fn check_pair(&self, source: usize, target: usize) -> Result<(), GraphError> {
        self.check(source)?;
        self.check(target)
    }
}

impl<T: Clone> LabeledGraph<T> {
    /// A copy of the label of `vertex`.
    pub fn label_at(&self, vertex: usize) -> Result<T, GraphError> {
        self.label(vertex).cloned()
    }
}

/// Fail-fast label access: panics if `vertex >= size()`.
impl<T> Index<usize> for LabeledGraph<T> {
    type Output = T;

    fn index(&self, vertex: usize) -> &T {
        match self.label(vertex) {
            Ok(label) => label,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for LabeledGraph<T> {
    fn index_mut(&mut self, vertex: usize) -> &mut T {
        let size = self.size();
        match self.labels.get_mut(vertex) {
            Some(label) => label,
            None => panic!("{}", GraphError::IndexOutOfRange { index: vertex, size }),
        }
    }
}
