//! Breadth-first traversals over a [`LabeledGraph`] and path reconstruction
//! from the parent pointers they record.
//!
//! Both queries return vertex ids running from `dest` back to `start`.
//! An empty vector means `dest` is unreachable; it is not an error.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::LabeledGraph;

/// Per-query parent pointers: for each vertex, the vertex that discovered it.
///
/// The start vertex is its own parent. Vertices the traversal never reached
/// have no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTrace {
    start: usize,
    parent: Vec<Option<usize>>,
}

impl ParentTrace {
    fn new(start: usize, size: usize) -> Self {
        let mut parent = vec![None; size];
        parent[start] = Some(start);
        Self { start, parent }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    pub fn is_reached(&self, vertex: usize) -> bool {
        self.parent(vertex).is_some()
    }

    /// Walks parent pointers from `dest` back to the start.
    ///
    /// Returns `[dest, parent(dest), ..., start]`, or an empty vector when
    /// `dest` was never reached.
    pub fn path_to(&self, dest: usize) -> Vec<usize> {
        if !self.is_reached(dest) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut v = dest;
        while v != self.start {
            path.push(v);
            match self.parent(v) {
                Some(p) if path.len() <= self.parent.len() => v = p,
                _ => return Vec::new(), // broken chain, never produced by the traversals here
            }
        }
        path.push(self.start);
        path
    }

    /// Whether the parent chain starting at `from` hits `target` before
    /// reaching the start. A chain longer than the vertex count is a cycle
    /// and counts as a hit.
    fn chain_contains(&self, from: usize, target: usize) -> bool {
        let mut v = from;
        for _ in 0..=self.parent.len() {
            if v == self.start {
                return false;
            }
            if v == target {
                return true;
            }
            match self.parent(v) {
                Some(p) => v = p,
                None => return false,
            }
        }
        true
    }
}

/// Breadth-first traversal of everything reachable from `start`.
///
/// Each vertex's parent is the vertex that first discovered it, so the
/// recorded tree holds minimum-hop routes from `start`.
pub fn breadth_first<T>(graph: &LabeledGraph<T>, start: usize) -> Result<ParentTrace, GraphError> {
    graph.check(start)?;
    let mut visited = vec![false; graph.size()];
    let mut trace = ParentTrace::new(start, graph.size());
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    while let Some(front) = queue.pop_front() {
        for u in graph.neighbors(front)? {
            if !visited[u] {
                visited[u] = true;
                trace.parent[u] = Some(front);
                queue.push_back(u);
            }
        }
    } // runs until the whole component is explored, no early exit on dest
    Ok(trace)
}

/// Breadth-first traversal that re-points `dest` at later discoverers.
///
/// Same visiting order as [`breadth_first`]. When an already visited
/// neighbor is `dest` and `dest` was not found directly from `start`, the
/// current front vertex becomes `dest`'s parent, unless `dest`'s existing
/// chain already loops through `dest` or the front vertex itself descends
/// from `dest`. This tends to lengthen the route to `dest` but does not
/// find the longest simple path in general.
pub fn breadth_first_toward<T>(
    graph: &LabeledGraph<T>,
    start: usize,
    dest: usize,
) -> Result<ParentTrace, GraphError> {
    graph.check(start)?;
    graph.check(dest)?;
    let mut visited = vec![false; graph.size()];
    let mut trace = ParentTrace::new(start, graph.size());
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    while let Some(front) = queue.pop_front() {
        for u in graph.neighbors(front)? {
            if !visited[u] {
                visited[u] = true;
                trace.parent[u] = Some(front);
                queue.push_back(u);
            } else if u == dest && trace.parent[dest] != Some(start) {
                let current = trace.parent[dest].unwrap_or(start);
                if !trace.chain_contains(current, dest) && !trace.chain_contains(front, dest) {
                    trace.parent[dest] = Some(front);
                }
            }
        }
    }
    Ok(trace)
}

/// A minimum-hop path from `start` to `dest`, listed from `dest` back to `start`.
pub fn shortest_path<T>(
    graph: &LabeledGraph<T>,
    start: usize,
    dest: usize,
) -> Result<Vec<usize>, GraphError> {
    graph.check(dest)?;
    let path = breadth_first(graph, start)?.path_to(dest);
    debug!(start, dest, hops = path.len().saturating_sub(1), found = !path.is_empty(), "shortest_path");
    Ok(path)
}

/// A path from `start` to `dest` biased toward more hops, listed from
/// `dest` back to `start`. See [`breadth_first_toward`] for what "longest"
/// means here; it is a heuristic, not an exact longest path.
pub fn longest_path<T>(
    graph: &LabeledGraph<T>,
    start: usize,
    dest: usize,
) -> Result<Vec<usize>, GraphError> {
    let path = breadth_first_toward(graph, start, dest)?.path_to(dest);
    debug!(start, dest, hops = path.len().saturating_sub(1), found = !path.is_empty(), "longest_path");
    Ok(path)
}

impl<T> LabeledGraph<T> {
    pub fn shortest_path(&self, start: usize, dest: usize) -> Result<Vec<usize>, GraphError> {
        shortest_path(self, start, dest)
    }

    pub fn longest_path(&self, start: usize, dest: usize) -> Result<Vec<usize>, GraphError> {
        longest_path(self, start, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(n: usize) -> LabeledGraph<usize> {
        let mut g = LabeledGraph::new();
        for i in 0..n {
            g.add_vertex(i).unwrap();
        }
        g
    }

    fn undirected(n: usize, edges: &[(usize, usize)]) -> LabeledGraph<usize> {
        let mut g = graph_of(n);
        for &(a, b) in edges {
            g.add_edge(a, b).unwrap();
            g.add_edge(b, a).unwrap();
        }
        g
    }

    #[test]
    fn test_path_to_self() {
        let g = graph_of(3);
        assert_eq!(shortest_path(&g, 1, 1).unwrap(), vec![1]);
        assert_eq!(longest_path(&g, 1, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_unreachable_is_empty() {
        let mut g = graph_of(3);
        g.add_edge(0, 1).unwrap();
        assert!(shortest_path(&g, 0, 2).unwrap().is_empty());
        assert!(longest_path(&g, 0, 2).unwrap().is_empty());
        assert!(shortest_path(&g, 1, 0).unwrap().is_empty()); // edge only goes one way
    }

    #[test]
    fn test_four_cycle() {
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.len(), 3); // two hops
        assert_eq!(path, vec![2, 1, 0]); // 1 is discovered before 3
    }

    #[test]
    fn test_word_chain_order() {
        let mut g = LabeledGraph::new();
        for word in ["abcde", "abcdf", "abcgf"] {
            g.add_vertex(word.to_string()).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2)] {
            g.add_edge(a, b).unwrap();
            g.add_edge(b, a).unwrap();
        }
        let path = g.shortest_path(0, 2).unwrap();
        assert_eq!(path, vec![2, 1, 0]); // dest first, start last
        let words: Vec<&str> = path.iter().map(|&v| g[v].as_str()).collect();
        assert_eq!(words, vec!["abcgf", "abcdf", "abcde"]);
    }

    #[test]
    fn test_shortest_matches_bfs_distance() {
        // 0-1-2-3-4-5 with a shortcut 1-4
        let g = undirected(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (1, 4)]);
        assert_eq!(shortest_path(&g, 0, 5).unwrap(), vec![5, 4, 1, 0]);
        assert_eq!(shortest_path(&g, 5, 2).unwrap(), vec![2, 1, 4, 5]);
    }

    #[test]
    fn test_breadth_first_trace() {
        let g = undirected(5, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let trace = breadth_first(&g, 0).unwrap();
        assert_eq!(trace.start(), 0);
        assert_eq!(trace.parent(0), Some(0));
        assert_eq!(trace.parent(3), Some(1)); // first discoverer wins
        assert!(!trace.is_reached(4));
        assert!(trace.path_to(4).is_empty());
    }

    #[test]
    fn test_longest_takes_later_discoverer() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 4 -> 3
        let mut g = graph_of(5);
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 4), (4, 3)] {
            g.add_edge(a, b).unwrap();
        }
        assert_eq!(shortest_path(&g, 0, 3).unwrap(), vec![3, 1, 0]);
        assert_eq!(longest_path(&g, 0, 3).unwrap(), vec![3, 4, 2, 0]);
    }

    #[test]
    fn test_longest_ignores_direct_neighbor_of_start() {
        // dest 2 hangs directly off start, so it keeps that parent
        let mut g = graph_of(3);
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            g.add_edge(a, b).unwrap();
        }
        assert_eq!(longest_path(&g, 0, 2).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_longest_does_not_loop_through_dest() {
        // undirected chain; 3 is discovered from dest and must not become its parent
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(longest_path(&g, 0, 2).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_longest_on_four_cycle() {
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        // 2 is found from 1, then 3 reaches it later and takes over as parent
        assert_eq!(longest_path(&g, 0, 2).unwrap(), vec![2, 3, 0]);
    }

    #[test]
    fn test_out_of_range_queries() {
        let g = graph_of(2);
        let err = GraphError::IndexOutOfRange { index: 5, size: 2 };
        assert_eq!(shortest_path(&g, 5, 0), Err(err));
        assert_eq!(shortest_path(&g, 0, 5), Err(err));
        assert_eq!(longest_path(&g, 0, 5), Err(err));
        assert!(breadth_first(&g, 2).is_err());
    }
}
