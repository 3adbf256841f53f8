use num_traits::PrimInt;

use crate::edge::Edge;

/// A spanning tree (or forest, if the network is disconnected) grown over a
/// cost matrix.
///
/// Committed edges are grouped by the vertex they were reached from, so the
/// tree can be walked outwards from its start vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    pub(crate) committed: Vec<Vec<Edge<T>>>,
    pub(crate) visited: Vec<bool>,
}

impl<T: PrimInt> SpanningTree<T> {
    /// The number of vertices in the underlying network.
    pub fn vertex_count(&self) -> usize {
        self.committed.len()
    }

    /// The number of edges committed to the tree. One less than the vertex
    /// count when the network is connected.
    pub fn edge_count(&self) -> usize {
        self.committed.iter().map(Vec::len).sum()
    }

    /// Iterates over all committed edges.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.committed.iter().flatten()
    }

    /// The committed edges leading out of one vertex, in the order they were
    /// committed.
    pub fn edges_from(&self, vertex: usize) -> &[Edge<T>] {
        &self.committed[vertex]
    }

    /// The combined cost of all committed edges.
    pub fn total_cost(&self) -> T {
        self.edges()
            .map(|edge| edge.cost)
            .fold(T::zero(), std::ops::Add::add)
    }

    /// Whether a vertex was reached while growing the tree. Vertices out of
    /// range are reported as not visited.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// The number of vertices reached while growing the tree.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&visited| visited).count()
    }

    /// Iterates over the vertices reached while growing the tree, in index
    /// order.
    pub fn visited_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, &visited)| visited)
            .map(|(vertex, _)| vertex)
    }

    /// Whether every vertex of the network was reached. False when part of
    /// the network is unreachable from the start vertex.
    pub fn is_spanning(&self) -> bool {
        self.visited_count() == self.vertex_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_reflect_committed_edges() {
        let tree = SpanningTree {
            committed: vec![
                vec![Edge { from: 0, to: 1, cost: 1 }],
                vec![Edge { from: 1, to: 2, cost: 2 }],
                vec![],
            ],
            visited: vec![true, true, true],
        };
        assert_eq!(3, tree.vertex_count());
        assert_eq!(2, tree.edge_count());
        assert_eq!(3, tree.total_cost());
        assert_eq!(vec![0, 1, 2], tree.visited_vertices().collect::<Vec<_>>());
        assert!(tree.is_spanning());
    }

    #[test]
    fn partial_tree_is_not_spanning() {
        let tree: SpanningTree<i32> = SpanningTree {
            committed: vec![vec![], vec![], vec![]],
            visited: vec![true, false, false],
        };
        assert_eq!(0, tree.edge_count());
        assert_eq!(1, tree.visited_count());
        assert!(!tree.is_spanning());
        assert!(!tree.is_visited(2));
        assert!(!tree.is_visited(999));
    }
}
