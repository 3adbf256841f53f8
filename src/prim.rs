use std::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::PrimInt;

use crate::edge::Edge;
use crate::error::MinSpanError;
use crate::matrix;
use crate::params::PrimParams;
use crate::spanning_tree::SpanningTree;

/// Prim's minimum spanning tree algorithm in Rust. Generic over primitive
/// integer cost types.
#[derive(Debug, Clone, PartialEq)]
pub struct Prim<'a, T> {
    matrix: &'a [Vec<T>],
    n_vertices: usize,
    params: PrimParams,
}

impl<'a, T: PrimInt> Prim<'a, T> {
    /// Creates an instance of the Prim tree builder using a custom parameter
    /// configuration.
    ///
    /// # Parameters
    /// * `matrix` - a reference to the square cost matrix of the network,
    ///              where cell `(i, j)` holds the cost of connecting vertices
    ///              `i` and `j` directly, and zero or less means no
    ///              connection.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The Prim tree builder instance.
    ///
    /// # Examples
    /// ```
    ///use minspan::{Prim, PrimParams};
    ///
    ///let matrix = vec![
    ///    vec![0, 1, 4],
    ///    vec![1, 0, 2],
    ///    vec![4, 2, 0],
    ///];
    ///let params = PrimParams::builder()
    ///    .start_vertex(2)
    ///    .check_symmetry(true)
    ///    .build();
    ///let builder = Prim::new(&matrix, params);
    /// ```
    pub fn new(matrix: &'a [Vec<T>], params: PrimParams) -> Self {
        let n_vertices = matrix.len();
        Prim {
            matrix,
            n_vertices,
            params,
        }
    }

    /// Creates an instance of the Prim tree builder using the default
    /// parameters.
    ///
    /// # Parameters
    /// * `matrix` - a reference to the square cost matrix of the network,
    ///              where cell `(i, j)` holds the cost of connecting vertices
    ///              `i` and `j` directly, and zero or less means no
    ///              connection.
    ///
    /// # Returns
    /// * The Prim tree builder instance.
    ///
    /// # Examples
    /// ```
    ///use minspan::Prim;
    ///
    ///let matrix = vec![
    ///    vec![0, 1, 4],
    ///    vec![1, 0, 2],
    ///    vec![4, 2, 0],
    ///];
    ///let builder = Prim::default_params(&matrix);
    /// ```
    pub fn default_params(matrix: &'a [Vec<T>]) -> Prim<'a, T> {
        let params = PrimParams::default();
        Prim::new(matrix, params)
    }

    /// Grows a minimum spanning tree over the cost matrix passed to the
    /// constructor.
    ///
    /// Starting from the configured start vertex, the cheapest edge leading
    /// out of the visited set is committed repeatedly until every reachable
    /// vertex is in the tree. If part of the network cannot be reached, the
    /// partial tree is returned and `SpanningTree::is_spanning` reports
    /// false.
    ///
    /// # Returns
    /// * A result that, if successful, contains the spanning tree, holding
    ///   one committed edge for every vertex reached beyond the start vertex.
    ///   An error will be returned if the matrix is empty, if any row's
    ///   length differs from the number of rows, or if symmetry checking is
    ///   enabled and a cost differs from its mirrored counterpart.
    ///
    /// # Examples
    /// ```
    ///use minspan::Prim;
    ///
    ///let matrix = vec![
    ///    vec![0, 1, 4],
    ///    vec![1, 0, 2],
    ///    vec![4, 2, 0],
    ///];
    ///let builder = Prim::default_params(&matrix);
    ///let tree = builder.span().unwrap();
    /// // The direct connection between vertices 0 and 2 is dropped
    ///assert_eq!(2, tree.edge_count());
    ///assert_eq!(3, tree.total_cost());
    ///assert!(tree.is_spanning());
    /// ```
    pub fn span(&self) -> Result<SpanningTree<T>, MinSpanError> {
        self.validate_matrix()?;
        let adjacency = matrix::adjacency_lists(self.matrix);
        let start_vertex = self.resolve_start_vertex();
        Ok(self.expand_frontier(&adjacency, start_vertex))
    }

    fn validate_matrix(&self) -> Result<(), MinSpanError> {
        if self.matrix.is_empty() {
            return Err(MinSpanError::EmptyMatrix);
        }
        for (row, cells) in self.matrix.iter().enumerate() {
            if cells.len() != self.n_vertices {
                return Err(MinSpanError::NonSquare(format!(
                    "the matrix has {} rows, but row {row} has {} columns",
                    self.n_vertices,
                    cells.len()
                )));
            }
        }
        if self.params.check_symmetry {
            self.validate_symmetry()?;
        }
        Ok(())
    }

    fn validate_symmetry(&self) -> Result<(), MinSpanError> {
        for i in 0..self.n_vertices {
            for j in (i + 1)..self.n_vertices {
                if self.matrix[i][j] != self.matrix[j][i] {
                    return Err(MinSpanError::AsymmetricCost(format!(
                        "the costs at ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }
        Ok(())
    }

    fn resolve_start_vertex(&self) -> usize {
        let start_vertex = self.params.start_vertex;
        if start_vertex >= self.n_vertices {
            println!(
                "MINSPAN_WARNING: start_vertex ({start_vertex}) is out of range \
                for a {} vertex matrix. Set to 0.",
                self.n_vertices
            );
            return 0;
        }
        start_vertex
    }

    fn expand_frontier(&self, adjacency: &[Vec<Edge<T>>], start_vertex: usize) -> SpanningTree<T> {
        let mut visited = vec![false; self.n_vertices];
        let mut committed: Vec<Vec<Edge<T>>> = vec![Vec::new(); self.n_vertices];
        let mut frontier: BinaryHeap<Reverse<Edge<T>>> = adjacency[start_vertex]
            .iter()
            .copied()
            .map(Reverse)
            .collect();
        visited[start_vertex] = true;
        let mut n_visited = 1;

        while n_visited < self.n_vertices {
            let edge = match frontier.pop() {
                Some(Reverse(edge)) => edge,
                // No edges left out of the visited set, so the rest of the
                // network is unreachable
                None => break,
            };
            if visited[edge.to] {
                // A stale entry whose far vertex was reached more cheaply
                // after this edge was queued
                continue;
            }
            visited[edge.to] = true;
            n_visited += 1;
            committed[edge.from].push(edge);
            frontier.extend(adjacency[edge.to].iter().copied().map(Reverse));
        }
        SpanningTree { committed, visited }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committed_edges_are_grouped_by_source_vertex() {
        let matrix = vec![vec![0, 1, 4], vec![1, 0, 2], vec![4, 2, 0]];
        let tree = Prim::default_params(&matrix).span().unwrap();
        assert_eq!(tree.edges_from(0), vec![Edge { from: 0, to: 1, cost: 1 }]);
        assert_eq!(tree.edges_from(1), vec![Edge { from: 1, to: 2, cost: 2 }]);
        assert!(tree.edges_from(2).is_empty());
    }

    #[test]
    fn empty_matrix_is_an_error() {
        let matrix: Vec<Vec<i32>> = Vec::new();
        let result = Prim::default_params(&matrix).span();
        assert!(matches!(result, Err(MinSpanError::EmptyMatrix)));
    }

    #[test]
    fn ragged_matrix_is_an_error() {
        let matrix = vec![vec![0, 1], vec![1, 0], vec![9, 9]];
        let result = Prim::default_params(&matrix).span();
        assert!(matches!(result, Err(MinSpanError::NonSquare(_))));
    }

    #[test]
    fn asymmetric_costs_are_caught_when_checked() {
        let matrix = vec![vec![0, 5], vec![6, 0]];
        let params = PrimParams::builder().check_symmetry(true).build();
        let result = Prim::new(&matrix, params).span();
        assert!(matches!(result, Err(MinSpanError::AsymmetricCost(_))));
    }

    #[test]
    fn out_of_range_start_vertex_falls_back_to_zero() {
        let matrix = vec![vec![0, 1, 4], vec![1, 0, 2], vec![4, 2, 0]];
        let params = PrimParams::builder().start_vertex(99).build();
        let tree = Prim::new(&matrix, params).span().unwrap();
        assert!(tree.is_spanning());
        assert_eq!(3, tree.total_cost());
    }

    #[test]
    fn isolated_start_vertex_yields_a_single_vertex_tree() {
        let matrix = vec![vec![0, 0, 0], vec![0, 0, 7], vec![0, 7, 0]];
        let tree = Prim::default_params(&matrix).span().unwrap();
        assert!(!tree.is_spanning());
        assert_eq!(0, tree.edge_count());
        assert_eq!(vec![0], tree.visited_vertices().collect::<Vec<_>>());
    }

    #[test]
    fn equal_cost_edges_still_span_at_minimum_cost() {
        // A four cycle of unit cost edges has several minimum trees, all of
        // cost three
        let matrix = vec![
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
        ];
        let tree = Prim::default_params(&matrix).span().unwrap();
        assert!(tree.is_spanning());
        assert_eq!(3, tree.edge_count());
        assert_eq!(3, tree.total_cost());
    }
}
