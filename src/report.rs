use std::fmt::{Display, Formatter};

use num_traits::PrimInt;

use crate::matrix;
use crate::spanning_tree::SpanningTree;

/// The cost saved by replacing a network with a spanning tree grown over it.
///
/// Displays as `Original Cost=<o>; Reduced Cost=<r>; Difference=<d>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostReport<T> {
    original_cost: T,
    reduced_cost: T,
}

impl<T: PrimInt> CostReport<T> {
    /// Compares the cost of a whole network against the cost of a spanning
    /// tree grown over it.
    ///
    /// # Parameters
    /// * `matrix` - the cost matrix the tree was grown from.
    /// * `tree` - the spanning tree.
    ///
    /// # Examples
    /// ```
    ///use minspan::{CostReport, Prim};
    ///
    ///let matrix = vec![vec![0, 1, 4], vec![1, 0, 2], vec![4, 2, 0]];
    ///let tree = Prim::default_params(&matrix).span().unwrap();
    ///let report = CostReport::new(&matrix, &tree);
    ///assert_eq!("Original Cost=7; Reduced Cost=3; Difference=4", report.to_string());
    /// ```
    pub fn new(matrix: &[Vec<T>], tree: &SpanningTree<T>) -> CostReport<T> {
        CostReport {
            original_cost: matrix::original_cost(matrix),
            reduced_cost: tree.total_cost(),
        }
    }

    /// The combined cost of every connection in the network, counting each
    /// undirected connection once.
    pub fn original_cost(&self) -> T {
        self.original_cost
    }

    /// The combined cost of the connections kept in the tree.
    pub fn reduced_cost(&self) -> T {
        self.reduced_cost
    }

    /// The cost saved by dropping the connections outside the tree.
    pub fn difference(&self) -> T {
        self.original_cost - self.reduced_cost
    }
}

impl<T: PrimInt + Display> Display for CostReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Original Cost={}; Reduced Cost={}; Difference={}",
            self.original_cost,
            self.reduced_cost,
            self.difference()
        )
    }
}
