use num_traits::PrimInt;

use crate::edge::Edge;
use crate::error::MinSpanError;

// The token marking "no direct connection" in a serialized cost matrix
const NO_EDGE: &str = "-";

/// Parses a comma-separated square cost matrix.
///
/// Rows are lines and cells are comma-separated base-10 integers, with `-`
/// marking the absence of a direct connection. Sentinel cells are stored as
/// zero; zero and negative costs are never turned into edges. Cells are
/// trimmed of surrounding whitespace before parsing.
///
/// # Parameters
/// * `input` - the matrix text.
///
/// # Returns
/// * A result that, if successful, contains the parsed cost matrix. An error
///   is returned if the input holds no rows, if any row's length differs from
///   the number of rows, or if a cell is neither an integer nor `-`.
///
/// # Examples
/// ```
///let text = "-,5\n5,-";
///let matrix = minspan::parse_matrix::<i32>(text).unwrap();
///assert_eq!(matrix, vec![vec![0, 5], vec![5, 0]]);
/// ```
pub fn parse_matrix<T: PrimInt>(input: &str) -> Result<Vec<Vec<T>>, MinSpanError> {
    let mut matrix: Vec<Vec<T>> = Vec::new();
    for (row, line) in input.lines().enumerate() {
        let mut cells = Vec::new();
        for (column, cell) in line.split(',').enumerate() {
            cells.push(parse_cell(cell, row, column)?);
        }
        matrix.push(cells);
    }

    if matrix.is_empty() {
        return Err(MinSpanError::EmptyMatrix);
    }
    let n_vertices = matrix.len();
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != n_vertices {
            return Err(MinSpanError::NonSquare(format!(
                "the matrix has {n_vertices} rows, but row {row} has {} columns",
                cells.len()
            )));
        }
    }
    Ok(matrix)
}

fn parse_cell<T: PrimInt>(cell: &str, row: usize, column: usize) -> Result<T, MinSpanError> {
    let cell = cell.trim();
    if cell == NO_EDGE {
        return Ok(T::zero());
    }
    T::from_str_radix(cell, 10).map_err(|_| {
        MinSpanError::InvalidCell(format!(
            "row {row}, column {column}: '{cell}' is neither an integer nor '{NO_EDGE}'"
        ))
    })
}

/// Expands each matrix row into the outgoing edges of its vertex. Cells
/// holding a cost of zero or less never become edges.
pub(crate) fn adjacency_lists<T: PrimInt>(matrix: &[Vec<T>]) -> Vec<Vec<Edge<T>>> {
    matrix
        .iter()
        .enumerate()
        .map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &cost)| cost > T::zero())
                .map(|(to, &cost)| Edge { from, to, cost })
                .collect()
        })
        .collect()
}

/// Sums the positive cells of the strict lower triangle, counting each
/// undirected connection of a symmetric matrix exactly once.
pub(crate) fn original_cost<T: PrimInt>(matrix: &[Vec<T>]) -> T {
    matrix
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| cells.iter().take(row))
        .filter(|&&cost| cost > T::zero())
        .copied()
        .fold(T::zero(), std::ops::Add::add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_skips_non_positive_cells() {
        let matrix = vec![vec![0, 1, -3], vec![1, 0, 2], vec![-3, 2, 0]];
        let adjacency = adjacency_lists(&matrix);
        assert_eq!(adjacency[0], vec![Edge { from: 0, to: 1, cost: 1 }]);
        assert_eq!(
            adjacency[1],
            vec![
                Edge { from: 1, to: 0, cost: 1 },
                Edge { from: 1, to: 2, cost: 2 },
            ]
        );
        assert_eq!(adjacency[2], vec![Edge { from: 2, to: 1, cost: 2 }]);
    }

    #[test]
    fn original_cost_sums_lower_triangle_once() {
        let matrix = vec![vec![0, 1, 4], vec![1, 0, 2], vec![4, 2, 0]];
        assert_eq!(7, original_cost(&matrix));
    }

    #[test]
    fn original_cost_ignores_non_positive_cells() {
        let matrix = vec![vec![0, -9, 4], vec![-9, 0, 2], vec![4, 2, 0]];
        assert_eq!(6, original_cost(&matrix));
    }
}
