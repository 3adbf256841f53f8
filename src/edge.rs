use std::cmp::Ordering;

/// A candidate connection between two vertices, ordered by ascending cost.
///
/// Edges are directional as stored: both directions of an undirected
/// connection exist independently, one in each endpoint's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<T> {
    pub from: usize,
    pub to: usize,
    pub cost: T,
}

impl<T: Ord> Ord for Edge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cheapest first; the vertex indices only break exact cost ties so
        // that the order is total
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<T: Ord> PartialOrd for Edge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
