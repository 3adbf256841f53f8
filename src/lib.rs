//! Minimum spanning trees ("MSTs") over dense cost matrices in Rust, built with
//! Prim's algorithm. Generic over primitive integer cost types.
//!
//! A minimum spanning tree answers a practical question about a network: which
//! direct connections can be dropped without cutting any vertex off, and how
//! much does dropping them save? The main benefits of this implementation are
//! that:
//!  1. It works directly on a dense cost matrix, the form network costs are
//!     usually recorded in, and includes a parser for the common
//!     comma-separated serialization where `-` marks a missing connection;
//!  2. It uses a lazy deletion priority queue. Queued edges are never re-keyed
//!     when a cheaper route appears; entries that have gone stale are simply
//!     discarded when they surface at the front of the queue; and
//!  3. It makes no assumptions about connectivity. A network that falls into
//!     several components yields a partial tree that reports itself as such,
//!     rather than an error or a panic.
//!
//! # Examples
//! ```
//!use minspan::{parse_matrix, CostReport, Prim};
//!
//!let text = "\
//!    -,16,12,21,-,-,-\n\
//!    16,-,-,17,20,-,-\n\
//!    12,-,-,28,-,31,-\n\
//!    21,17,28,-,18,19,23\n\
//!    -,20,-,18,-,-,11\n\
//!    -,-,31,19,-,-,27\n\
//!    -,-,-,23,11,27,-";
//!let matrix = parse_matrix::<i64>(text).unwrap();
//!let tree = Prim::default_params(&matrix).span().unwrap();
//!let report = CostReport::new(&matrix, &tree);
//!assert_eq!(243, report.original_cost());
//!assert_eq!(93, report.reduced_cost());
//!assert_eq!(150, report.difference());
//!assert_eq!("Original Cost=243; Reduced Cost=93; Difference=150", report.to_string());
//! ```
//!
//! # References
//! * [Prim, R.C. Shortest connection networks and some generalizations.](https://ieeexplore.ieee.org/document/6773228)
//! * [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)

pub use crate::edge::Edge;
pub use crate::error::MinSpanError;
pub use crate::matrix::parse_matrix;
pub use crate::params::{ParamsBuilder, PrimParams};
pub use crate::prim::Prim;
pub use crate::report::CostReport;
pub use crate::spanning_tree::SpanningTree;

mod edge;
mod error;
mod matrix;
mod params;
mod prim;
mod report;
mod spanning_tree;
