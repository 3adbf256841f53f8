use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with the input cost matrix.
#[derive(Debug, Clone)]
pub enum MinSpanError {
    EmptyMatrix,
    NonSquare(String),
    InvalidCell(String),
    AsymmetricCost(String),
}

impl Error for MinSpanError {}

impl Display for MinSpanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            MinSpanError::EmptyMatrix => String::from("The cost matrix provided is empty"),
            MinSpanError::NonSquare(msg) => format!("The cost matrix is not square: {msg}"),
            MinSpanError::InvalidCell(msg) => format!("Unparseable cost matrix cell: {msg}"),
            MinSpanError::AsymmetricCost(msg) => format!("Asymmetric cost matrix: {msg}"),
        };
        write!(f, "{message}")
    }
}
