use std::error::Error;
use std::fmt;

/// Rejected query input. Raised at the boundary where a request is turned
/// into a `QueryState`; the stages themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidPageSize(usize),
    InvalidPageIndex(String),
    UnknownSortKey(String),
    UnknownValue { field: &'static str, value: String },
    InvalidNumber { field: &'static str, value: String },
    InvalidFlag { field: &'static str, value: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidPageSize(n) => write!(f, "Page size must be positive, got {n}"),
            QueryError::InvalidPageIndex(raw) => write!(f, "Invalid page number: {raw}"),
            QueryError::UnknownSortKey(raw) => write!(f, "Unknown sort order: {raw}"),
            QueryError::UnknownValue { field, value } => {
                write!(f, "Unknown value for {field}: {value}")
            }
            QueryError::InvalidNumber { field, value } => {
                write!(f, "Expected a number for {field}, got {value}")
            }
            QueryError::InvalidFlag { field, value } => {
                write!(f, "Expected true or false for {field}, got {value}")
            }
        }
    }
}

impl Error for QueryError {}
