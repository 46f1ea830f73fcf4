//! Allocation error types.

use thiserror::Error;

/// Result type alias for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors that can occur while building a layout, validating a roster or
/// editing a grid.
///
/// Capacity shortfall and surplus are not errors: they show up as
/// unassigned students or empty seats.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error(
        "seat ({bench}, {seat}) out of range: grid has {benches} benches of {seats_per_bench} seats"
    )]
    OutOfRange {
        bench: usize,
        seat: usize,
        benches: usize,
        seats_per_bench: usize,
    },

    #[error("duplicate student id in roster: {0}")]
    DuplicateStudentId(String),

    #[error("student at roster position {row} has an empty id")]
    EmptyStudentId { row: usize },

    #[error("roster row {row} has a name but no student id")]
    MissingStudentId { row: usize },

    #[error("roster format error: {0}")]
    RosterFormat(String),
}
