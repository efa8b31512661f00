//! Error types for point list parsing.

use thiserror::Error;

/// Error raised when point list text is malformed.
///
/// Group indices are 1-based so they can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contains nothing but whitespace.
    #[error("Point list is empty")]
    Empty,

    /// A group did not contain exactly two comma-separated tokens.
    #[error("Point {group} must have exactly 2 coordinates, found {found}")]
    TokenCount { group: usize, found: usize },

    /// A token is not a finite real-number literal.
    #[error("Point {group} has an invalid coordinate: {token:?}")]
    InvalidNumber { group: usize, token: String },
}
