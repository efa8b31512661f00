//! Point list parsing.
//!
//! Students type vertices as semicolon-separated `X,Y` groups:
//!
//! ```text
//! 1,2; 3,4; 5,1
//! ```
//!
//! Whitespace around tokens is ignored. A list of more than one point is
//! treated as a closed polygon; see [`PointSequence`](crate::PointSequence).

mod points;
mod types;

pub use points::parse_points;
pub use types::ParseError;
