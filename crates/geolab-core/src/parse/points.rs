//! Parser for `X1,Y1; X2,Y2; ...` point lists.

use super::ParseError;
use crate::shape::PointSequence;
use crate::Point;

const GROUP_SEPARATOR: char = ';';
const COORD_SEPARATOR: char = ',';

/// Parse a semicolon/comma-delimited point list into a [`PointSequence`].
///
/// Each `;`-separated group must hold exactly two `,`-separated numeric
/// tokens. When more than one point is parsed the sequence is closed, so its
/// [`boundary`](PointSequence::boundary) ends with a copy of the first point.
///
/// # Errors
///
/// - `ParseError::Empty` if the input is blank
/// - `ParseError::TokenCount` if a group does not split into two tokens
/// - `ParseError::InvalidNumber` if a token is not a finite number
///
/// # Example
///
/// ```ignore
/// let shape = parse_points("1,2; 3,4; 5,1")?;
/// assert_eq!(shape.vertices().len(), 3);
/// assert_eq!(shape.boundary().len(), 4);
/// ```
pub fn parse_points(text: &str) -> Result<PointSequence, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let points = text
        .split(GROUP_SEPARATOR)
        .enumerate()
        .map(|(i, group)| parse_group(i + 1, group))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointSequence::from_vertices(points))
}

fn parse_group(group: usize, text: &str) -> Result<Point, ParseError> {
    let tokens: Vec<&str> = text.split(COORD_SEPARATOR).collect();
    let [x, y] = tokens.as_slice() else {
        return Err(ParseError::TokenCount {
            group,
            found: tokens.len(),
        });
    };

    Ok(Point::new(parse_coord(group, x)?, parse_coord(group, y)?))
}

fn parse_coord(group: usize, token: &str) -> Result<f64, ParseError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            group,
            token: token.to_string(),
        })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coords_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..12)
    }

    fn format_list(coords: &[(f64, f64)]) -> String {
        coords
            .iter()
            .map(|(x, y)| format!("{}, {}", x, y))
            .collect::<Vec<_>>()
            .join("; ")
    }

    proptest! {
        /// Property: every formatted coordinate is read back exactly, in order.
        #[test]
        fn prop_parse_preserves_vertices(coords in coords_strategy()) {
            let shape = parse_points(&format_list(&coords)).unwrap();
            let expected: Vec<Point> = coords.iter().map(|&c| c.into()).collect();
            prop_assert_eq!(shape.vertices(), expected.as_slice());
        }

        /// Property: the boundary is closed exactly when more than one point is given.
        #[test]
        fn prop_closure_rule(coords in coords_strategy()) {
            let shape = parse_points(&format_list(&coords)).unwrap();
            let boundary = shape.boundary();

            if coords.len() > 1 {
                prop_assert_eq!(boundary.len(), coords.len() + 1);
                prop_assert_eq!(boundary.first(), boundary.last());
            } else {
                prop_assert_eq!(boundary.len(), 1);
            }
        }
    }
}
