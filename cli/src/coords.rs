use sapper_core::{Coord, Coord2};
use thiserror::Error;

/// Why a coordinate token was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Coordinate too short")]
    TooShort,
    #[error("Row must be a letter")]
    RowNotALetter,
    #[error("Row out of range")]
    RowOutOfRange,
    #[error("Column must be a number")]
    ColumnNotANumber,
    #[error("Column out of range")]
    ColumnOutOfRange,
}

/// Turns a player token like `A1` into a zero-based `(row, col)` position:
/// the leading letter is the row (case-insensitive), the rest is the
/// one-based column number.
pub fn parse(token: &str, size: Coord) -> Result<Coord2, CoordinateError> {
    let token = token.trim();
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return Err(CoordinateError::TooShort);
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(CoordinateError::TooShort);
    }

    if !first.is_ascii_alphabetic() {
        return Err(CoordinateError::RowNotALetter);
    }
    let row = first.to_ascii_uppercase() as u8 - b'A';
    if row >= size {
        return Err(CoordinateError::RowOutOfRange);
    }

    let col = match rest.parse::<i64>() {
        Ok(value) if (1..=i64::from(size)).contains(&value) => (value - 1) as Coord,
        Ok(_) => return Err(CoordinateError::ColumnOutOfRange),
        Err(_) => return Err(CoordinateError::ColumnNotANumber),
    };

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corners_of_a_4x4_board() {
        assert_eq!(parse("A1", 4), Ok((0, 0)));
        assert_eq!(parse("D4", 4), Ok((3, 3)));
    }

    #[test]
    fn accepts_lowercase_and_surrounding_whitespace() {
        assert_eq!(parse("a1", 4), Ok((0, 0)));
        assert_eq!(parse(" b3 ", 4), Ok((1, 2)));
    }

    #[test]
    fn rejects_rows_past_the_board() {
        assert_eq!(parse("Z1", 4), Err(CoordinateError::RowOutOfRange));
        assert_eq!(parse("E1", 4), Err(CoordinateError::RowOutOfRange));
    }

    #[test]
    fn rejects_columns_outside_one_to_size() {
        assert_eq!(parse("A9", 4), Err(CoordinateError::ColumnOutOfRange));
        assert_eq!(parse("A0", 4), Err(CoordinateError::ColumnOutOfRange));
        assert_eq!(parse("A-1", 4), Err(CoordinateError::ColumnOutOfRange));
    }

    #[test]
    fn rejects_tokens_that_do_not_lead_with_a_letter() {
        assert_eq!(parse("1A", 4), Err(CoordinateError::RowNotALetter));
        assert_eq!(parse("?2", 4), Err(CoordinateError::RowNotALetter));
    }

    #[test]
    fn rejects_short_or_empty_tokens() {
        assert_eq!(parse("", 4), Err(CoordinateError::TooShort));
        assert_eq!(parse("A", 4), Err(CoordinateError::TooShort));
        assert_eq!(parse("  ", 4), Err(CoordinateError::TooShort));
    }

    #[test]
    fn rejects_non_numeric_columns() {
        assert_eq!(parse("AB", 4), Err(CoordinateError::ColumnNotANumber));
        assert_eq!(parse("A1x", 4), Err(CoordinateError::ColumnNotANumber));
    }
}
