//! Parse boards from text

use crate::collections::square::WIDTH;
use crate::puzzle::error::ParseGridError;
use crate::puzzle::Value;

/// Parses a 9×9 grid of cell characters: `1` to `9` for clues, `0` or `.`
/// for unknown cells. Whitespace is ignored.
pub(crate) fn parse_grid(s: &str) -> Result<[[Value; WIDTH]; WIDTH], ParseGridError> {
    let mut cells = Vec::with_capacity(WIDTH * WIDTH);
    for (index, token) in s.char_indices() {
        if token.is_whitespace() {
            continue;
        }
        let value = match token {
            '.' => 0,
            _ => token
                .to_digit(10)
                .ok_or(ParseGridError::InvalidCharacter { token, index })? as Value,
        };
        cells.push(value);
    }
    if cells.len() != WIDTH * WIDTH {
        return Err(ParseGridError::WrongCellCount { count: cells.len() });
    }
    let mut values = [[0; WIDTH]; WIDTH];
    for (i, value) in cells.into_iter().enumerate() {
        values[i / WIDTH][i % WIDTH] = value;
    }
    Ok(values)
}
