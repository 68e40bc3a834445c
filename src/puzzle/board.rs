use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::collections::square::{Coord, Square, WIDTH};
use crate::puzzle::cell::peers;
use crate::puzzle::error::{BoardFromFileError, InvalidValueError, ParseGridError};
use crate::puzzle::{parse, Cell, Value, ValueSet};

/// A 9×9 Sudoku board
///
/// Cells are created once, at construction, and mutated in place while
/// solving. The cell list is reordered by the search but always holds the
/// same 81 cells.
#[derive(Debug)]
pub struct Board {
    pub(crate) cells: Vec<Cell>,
    valid: bool,
    pub(crate) solvable: bool,
}

impl Board {
    /// Builds a board from raw values, 1 through 9 for clues and 0 for
    /// unknown cells. Fails on the first value outside of that range.
    pub fn new(values: &[[Value; WIDTH]; WIDTH]) -> Result<Self, InvalidValueError> {
        for (row, col) in (0..WIDTH).cartesian_product(0..WIDTH) {
            let value = values[row][col];
            if !(0..=9).contains(&value) {
                return Err(InvalidValueError {
                    coord: Coord::new(row, col),
                    value,
                });
            }
        }
        let mut valid = true;
        let cells = (0..WIDTH)
            .cartesian_product(0..WIDTH)
            .map(|(row, col)| {
                let coord = Coord::new(row, col);
                let value = values[row][col];
                if value > 0 {
                    if peer_values(values, coord).any(|peer_value| peer_value == value) {
                        valid = false;
                    }
                    Cell::clue(coord, value)
                } else {
                    let mut candidates = ValueSet::with_all();
                    for peer_value in peer_values(values, coord) {
                        candidates.remove(peer_value);
                    }
                    Cell::unresolved(coord, candidates)
                }
            })
            .collect();
        Ok(Self {
            cells,
            valid,
            solvable: false,
        })
    }

    /// Parses a board from text, see the cell format in `parse`
    pub fn parse(s: &str) -> Result<Self, ParseGridError> {
        let values = parse::parse_grid(s)?;
        // parsed cells are single digits, always in range
        Ok(Self::new(&values).expect("parsed values in range"))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoardFromFileError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// True if no two clues conflict in any row, column, or block
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True once a solve has completed successfully
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Snapshot of the board: the clue or committed guess per cell, 0 where
    /// unresolved
    pub fn values(&self) -> Square<Value> {
        let mut values = Square::with_value(0);
        for cell in &self.cells {
            values[cell.coord()] = cell.value();
        }
        values
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        self.cells
            .iter()
            .find(|cell| cell.coord() == coord)
            .expect("every coordinate has a cell")
    }
}

fn peer_values<'a>(
    values: &'a [[Value; WIDTH]; WIDTH],
    coord: Coord,
) -> impl Iterator<Item = Value> + 'a {
    peers(coord)
        .iter()
        .map(move |&index| {
            let peer = Coord::from_index(index);
            values[peer.row()][peer.col()]
        })
        .filter(|&value| value > 0)
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.values().fmt(f)
    }
}
