use std::io;

use thiserror::Error;

use crate::collections::square::Coord;
use crate::puzzle::Value;

/// A raw grid value outside of the 0 to 9 range
#[derive(Error, Debug)]
#[error("cell {coord} has value {value}, outside of 0 to 9")]
pub struct InvalidValueError {
    pub coord: Coord,
    pub value: Value,
}

/// Failure to read a grid from text
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseGridError {
    #[error("invalid character '{token}' at position {index}")]
    InvalidCharacter { token: char, index: usize },
    #[error("expected 81 cells, found {count}")]
    WrongCellCount { count: usize },
}

/// Failure to read a board from a file
#[derive(Error, Debug)]
pub enum BoardFromFileError {
    #[error("error reading board file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseGridError),
}
