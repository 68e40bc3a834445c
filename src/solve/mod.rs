//! Solve Sudoku boards

use log::info;

use crate::puzzle::{Board, Solution};

mod search;

/// The outcome of solving a board
#[derive(Debug)]
pub enum SolveResult {
    /// The board breaks a row, column, or block constraint; nothing was tried
    Invalid,
    /// Every assignment was exhausted without finding a solution
    Unsolvable,
    /// The board was solved
    Solved(Solution),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveResult::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

impl Board {
    /// Searches for a complete assignment of values to cells.
    ///
    /// An invalid board is left untouched. An unsolvable board is restored
    /// to its exact pre-solve state before returning.
    pub fn solve(&mut self) -> SolveResult {
        if !self.is_valid() {
            return SolveResult::Invalid;
        }
        info!("Begin search");
        if search::search_from(self, 0) {
            self.solvable = true;
            SolveResult::Solved(self.values())
        } else {
            SolveResult::Unsolvable
        }
    }
}
