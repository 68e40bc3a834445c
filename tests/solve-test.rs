use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use sudoku_solver::collections::square::{Coord, Square};
use sudoku_solver::puzzle::{Board, Value};
use sudoku_solver::solve::SolveResult;

// Arto Inkala's "AI Escargot", a known single-solution puzzle
const ESCARGOT: [[Value; 9]; 9] = [
    [1, 0, 0, 0, 0, 7, 0, 9, 0],
    [0, 3, 0, 0, 2, 0, 0, 0, 8],
    [0, 0, 9, 6, 0, 0, 5, 0, 0],
    [0, 0, 5, 3, 0, 0, 9, 0, 0],
    [0, 1, 0, 0, 8, 0, 0, 0, 2],
    [6, 0, 0, 0, 0, 4, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 4, 0, 0, 0, 0, 0, 0, 7],
    [0, 0, 7, 0, 0, 0, 3, 0, 0],
];

const ESCARGOT_SOLUTION: [[Value; 9]; 9] = [
    [1, 6, 2, 8, 5, 7, 4, 9, 3],
    [5, 3, 4, 1, 2, 9, 6, 7, 8],
    [7, 8, 9, 6, 4, 3, 5, 2, 1],
    [4, 7, 5, 3, 1, 2, 9, 8, 6],
    [9, 1, 3, 5, 8, 6, 7, 4, 2],
    [6, 2, 8, 7, 9, 4, 1, 3, 5],
    [3, 5, 6, 4, 7, 8, 2, 1, 9],
    [2, 4, 1, 9, 3, 5, 8, 6, 7],
    [8, 9, 7, 2, 6, 1, 3, 5, 4],
];

const PARTIAL: [[Value; 9]; 9] = [
    [0, 0, 9, 0, 0, 0, 0, 0, 3],
    [0, 3, 0, 0, 5, 7, 0, 0, 0],
    [0, 0, 0, 8, 0, 0, 0, 0, 4],
    [2, 0, 0, 0, 0, 0, 1, 6, 0],
    [0, 5, 0, 1, 7, 6, 0, 0, 0],
    [0, 0, 0, 0, 0, 9, 0, 5, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [8, 6, 0, 4, 1, 0, 0, 0, 9],
    [0, 0, 2, 5, 0, 3, 4, 0, 0],
];

// consistent clues, but no completion exists
const VALID_UNSOLVABLE: [[Value; 9]; 9] = [
    [6, 2, 8, 5, 0, 0, 0, 0, 3],
    [9, 0, 0, 0, 0, 1, 6, 0, 0],
    [0, 0, 0, 0, 6, 0, 0, 7, 0],
    [7, 0, 0, 4, 0, 0, 0, 1, 0],
    [0, 0, 4, 0, 0, 0, 8, 0, 0],
    [0, 8, 0, 0, 0, 9, 0, 0, 5],
    [0, 1, 0, 0, 4, 0, 0, 0, 0],
    [0, 0, 5, 7, 0, 0, 0, 0, 9],
    [4, 0, 0, 0, 0, 3, 0, 2, 0],
];

#[test]
fn solves_known_puzzle() {
    let mut board = Board::new(&ESCARGOT).unwrap();
    assert!(board.is_valid());
    let result = board.solve();
    assert!(board.is_solvable());
    assert_values(&ESCARGOT_SOLUTION, result.solution().unwrap());
    assert_values(&ESCARGOT_SOLUTION, &board.values());
}

#[test]
fn solves_empty_board() {
    let mut board = Board::new(&[[0; 9]; 9]).unwrap();
    assert!(board.is_valid());
    let result = board.solve();
    assert!(board.is_solvable());
    assert_complete(result.solution().unwrap());
}

#[test]
fn solves_partial_board() {
    let mut board = Board::new(&PARTIAL).unwrap();
    let result = board.solve();
    assert!(board.is_solvable());
    let solution = result.solution().unwrap();
    assert_complete(solution);
    // clues are untouched
    for row in 0..9 {
        for col in 0..9 {
            if PARTIAL[row][col] > 0 {
                assert_eq!(PARTIAL[row][col], solution[Coord::new(row, col)]);
            }
        }
    }
}

#[test]
fn round_trips_a_solution() {
    let mut board = Board::new(&PARTIAL).unwrap();
    let result = board.solve();
    let solution = result.solution().unwrap();

    // feed the solution back in as a board of clues
    let mut clues = Board::new(&to_values(solution)).unwrap();
    assert!(clues.is_valid());
    let result = clues.solve();
    assert!(clues.is_solvable());
    assert_eq!(solution, result.solution().unwrap());
}

#[test]
fn complete_board_solves_immediately() {
    let mut board = Board::new(&ESCARGOT_SOLUTION).unwrap();
    assert!(board.is_valid());
    let result = board.solve();
    assert!(board.is_solvable());
    assert_values(&ESCARGOT_SOLUTION, result.solution().unwrap());
}

#[test]
fn unsolvable_board_is_restored() {
    let mut board = Board::new(&VALID_UNSOLVABLE).unwrap();
    assert!(board.is_valid());
    let before = board.values();
    match board.solve() {
        SolveResult::Unsolvable => (),
        result => panic!("expected Unsolvable, got {:?}", result),
    }
    assert!(!board.is_solvable());
    assert!(board.is_valid());
    assert_eq!(before, board.values());
}

#[test]
fn invalid_board_solve_is_a_no_op() {
    let mut values = [[0; 9]; 9];
    values[0][1] = 4;
    values[0][6] = 4;
    let mut board = Board::new(&values).unwrap();
    assert!(!board.is_valid());
    match board.solve() {
        SolveResult::Invalid => (),
        result => panic!("expected Invalid, got {:?}", result),
    }
    assert!(!board.is_solvable());
}

#[test]
fn reads_board_from_file() -> Result<()> {
    let mut board = Board::from_file(project_path("res/test/puzzles/escargot.txt"))?;
    let result = board.solve();
    assert_values(&ESCARGOT_SOLUTION, result.solution().unwrap());
    Ok(())
}

fn assert_values(expected: &[[Value; 9]; 9], actual: &Square<Value>) {
    for row in 0..9 {
        for col in 0..9 {
            assert_eq!(
                expected[row][col],
                actual[Coord::new(row, col)],
                "at ({}, {})",
                row,
                col
            );
        }
    }
}

fn assert_complete(solution: &Square<Value>) {
    let all: HashSet<Value> = (1..=9).collect();
    for i in 0..9 {
        let row: HashSet<Value> = (0..9).map(|j| solution[Coord::new(i, j)]).collect();
        assert_eq!(all, row, "row {}", i);
        let col: HashSet<Value> = (0..9).map(|j| solution[Coord::new(j, i)]).collect();
        assert_eq!(all, col, "column {}", i);
        let block: HashSet<Value> = (0..9)
            .map(|j| solution[Coord::new(i / 3 * 3 + j / 3, i % 3 * 3 + j % 3)])
            .collect();
        assert_eq!(all, block, "block {}", i);
    }
}

fn to_values(solution: &Square<Value>) -> [[Value; 9]; 9] {
    let mut values = [[0; 9]; 9];
    for row in 0..9 {
        for col in 0..9 {
            values[row][col] = solution[Coord::new(row, col)];
        }
    }
    values
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
