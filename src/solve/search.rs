//! Recursive propagate-and-backtrack search

use itertools::Itertools;
use log::debug;

use crate::puzzle::{Board, Elimination, Value};

/// Searches `board.cells[index..]` for a consistent assignment. Cells before
/// `index` are committed by outer frames and never touched.
///
/// Returns true once every cell is resolved; the assignments stand. Returns
/// false after exhausting every candidate, with the board restored to the
/// exact state it had on entry.
pub(crate) fn search_from(board: &mut Board, index: usize) -> bool {
    // most constrained cells first; ties broken by position for determinism
    board.cells[index..].sort_by_key(|cell| (cell.search_rank(), cell.coord().index()));
    if index == board.cells.len() {
        return true;
    }
    if board.cells[index].is_resolved() {
        return search_from(board, index + 1);
    }
    let coord = board.cells[index].coord();
    let candidates = board.cells[index]
        .candidates()
        .expect("unresolved cell has candidates")
        .iter()
        .collect_vec();
    for (branch, &value) in candidates.iter().enumerate() {
        debug!("guessing {} at {} (branch {})", value, coord, branch + 1);
        if guess_value(board, index, value, &candidates) {
            return true;
        }
        debug!("guess {} at {} failed", value, coord);
    }
    false
}

/// Commits `value` at `board.cells[index]`, propagates the consequences, and
/// recurses. On a dead branch every elimination is reversed before returning.
fn guess_value(board: &mut Board, index: usize, value: Value, candidates: &[Value]) -> bool {
    let coord = board.cells[index].coord();

    // commit the guess: drop the alternatives, then the value itself, which
    // collapses the cell
    for &other in candidates.iter().filter(|&&other| other != value) {
        let outcome = board.cells[index].eliminate(coord, other);
        debug_assert_eq!(Elimination::Removed, outcome);
    }
    let outcome = board.cells[index].eliminate(coord, value);
    debug_assert_eq!(Elimination::Collapsed, outcome);

    // propagate to every cell not yet committed
    let mut contradiction = false;
    for i in index + 1..board.cells.len() {
        if board.cells[i].eliminate(coord, value) == Elimination::Blocked {
            debug!("{} at {} empties a peer", value, coord);
            contradiction = true;
            break;
        }
    }

    if !contradiction && search_from(board, index + 1) {
        return true;
    }

    // dead branch: undo the propagated eliminations, then this cell's own
    for i in index + 1..board.cells.len() {
        board.cells[i].restore(coord, value);
    }
    for &other in candidates {
        board.cells[index].restore(coord, other);
    }
    false
}
