//! One position on the board and its candidate bookkeeping

use once_cell::sync::Lazy;

use crate::collections::square::{Coord, WIDTH};
use crate::puzzle::{Value, ValueSet};

/// For every cell index, the indices of its 20 peers
static PEERS: Lazy<Vec<Vec<usize>>> = Lazy::new(|| {
    (0..WIDTH * WIDTH)
        .map(|index| {
            let coord = Coord::from_index(index);
            (0..WIDTH * WIDTH)
                .filter(|&other| is_peer(coord, Coord::from_index(other)))
                .collect()
        })
        .collect()
});

/// Two distinct cells are peers if they share a row, a column, or a 3×3 block.
pub(crate) fn is_peer(a: Coord, b: Coord) -> bool {
    if a == b {
        return false;
    }
    a.row() == b.row()
        || a.col() == b.col()
        || (a.row() / 3 == b.row() / 3 && a.col() / 3 == b.col() / 3)
}

pub(crate) fn peers(coord: Coord) -> &'static [usize] {
    &PEERS[coord.index()]
}

/// Removal of a candidate, tagged with the cell whose assignment caused it
#[derive(Clone, Debug)]
struct Removal {
    origin: Coord,
    value: Value,
}

#[derive(Clone, Copy, Debug)]
enum State {
    /// Fixed by the original puzzle
    Clue(Value),
    /// Still open, with the values that remain possible
    Unresolved(ValueSet),
    /// Collapsed to a single value through elimination
    Guessed(Value),
}

/// Outcome of removing a candidate from a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Elimination {
    /// The origin does not see this cell
    NotPeer,
    /// The value was not among this cell's candidates
    Absent,
    /// The value was removed and logged
    Removed,
    /// The value was the last candidate and the cell committed to it
    Collapsed,
    /// Removing the value would empty a cell that is not the origin; refused
    Blocked,
}

/// One position on the board
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    state: State,
    removals: Vec<Removal>,
}

impl Cell {
    pub(crate) fn clue(coord: Coord, value: Value) -> Self {
        debug_assert!((1..=9).contains(&value));
        Self {
            coord,
            state: State::Clue(value),
            removals: Vec::new(),
        }
    }

    pub(crate) fn unresolved(coord: Coord, candidates: ValueSet) -> Self {
        Self {
            coord,
            state: State::Unresolved(candidates),
            removals: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_clue(&self) -> bool {
        matches!(self.state, State::Clue(_))
    }

    /// The clue or committed guess, or 0 while unresolved
    pub fn value(&self) -> Value {
        match self.state {
            State::Clue(value) | State::Guessed(value) => value,
            State::Unresolved(_) => 0,
        }
    }

    pub(crate) fn is_resolved(&self) -> bool {
        match self.state {
            State::Clue(_) | State::Guessed(_) => true,
            State::Unresolved(_) => false,
        }
    }

    pub(crate) fn candidates(&self) -> Option<ValueSet> {
        match self.state {
            State::Unresolved(candidates) => Some(candidates),
            _ => None,
        }
    }

    /// Sort key for the search: resolved cells first, then fewest candidates
    pub(crate) fn search_rank(&self) -> usize {
        match self.state {
            State::Unresolved(candidates) => candidates.len(),
            _ => 0,
        }
    }

    /// Removes `value` from this cell's candidates on behalf of `origin`.
    ///
    /// The removal is logged so that it can be reversed later by the same
    /// origin. Removing the last candidate commits the cell to that value,
    /// which only the cell itself may do; any other origin is refused with
    /// `Blocked`.
    pub(crate) fn eliminate(&mut self, origin: Coord, value: Value) -> Elimination {
        if origin != self.coord && !is_peer(origin, self.coord) {
            return Elimination::NotPeer;
        }
        let mut candidates = match self.state {
            State::Unresolved(candidates) => candidates,
            _ => return Elimination::Absent,
        };
        if !candidates.contains(value) {
            return Elimination::Absent;
        }
        let outcome = if candidates.len() == 1 {
            if origin != self.coord {
                return Elimination::Blocked;
            }
            self.state = State::Guessed(value);
            Elimination::Collapsed
        } else {
            candidates.remove(value);
            self.state = State::Unresolved(candidates);
            Elimination::Removed
        };
        self.removals.push(Removal { origin, value });
        outcome
    }

    /// Reverses an elimination previously logged for `origin` and `value`,
    /// clearing the guess if the cell had collapsed. Returns false and leaves
    /// the cell untouched if this origin never removed that value.
    pub(crate) fn restore(&mut self, origin: Coord, value: Value) -> bool {
        if self.is_clue() {
            panic!("restore on clue cell {}", self.coord);
        }
        let position = self
            .removals
            .iter()
            .rposition(|removal| removal.origin == origin && removal.value == value);
        let position = match position {
            Some(position) => position,
            None => return false,
        };
        self.removals.remove(position);
        match self.state {
            State::Guessed(_) => {
                let mut candidates = ValueSet::new();
                candidates.insert(value);
                self.state = State::Unresolved(candidates);
            }
            State::Unresolved(mut candidates) => {
                candidates.insert(value);
                self.state = State::Unresolved(candidates);
            }
            State::Clue(_) => unreachable!(),
        }
        true
    }
}
