use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::*;

pub use constraints::*;
pub use patterns::*;

mod constraints;
mod patterns;

/// Cells proven to be mines or proven safe by a deduction rule. Ordered sets
/// so repeated hits deduplicate and iteration is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deductions {
    pub mines: BTreeSet<Coord2>,
    pub safe: BTreeSet<Coord2>,
}

impl Deductions {
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty() && self.safe.is_empty()
    }
}

/// Hidden neighbors of a clue cell.
fn hidden_neighbors(board: &Board, coords: Coord2) -> SmallVec<[Coord2; 8]> {
    board
        .iter_neighbors(coords)
        .filter(|&pos| board.cell_state(pos).is_hidden())
        .collect()
}

/// Clue value minus already-flagged neighbors: the mines still unaccounted
/// for among the hidden neighbors. Negative when the player over-flagged.
fn effective_value(board: &Board, coords: Coord2) -> i16 {
    let flagged = board
        .iter_neighbors(coords)
        .filter(|&pos| board.cell_state(pos).is_flagged())
        .count();
    i16::from(board.cell_value(coords)) - flagged as i16
}

/// Effective values of two clue cells, when both are revealed.
fn effective_pair(board: &Board, a: Coord2, b: Coord2) -> Option<(i16, i16)> {
    (board.cell_state(a).is_revealed() && board.cell_state(b).is_revealed())
        .then(|| (effective_value(board, a), effective_value(board, b)))
}

/// Record a deduced cell, dropping hits on already-resolved cells.
fn note(board: &Board, set: &mut BTreeSet<Coord2>, coords: Coord2) {
    if board.cell_state(coords).is_hidden() {
        set.insert(coords);
    }
}
