use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single move against the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    Flag(Coord2),
}

impl Action {
    pub const fn target(self) -> Coord2 {
        match self {
            Self::Reveal(coords) | Self::Flag(coords) => coords,
        }
    }
}

/// Move-selection seam shared by the deductive player and the baseline.
pub trait Agent {
    /// The next move, or `None` when no hidden cell remains. Every returned
    /// action targets a currently-hidden cell.
    fn choose_action(&mut self, board: &Board) -> Option<Action>;
}

/// Player that flags and reveals what the deduction rules prove, guessing
/// only when every rule is silent.
///
/// The rules are re-evaluated from scratch on every call; nothing is carried
/// between moves.
#[derive(Clone, Debug)]
pub struct PatternAgent {
    rng: SmallRng,
}

impl PatternAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Among hidden cells, prefer the one touching the most revealed cells
    /// (row-major first-encounter wins ties). With no information at all,
    /// take a corner, then a uniform draw.
    fn educated_guess(&mut self, board: &Board) -> Option<Action> {
        let (rows, cols) = board.size();
        let mut hidden = Vec::new();
        let mut best: Option<Coord2> = None;
        let mut best_revealed = 0;

        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if !board.cell_state(coords).is_hidden() {
                    continue;
                }
                let revealed = board
                    .iter_neighbors(coords)
                    .filter(|&pos| board.cell_state(pos).is_revealed())
                    .count();
                if best.is_none() || revealed > best_revealed {
                    best = Some(coords);
                    best_revealed = revealed;
                }
                hidden.push(coords);
            }
        }

        let best = best?;
        if best_revealed > 0 {
            return Some(Action::Reveal(best));
        }

        let corners = [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)];
        if let Some(&corner) = corners.iter().find(|&&pos| board.cell_state(pos).is_hidden()) {
            return Some(Action::Reveal(corner));
        }

        let pick = hidden[self.rng.random_range(0..hidden.len())];
        Some(Action::Reveal(pick))
    }
}

impl Agent for PatternAgent {
    fn choose_action(&mut self, board: &Board) -> Option<Action> {
        let certain = constraint_pass(board);
        if let Some(&coords) = certain.mines.first() {
            return Some(Action::Flag(coords));
        }
        if let Some(&coords) = certain.safe.first() {
            return Some(Action::Reveal(coords));
        }

        if let Some(&coords) = one_two_one_wall(board).mines.first() {
            return Some(Action::Flag(coords));
        }

        let wall = one_two_wall(board);
        if let Some(&coords) = wall.mines.first() {
            return Some(Action::Flag(coords));
        }
        if let Some(&coords) = wall.safe.first() {
            return Some(Action::Reveal(coords));
        }

        if let Some(&coords) = one_one_edge(board).safe.first() {
            return Some(Action::Reveal(coords));
        }

        self.educated_guess(board)
    }
}

/// Baseline control that skips deduction entirely: a uniform random reveal
/// among hidden cells.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, board: &Board) -> Option<Action> {
        let (rows, cols) = board.size();
        let mut hidden = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if board.cell_state((row, col)).is_hidden() {
                    hidden.push((row, col));
                }
            }
        }

        if hidden.is_empty() {
            return None;
        }
        let pick = hidden[self.rng.random_range(0..hidden.len())];
        Some(Action::Reveal(pick))
    }
}

/// Derived progress numbers for display and sanity checks. Computed from the
/// visibility grid, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_cells: CellCount,
    pub revealed_cells: CellCount,
    pub flagged_cells: CellCount,
    pub progress_pct: f32,
    pub flags_consistent: bool,
}

pub fn statistics(board: &Board) -> GameStats {
    let (rows, cols) = board.size();
    let mut revealed = 0;
    let mut flagged = 0;
    for row in 0..rows {
        for col in 0..cols {
            match board.cell_state((row, col)) {
                CellState::Revealed => revealed += 1,
                CellState::Flagged => flagged += 1,
                CellState::Hidden => {}
            }
        }
    }

    let safe = board.config().safe_cells();
    GameStats {
        total_cells: board.config().total_cells(),
        revealed_cells: revealed,
        flagged_cells: flagged,
        progress_pct: if safe == 0 {
            100.0
        } else {
            f32::from(revealed) * 100.0 / f32::from(safe)
        },
        flags_consistent: flagged <= board.total_mines(),
    }
}
