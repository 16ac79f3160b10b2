use super::*;

/// Adjacent clue pair with effective values 1 and 2 lying along a wall: the
/// hidden cell in line beyond the 1 is safe, the one beyond the 2 is a mine.
/// Each wall is walked once; the (2, 1) arm is the reversed traversal.
pub fn one_two_wall(board: &Board) -> Deductions {
    let mut found = Deductions::default();
    let (rows, cols) = board.size();

    for &row in &[0, rows - 1] {
        for col in 0..cols.saturating_sub(1) {
            let Some(values) = effective_pair(board, (row, col), (row, col + 1)) else {
                continue;
            };
            let before = col.checked_sub(1).map(|c| (row, c));
            let after = (col + 2 < cols).then(|| (row, col + 2));
            note_pair(board, &mut found, values, before, after);
        }
    }

    for &col in &[0, cols - 1] {
        for row in 0..rows.saturating_sub(1) {
            let Some(values) = effective_pair(board, (row, col), (row + 1, col)) else {
                continue;
            };
            let before = row.checked_sub(1).map(|r| (r, col));
            let after = (row + 2 < rows).then(|| (row + 2, col));
            note_pair(board, &mut found, values, before, after);
        }
    }

    found
}

fn note_pair(
    board: &Board,
    found: &mut Deductions,
    values: (i16, i16),
    before: Option<Coord2>,
    after: Option<Coord2>,
) {
    let (safe_side, mine_side) = match values {
        (1, 2) => (before, after),
        (2, 1) => (after, before),
        _ => return,
    };
    if let Some(pos) = safe_side {
        note(board, &mut found.safe, pos);
    }
    if let Some(pos) = mine_side {
        note(board, &mut found.mines, pos);
    }
}

/// Colinear clue run with effective values [1, 2, 1] along a wall: the two
/// interior cells diagonally beside the outer 1s are mines.
pub fn one_two_one_wall(board: &Board) -> Deductions {
    let mut found = Deductions::default();
    let (rows, cols) = board.size();

    if rows >= 2 {
        for (wall, interior) in [(0, 1), (rows - 1, rows - 2)] {
            for col in 0..cols.saturating_sub(2) {
                let run = [(wall, col), (wall, col + 1), (wall, col + 2)];
                if run_is_one_two_one(board, run) {
                    note(board, &mut found.mines, (interior, col));
                    note(board, &mut found.mines, (interior, col + 2));
                }
            }
        }
    }

    if cols >= 2 {
        for (wall, interior) in [(0, 1), (cols - 1, cols - 2)] {
            for row in 0..rows.saturating_sub(2) {
                let run = [(row, wall), (row + 1, wall), (row + 2, wall)];
                if run_is_one_two_one(board, run) {
                    note(board, &mut found.mines, (row, interior));
                    note(board, &mut found.mines, (row + 2, interior));
                }
            }
        }
    }

    found
}

fn run_is_one_two_one(board: &Board, run: [Coord2; 3]) -> bool {
    run.iter().all(|&pos| board.cell_state(pos).is_revealed())
        && run.map(|pos| effective_value(board, pos)) == [1, 2, 1]
}

/// Two effective-1 clues seen from either end of a row or column: the third
/// cell in line is safe.
pub fn one_one_edge(board: &Board) -> Deductions {
    let mut found = Deductions::default();
    let (rows, cols) = board.size();

    if cols >= 3 {
        for row in 0..rows {
            if pair_is_one_one(board, (row, 0), (row, 1)) {
                note(board, &mut found.safe, (row, 2));
            }
            if pair_is_one_one(board, (row, cols - 1), (row, cols - 2)) {
                note(board, &mut found.safe, (row, cols - 3));
            }
        }
    }

    if rows >= 3 {
        for col in 0..cols {
            if pair_is_one_one(board, (0, col), (1, col)) {
                note(board, &mut found.safe, (2, col));
            }
            if pair_is_one_one(board, (rows - 1, col), (rows - 2, col)) {
                note(board, &mut found.safe, (rows - 3, col));
            }
        }
    }

    found
}

fn pair_is_one_one(board: &Board, a: Coord2, b: Coord2) -> bool {
    matches!(effective_pair(board, a, b), Some((1, 1)))
}
