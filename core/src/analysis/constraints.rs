use super::*;

/// Single whole-board pass over every revealed clue and its neighborhood.
///
/// Two local rules, nothing cross-clue:
/// - when the hidden neighbors are exactly the unaccounted mines, all of
///   them are mines;
/// - when every mine around the clue is already flagged, all hidden
///   neighbors are safe.
pub fn constraint_pass(board: &Board) -> Deductions {
    let mut found = Deductions::default();
    let (rows, cols) = board.size();

    for row in 0..rows {
        for col in 0..cols {
            let clue = (row, col);
            if !board.cell_state(clue).is_revealed() {
                continue;
            }

            let hidden = hidden_neighbors(board, clue);
            if hidden.is_empty() {
                continue;
            }

            let effective = effective_value(board, clue);
            if effective > 0 && hidden.len() == effective as usize {
                found.mines.extend(hidden);
            } else if effective == 0 {
                found.safe.extend(hidden);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn fully_flagged_clue_marks_hidden_neighbors_safe() {
        let mut board = board((1, 3), &[(0, 0)]);
        board.toggle_flag((0, 0));
        board.reveal((0, 1)).unwrap();

        let found = constraint_pass(&board);

        assert!(found.mines.is_empty());
        assert_eq!(found.safe, [(0, 2)].into());
    }

    #[test]
    fn saturated_clue_marks_hidden_neighbors_as_mines() {
        let mut board = board((1, 3), &[(0, 0), (0, 2)]);
        board.reveal((0, 1)).unwrap();

        let found = constraint_pass(&board);

        assert_eq!(found.mines, [(0, 0), (0, 2)].into());
        assert!(found.safe.is_empty());
    }

    #[test]
    fn shared_deductions_are_deduplicated() {
        let mut board = board((2, 2), &[(0, 0)]);
        board.reveal((0, 1)).unwrap();
        board.reveal((1, 0)).unwrap();
        board.reveal((1, 1)).unwrap();

        let found = constraint_pass(&board);

        assert_eq!(found.mines, [(0, 0)].into());
    }

    #[test]
    fn over_flagged_clue_deduces_nothing() {
        let mut board = board((2, 3), &[(0, 0)]);
        board.toggle_flag((0, 0));
        board.toggle_flag((1, 0));
        board.reveal((0, 1)).unwrap();

        let found = constraint_pass(&board);

        assert!(found.is_empty());
    }

    #[test]
    fn unrevealed_board_yields_nothing() {
        let board = board((4, 4), &[(0, 0)]);
        assert!(constraint_pass(&board).is_empty());
    }
}
