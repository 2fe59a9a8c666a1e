//! Full-depth minimax over the 3x3 board.
//!
//! O is the maximizer and X the minimizer.
//! There is no pruning and no depth discount,
//! so a win in 1 move scores the same as a win in 9.

use crate::{
    Board,
    Position,
    Symbol,
    DRAW,
};

/// Find the best move for `symbol` without touching the board.
///
/// Candidates are tried row by row from the top left.
/// A later candidate only replaces the current best if it is strictly better for `symbol`,
/// so ties go to the first cell found.
///
/// # Returns
/// Returns a tuple. The first element is the score. The second is the move.
/// The move is `None` only if the board has no empty cells,
/// in which case the score is the worst possible outcome for `symbol`.
pub fn find_best_move(board: &Board, symbol: Symbol) -> (i8, Option<Position>) {
    let mut best_score = symbol.other().win_score();
    let mut best_move = None;

    for position in board.empty_cells() {
        let score = simulate_move(board, position.row, position.col, symbol);

        let is_better = match symbol {
            Symbol::O => score > best_score,
            Symbol::X => score < best_score,
        };

        // If every move loses, fall back to the first empty cell.
        if is_better || best_move.is_none() {
            best_score = score;
            best_move = Some(position);
        }
    }

    (best_score, best_move)
}

/// Determine the best move for `symbol` and play it.
///
/// The board should not be finished.
/// This is not checked; a full board is left alone
/// and the worst possible outcome for `symbol` is returned.
///
/// # Returns
/// Returns the score of the move that was played.
pub fn determine_best_move(board: &mut Board, symbol: Symbol) -> i8 {
    let (score, position) = find_best_move(board, symbol);
    if let Some(position) = position {
        board.place(position.row, position.col, symbol);
    }
    score
}

/// Score playing `symbol` at the given cell, assuming perfect play afterwards.
///
/// The cell must be empty.
/// The given board is not modified.
pub fn simulate_move(board: &Board, row: usize, col: usize, symbol: Symbol) -> i8 {
    let mut board = *board;
    board.place(row, col, symbol);

    if board.has_won(symbol) {
        return symbol.win_score();
    }

    if board.is_full() {
        return DRAW;
    }

    determine_best_move(&mut board, symbol.other())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        WIN_FOR_O,
        WIN_FOR_X,
    };

    #[test]
    fn x_completes_row() {
        let mut board = Board::from_rows(["XX_", "_O_", "___"]).unwrap();
        let score = determine_best_move(&mut board, Symbol::X);

        assert_eq!(score, WIN_FOR_X);
        assert_eq!(board.get(0, 2), Some(Symbol::X));
        assert!(board.has_won(Symbol::X));
        assert_eq!(board.move_count(), 4);
    }

    #[test]
    fn x_forks() {
        let mut board = Board::from_rows(["X_O", "_O_", "__X"]).unwrap();
        let score = determine_best_move(&mut board, Symbol::X);

        assert_eq!(score, WIN_FOR_X, "expected X win");
        assert_eq!(board.get(2, 0), Some(Symbol::X));
    }

    #[test]
    fn o_blocks_into_fork() {
        let mut board = Board::from_rows(["XX_", "_O_", "_XO"]).unwrap();
        let score = determine_best_move(&mut board, Symbol::O);

        assert_eq!(score, WIN_FOR_O, "expected O win");
        assert_eq!(board.get(0, 2), Some(Symbol::O));
    }

    #[test]
    fn last_move_draws() {
        let board = Board::from_rows(["XOX", "XOO", "OX_"]).unwrap();

        assert_eq!(simulate_move(&board, 2, 2, Symbol::X), DRAW);
        assert_eq!(board.move_count(), 8);
        assert!(board.is_empty(2, 2));

        let mut board = board;
        board.place(2, 2, Symbol::X);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn simulate_move_is_pure() {
        let board = Board::from_rows(["X__", "_O_", "___"]).unwrap();
        let first = simulate_move(&board, 0, 1, Symbol::X);
        let second = simulate_move(&board, 0, 1, Symbol::X);

        assert_eq!(first, second);
        assert_eq!(board.move_count(), 2);
        assert!(board.is_empty(0, 1));
    }

    #[test]
    fn find_best_move_is_pure() {
        let board = Board::from_rows(["XX_", "_O_", "___"]).unwrap();
        let (score, position) = find_best_move(&board, Symbol::X);

        assert_eq!(score, WIN_FOR_X);
        assert_eq!(position, Some(Position::new(0, 2)));
        assert_eq!(board.move_count(), 3);
    }

    #[test]
    fn lost_position_still_moves() {
        // O cannot stop both X threats.
        let mut board = Board::from_rows(["X_O", "_O_", "XX_"]).unwrap();
        let (score, position) = find_best_move(&board, Symbol::O);
        assert_eq!(score, WIN_FOR_X);
        assert_eq!(position, Some(Position::new(0, 1)));

        let score = determine_best_move(&mut board, Symbol::O);
        assert_eq!(score, WIN_FOR_X);
        assert_eq!(board.get(0, 1), Some(Symbol::O));
    }

    #[test]
    fn full_board_is_left_alone() {
        let mut board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        let before = board;

        assert_eq!(determine_best_move(&mut board, Symbol::O), WIN_FOR_X);
        assert_eq!(determine_best_move(&mut board, Symbol::X), WIN_FOR_O);
        assert_eq!(board, before);
    }

    #[test]
    fn empty_board_is_a_draw() {
        let (score, position) = find_best_move(&Board::new(), Symbol::X);
        assert_eq!(score, DRAW);
        assert_eq!(position, Some(Position::new(0, 0)));
    }
}
