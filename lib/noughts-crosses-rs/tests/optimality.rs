use noughts_crosses::{
    determine_best_move,
    find_best_move,
    simulate_move,
    Board,
    Outcome,
    Symbol,
    DRAW,
    WIN_FOR_O,
    WIN_FOR_X,
};
use std::collections::HashSet;

/// Collect every board reachable from the empty board that is not finished yet.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.outcome().is_some() {
            continue;
        }
        boards.push(board);

        let symbol = board.turn();
        for position in board.empty_cells() {
            let mut child = board;
            child.place(position.row, position.col, symbol);
            stack.push(child);
        }
    }

    boards
}

#[test]
fn chosen_move_is_never_worse_than_any_alternative() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 4520);

    for board in boards {
        let symbol = board.turn();
        let (score, position) = find_best_move(&board, symbol);
        let position = position.expect("unfinished board has no move");

        assert!([WIN_FOR_X, DRAW, WIN_FOR_O].contains(&score));
        assert!(board.is_empty(position.row, position.col));
        assert_eq!(
            simulate_move(&board, position.row, position.col, symbol),
            score
        );

        for alternative in board.empty_cells() {
            let alternative_score =
                simulate_move(&board, alternative.row, alternative.col, symbol);
            match symbol {
                Symbol::O => assert!(score >= alternative_score, "{board}"),
                Symbol::X => assert!(score <= alternative_score, "{board}"),
            }
        }
    }
}

/// Play every possible X game against the engine as O.
fn play_all_x_lines(board: Board, results: &mut Vec<Outcome>) {
    for position in board.empty_cells() {
        let mut board = board;
        board.place(position.row, position.col, Symbol::X);
        if let Some(outcome) = board.outcome() {
            results.push(outcome);
            continue;
        }

        determine_best_move(&mut board, Symbol::O);
        match board.outcome() {
            Some(outcome) => results.push(outcome),
            None => play_all_x_lines(board, results),
        }
    }
}

#[test]
fn engine_never_loses_as_o() {
    let mut results = Vec::new();
    play_all_x_lines(Board::new(), &mut results);

    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|outcome| *outcome != Outcome::Win(Symbol::X)));
    assert!(results.contains(&Outcome::Win(Symbol::O)));
}

#[test]
fn engine_never_loses_as_x() {
    let mut board = Board::new();
    determine_best_move(&mut board, Symbol::X);

    let mut stack = vec![board];
    let mut games = 0;
    while let Some(board) = stack.pop() {
        for position in board.empty_cells() {
            let mut board = board;
            board.place(position.row, position.col, Symbol::O);
            assert_ne!(board.outcome(), Some(Outcome::Win(Symbol::O)));
            if board.outcome().is_some() {
                games += 1;
                continue;
            }

            determine_best_move(&mut board, Symbol::X);
            match board.outcome() {
                Some(outcome) => {
                    assert_ne!(outcome, Outcome::Win(Symbol::O));
                    games += 1;
                }
                None => stack.push(board),
            }
        }
    }

    assert!(games > 0);
}
