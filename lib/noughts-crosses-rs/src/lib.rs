//! Noughts-and-Crosses with a perfect computer opponent.
//!
//! The [`Board`] is a plain `Copy` value.
//! The search in [`search`] copies it for every hypothetical move and never shares state.

mod board;
pub mod search;
mod symbol;

pub use crate::{
    board::{
        Board,
        Outcome,
        ParseBoardError,
        Position,
    },
    search::{
        determine_best_move,
        find_best_move,
        simulate_move,
    },
    symbol::{
        InvalidCharError,
        InvalidStrError,
        Symbol,
    },
};

/// The # of rows and columns
pub const GRID_SIZE: usize = 3;

/// The # of cells
pub const NUM_CELLS: u8 = 9;

/// The score of a game won by O, the maximizer
pub const WIN_FOR_O: i8 = 10;

/// The score of a game won by X, the minimizer
pub const WIN_FOR_X: i8 = -10;

/// The score of a drawn game
pub const DRAW: i8 = 0;
