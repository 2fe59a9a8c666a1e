use crate::{
    InvalidCharError,
    Symbol,
    GRID_SIZE,
    NUM_CELLS,
};

/// A line of 3 cells, as (row, col) pairs.
type Line = [(usize, usize); 3];

/// Every line that wins a game.
///
/// Each line is sorted in row-major order.
const LINES: [Line; 8] = [
    // Horizontal Wins
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Vertical Wins
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonal win
    [(0, 0), (1, 1), (2, 2)],
    // Anti-Diagonal win
    [(0, 2), (1, 1), (2, 0)],
];

/// Failed to build a [`Board`] from rows of text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseBoardError {
    /// There must be exactly 3 rows.
    #[error("expected 3 rows, got {0}")]
    InvalidRowCount(usize),

    /// A row must have exactly 3 cells.
    #[error("row {row} has {len} cells, expected 3")]
    InvalidRowLength { row: usize, len: usize },

    /// A cell is not `X`, `O` or `_`.
    #[error("invalid cell in row {row}")]
    InvalidCell {
        row: usize,
        #[source]
        error: InvalidCharError,
    },

    /// The position cannot be reached by alternating moves with X first.
    #[error("{x} X's and {o} O's cannot be reached by alternating play")]
    UnbalancedCounts { x: u8, o: u8 },
}

/// A cell on the board, 0-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Make a new [`Position`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The result of a finished game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The symbol completed a line.
    Win(Symbol),

    /// The board filled up with no line.
    Draw,
}

/// A Noughts-and-Crosses board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Symbol>; GRID_SIZE]; GRID_SIZE],

    // Always equal to the number of occupied cells.
    move_count: u8,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            move_count: 0,
        }
    }

    /// Build a board from 3 rows of text, top to bottom.
    ///
    /// Each row has 3 cells, `X`, `O` or `_` for an empty cell.
    /// Lowercase symbols are accepted.
    pub fn from_rows(rows: [&str; GRID_SIZE]) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != GRID_SIZE {
                return Err(ParseBoardError::InvalidRowLength { row, len });
            }

            for (col, c) in text.chars().enumerate() {
                if c == '_' {
                    continue;
                }

                let symbol = Symbol::from_char(c)
                    .map_err(|error| ParseBoardError::InvalidCell { row, error })?;
                board.place(row, col, symbol);
            }
        }

        let (x, o) = board.counts();
        if x != o && x != o + 1 {
            return Err(ParseBoardError::UnbalancedCounts { x, o });
        }

        Ok(board)
    }

    /// Place a symbol on an empty cell.
    ///
    /// The caller must check the cell with [`Self::is_empty`] first.
    ///
    /// # Panics
    /// Panics if the row or column is >= 3.
    pub fn place(&mut self, row: usize, col: usize, symbol: Symbol) {
        debug_assert!(
            self.is_empty(row, col),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[row][col] = Some(symbol);
        self.move_count += 1;
    }

    /// Get the cell at the given row and column.
    ///
    /// # Panics
    /// Panics if the row or column is >= 3.
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[row][col]
    }

    /// Returns true if nobody has played the cell.
    ///
    /// # Panics
    /// Panics if the row or column is >= 3.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Returns true if every cell has been played.
    ///
    /// This does not check for wins.
    pub fn is_full(&self) -> bool {
        self.move_count >= NUM_CELLS
    }

    /// The number of moves made so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Check if the given symbol holds a complete row, column or diagonal.
    pub fn has_won(&self, symbol: Symbol) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| self.cells[row][col] == Some(symbol))
        })
    }

    /// Get the winner if they exist
    pub fn winner(&self) -> Option<Symbol> {
        if self.has_won(Symbol::X) {
            Some(Symbol::X)
        } else if self.has_won(Symbol::O) {
            Some(Symbol::O)
        } else {
            None
        }
    }

    /// Get the outcome of the game, or `None` if it is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(symbol) => Some(Outcome::Win(symbol)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Get the symbol whos turn it is.
    ///
    /// X always moves first.
    pub fn turn(&self) -> Symbol {
        let (x, o) = self.counts();
        if x > o {
            Symbol::O
        } else {
            Symbol::X
        }
    }

    /// Iterate over the empty cells, row by row from the top left.
    ///
    /// The iterator holds its own copy of the board.
    pub fn empty_cells(self) -> impl Iterator<Item = Position> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
            .filter(move |position| self.is_empty(position.row, position.col))
    }

    /// Render the board as 3 rows of 3 chars.
    ///
    /// Empty cells are drawn as `_`.
    /// The iterator holds its own copy of the board.
    pub fn render(self) -> impl Iterator<Item = impl Iterator<Item = char>> {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().map(cell_char))
    }

    /// Count the X's and O's on the board
    fn counts(&self) -> (u8, u8) {
        let mut x = 0;
        let mut o = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Some(Symbol::X) => x += 1,
                Some(Symbol::O) => o += 1,
                None => {}
            }
        }
        (x, o)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.render() {
            for c in row {
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse rows separated by `/` or whitespace, like `X_O/_X_/O__`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        let rows: [&str; GRID_SIZE] = rows
            .try_into()
            .map_err(|rows: Vec<&str>| ParseBoardError::InvalidRowCount(rows.len()))?;

        Self::from_rows(rows)
    }
}

fn cell_char(cell: Option<Symbol>) -> char {
    cell.map_or('_', Symbol::as_char)
}
