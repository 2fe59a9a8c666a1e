use anyhow::{
    bail,
    Context,
};
use noughts_crosses::{
    Board,
    Outcome,
    Position,
    Symbol,
    GRID_SIZE,
};
use std::{
    io::{
        BufRead,
        Write,
    },
    num::ParseIntError,
    time::Instant,
};
use tracing::{
    debug,
    info,
};

/// A reason a human move was rejected
#[derive(Debug, thiserror::Error)]
pub enum MoveInputError {
    /// The input is not a number
    #[error("'{input}' is not a number")]
    NotANumber {
        input: String,
        #[source]
        error: ParseIntError,
    },

    /// The number is not in [1, 3]
    #[error("{0} is not between 1 and 3")]
    OutOfRange(i32),

    /// The cell has already been played
    #[error("column {col}, row {row} is already taken")]
    Occupied { col: usize, row: usize },
}

/// Parse a 1-based coordinate into a 0-based index.
pub fn parse_coordinate(input: &str) -> Result<usize, MoveInputError> {
    let input = input.trim();
    let value: i32 = input
        .parse()
        .map_err(|error| MoveInputError::NotANumber {
            input: input.to_string(),
            error,
        })?;

    match usize::try_from(value) {
        Ok(value) if (1..=GRID_SIZE).contains(&value) => Ok(value - 1),
        _ => Err(MoveInputError::OutOfRange(value)),
    }
}

/// Parse a human move, given as a 1-based column and row.
pub fn parse_move(board: &Board, col: &str, row: &str) -> Result<Position, MoveInputError> {
    let col = parse_coordinate(col)?;
    let row = parse_coordinate(row)?;

    if !board.is_empty(row, col) {
        return Err(MoveInputError::Occupied {
            col: col + 1,
            row: row + 1,
        });
    }

    Ok(Position::new(row, col))
}

/// Get the message printed at the end of a game
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Symbol::X) => "X WINS!",
        Outcome::Win(Symbol::O) => "O WINS!",
        Outcome::Draw => "WE DREW!",
    }
}

/// A game between a human on a terminal and the computer
#[derive(Debug)]
pub struct Game<R, W> {
    input: R,
    output: W,
    board: Board,
    human: Symbol,
    show_scores: bool,
}

impl<R, W> Game<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Make a new [`Game`] starting from the given board.
    pub fn new(input: R, output: W, board: Board, human: Symbol) -> Self {
        Self {
            input,
            output,
            board,
            human,
            show_scores: false,
        }
    }

    /// Print the score of each computer move.
    #[must_use]
    pub fn show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }

    /// Play until the game ends.
    ///
    /// # Errors
    /// Returns an error if the input ends before the game does, or on an io error.
    pub fn play(mut self) -> anyhow::Result<Outcome> {
        self.print_board()?;

        loop {
            if let Some(outcome) = self.board.outcome() {
                writeln!(self.output, "\n{}", outcome_message(outcome))?;
                self.output.flush()?;
                return Ok(outcome);
            }

            let symbol = self.board.turn();
            if symbol == self.human {
                let position = self.read_human_move()?;
                self.board.place(position.row, position.col, symbol);
                info!(%symbol, row = position.row, col = position.col, "human move");
            } else {
                self.play_computer_move(symbol)?;
            }

            writeln!(self.output, "\n{symbol} PLAYS:")?;
            self.print_board()?;
        }
    }

    #[tracing::instrument(skip(self))]
    fn play_computer_move(&mut self, symbol: Symbol) -> anyhow::Result<()> {
        let start = Instant::now();
        let score = noughts_crosses::determine_best_move(&mut self.board, symbol);
        debug!(score, "searched in {:?}", start.elapsed());
        info!(%symbol, moves = self.board.move_count(), "computer move");

        if self.show_scores {
            writeln!(self.output, "\nSCORE: {score}")?;
        }

        Ok(())
    }

    /// Ask for a move until a valid one is given.
    fn read_human_move(&mut self) -> anyhow::Result<Position> {
        loop {
            let col = self.prompt("\nEnter Column (1-3): ")?;
            let row = self.prompt("Enter Row (1-3): ")?;

            match parse_move(&self.board, &col, &row) {
                Ok(position) => return Ok(position),
                Err(error) => {
                    debug!("rejected move: {error}");
                    writeln!(self.output, "Invalid Co-ordinates. Try Again.")?;
                }
            }
        }
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        // Bad bytes are left for the move parser to reject.
        let mut line = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read move")?;
        if n == 0 {
            bail!("input ended before the game finished");
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.board)?;
        self.output.flush()?;
        Ok(())
    }
}
