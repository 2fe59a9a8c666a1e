use crate::{
    WIN_FOR_O,
    WIN_FOR_X,
};

/// Failed to parse a [`Symbol`] from a [`char`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0} is not a valid Noughts-and-Crosses symbol")]
pub struct InvalidCharError(pub char);

/// Failed to parse a [`Symbol`] from a [`str`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidStrError {
    /// The string is the wrong length. It must contain exactly one char.
    ///
    /// The length is in chars.
    #[error("a Noughts-and-Crosses symbol cannot be made from inputs of length {0}")]
    InvalidLength(usize),

    /// The char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A Noughts-and-Crosses symbol
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the opposing symbol
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Get the char used to draw this symbol.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// The outcome score of a game this symbol has won.
    ///
    /// O is the maximizer, X the minimizer.
    pub fn win_score(self) -> i8 {
        match self {
            Self::X => WIN_FOR_X,
            Self::O => WIN_FOR_O,
        }
    }

    /// Try to parse a [`Symbol`] from a [`char`].
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' => Ok(Self::X),
            'o' | 'O' => Ok(Self::O),
            c => Err(InvalidCharError(c)),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Symbol {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from_char(c)?),
            _ => Err(InvalidStrError::InvalidLength(s.chars().count())),
        }
    }
}
