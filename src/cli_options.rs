use camino::Utf8PathBuf;
use noughts_crosses::{
    Board,
    Symbol,
};

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Play Noughts and Crosses against a perfect computer opponent")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "Utf8PathBuf::from(\"./oxo.toml\")"
    )]
    pub config: Utf8PathBuf,

    #[argh(
        option,
        description = "the symbol to play as, X or O. X moves first"
    )]
    pub play_as: Option<Symbol>,

    #[argh(
        option,
        description = "the position to start from, rows separated by '/', like \"X_O/_X_/___\""
    )]
    pub board: Option<Board>,

    #[argh(
        switch,
        description = "print the score of each computer move"
    )]
    pub show_scores: bool,
}
