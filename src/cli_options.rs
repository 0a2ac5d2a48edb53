use camino::Utf8PathBuf;
use tic_tac_toe::{
    Board,
    Marker,
};

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "A tic-tac-toe opponent that never loses")]
pub struct CliOptions {
    #[argh(option, description = "the path to the config")]
    pub config: Option<Utf8PathBuf>,

    #[argh(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand)]
pub enum Subcommand {
    BestMove(BestMoveOptions),
    Play(PlayOptions),
}

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "best-move",
    description = "print the best move for a board"
)]
pub struct BestMoveOptions {
    #[argh(
        positional,
        description = "the board, row by row, like `X--/-O-/---`"
    )]
    pub board: Board,

    #[argh(
        option,
        description = "the side to move, `x` or `o`",
        default = "Marker::Ai"
    )]
    pub side: Marker,

    #[argh(switch, description = "disable alpha-beta pruning")]
    pub no_pruning: bool,
}

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "play",
    description = "play a game against the computer"
)]
pub struct PlayOptions {
    #[argh(switch, description = "let the computer move first")]
    pub computer_first: bool,
}
