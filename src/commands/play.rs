use crate::{
    cli_options::PlayOptions,
    config::{
        Config,
        FirstMove,
    },
    game::{
        Game,
        GameStatus,
    },
    util::AsciiTable,
};
use anyhow::Context;
use std::io::{
    BufRead,
    Write,
};
use tic_tac_toe::{
    LineKind,
    Marker,
    Move,
    NUM_TILES,
};
use tracing::{
    debug,
    info,
};

/// Failed to parse a cell from the human
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseCellError {
    /// The input is not `row col` or a single number
    #[error("enter a cell as `row col`, or a number from 1 to 9")]
    InvalidFormat,

    /// The cell is not on the board
    #[error("that cell is not on the board")]
    OutOfRange,
}

/// Parse a cell as `row col`, or as a tile number from 1 to 9.
fn parse_cell(input: &str) -> Result<Move, ParseCellError> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [tile] => {
            let tile: u8 = tile.parse().map_err(|_| ParseCellError::InvalidFormat)?;
            if !(1..=NUM_TILES).contains(&tile) {
                return Err(ParseCellError::OutOfRange);
            }
            Move::from_index(tile - 1).ok_or(ParseCellError::OutOfRange)
        }
        [row, col] => {
            let row: u8 = row.parse().map_err(|_| ParseCellError::InvalidFormat)?;
            let col: u8 = col.parse().map_err(|_| ParseCellError::InvalidFormat)?;
            Move::try_new(row, col).ok_or(ParseCellError::OutOfRange)
        }
        _ => Err(ParseCellError::InvalidFormat),
    }
}

/// Describe where a line is
fn describe_line(kind: LineKind) -> String {
    match kind {
        LineKind::Row(row) => format!("row {row}"),
        LineKind::Column(col) => format!("column {col}"),
        LineKind::Diagonal => "the diagonal".to_string(),
        LineKind::AntiDiagonal => "the anti-diagonal".to_string(),
    }
}

/// Play a game against the human on the other end of `input` and `out`.
///
/// # Returns
/// Returns the status of the game when it ended.
/// This is [`GameStatus::InProgress`] if the human quit early.
pub fn run<R, W>(
    options: &PlayOptions,
    config: &Config,
    input: R,
    mut out: W,
) -> anyhow::Result<GameStatus>
where
    R: BufRead,
    W: Write,
{
    let computer_first = options.computer_first || config.first_move() == FirstMove::Computer;
    let first = if computer_first {
        Marker::Ai
    } else {
        Marker::Player
    };
    info!("starting game, {} moves first", first);

    let mut game = Game::new(first, config.search().options());
    let mut lines = input.lines();

    writeln!(
        out,
        "You are {}. Enter a cell as `row col`, or `quit` to stop.",
        Marker::Player
    )?;

    loop {
        if let Some((mv, result)) = game.computer_move() {
            debug!(score = result.score, "computer played {}", mv);
            writeln!(out, "Computer plays {} {}", mv.row(), mv.col())?;
        }

        write!(out, "{}", AsciiTable::from_board(game.board()))?;

        let status = game.status();
        writeln!(out, "{}", status)?;

        if status.is_over() {
            let line = [Marker::Player, Marker::Ai]
                .into_iter()
                .find_map(|marker| game.board().winning_line(marker));
            if let Some(line) = line {
                writeln!(out, "{} holds {}", line.marker, describe_line(line.kind))?;
            }

            info!("game over: {}", status);
            return Ok(status);
        }

        loop {
            write!(out, "> ")?;
            out.flush().context("failed to flush output")?;

            let line = match lines.next() {
                Some(line) => line.context("failed to read input")?,
                None => {
                    writeln!(out)?;
                    info!("input closed, quitting");
                    return Ok(status);
                }
            };
            let line = line.trim();

            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                info!("human quit");
                return Ok(status);
            }

            let mv = match parse_cell(line) {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };

            match game.try_move(mv) {
                Ok(()) => {
                    debug!("human played {}", mv);
                    break;
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn play(computer_first: bool, input: &str) -> (GameStatus, String) {
        let options = PlayOptions { computer_first };
        let mut out = Vec::new();
        let status = run(
            &options,
            &Config::default(),
            Cursor::new(input.as_bytes()),
            &mut out,
        )
        .expect("failed to play");
        (status, String::from_utf8(out).expect("output is not utf8"))
    }

    #[test]
    fn parse() {
        assert_eq!(parse_cell("0 2"), Ok(Move::new(0, 2)));
        assert_eq!(parse_cell(" 2,1 "), Ok(Move::new(2, 1)));
        assert_eq!(parse_cell("1"), Ok(Move::new(0, 0)));
        assert_eq!(parse_cell("9"), Ok(Move::new(2, 2)));

        assert_eq!(parse_cell("0"), Err(ParseCellError::OutOfRange));
        assert_eq!(parse_cell("10"), Err(ParseCellError::OutOfRange));
        assert_eq!(parse_cell("3 0"), Err(ParseCellError::OutOfRange));
        assert_eq!(parse_cell(""), Err(ParseCellError::InvalidFormat));
        assert_eq!(parse_cell("a b"), Err(ParseCellError::InvalidFormat));
        assert_eq!(parse_cell("1 2 3"), Err(ParseCellError::InvalidFormat));
    }

    #[test]
    fn computer_wins() {
        let (status, output) = play(true, "2\n0 2\n");
        assert_eq!(status, GameStatus::AiWon);
        assert!(output.contains("Computer plays 0 0\n"));
        assert!(output.contains("Computer plays 1 0\n"));
        assert!(output.contains("Computer plays 2 0\n"));
        assert!(output.ends_with("AI Wins!\nO holds column 0\n"));
    }

    #[test]
    fn bad_input_is_retried() {
        let (status, output) = play(true, "9 9\nabc\n0 0\nquit\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("that cell is not on the board\n"));
        assert!(output.contains("enter a cell as `row col`, or a number from 1 to 9\n"));
        assert!(output.contains("cell (0, 0) is already taken\n"));
    }

    #[test]
    fn closed_input_quits() {
        let (status, output) = play(false, "");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("Player's turn\n"));
        assert!(!output.contains("Computer plays"));
    }
}
