use crate::{
    cli_options::BestMoveOptions,
    config::Config,
};
use anyhow::Context;
use std::{
    io::Write,
    time::Instant,
};
use tic_tac_toe::{
    AdversarialSearch,
    Marker,
    Outcome,
    SearchOptions,
};
use tracing::info;

/// Print the best move for a board.
///
/// The first line is the move as `row col`, or `no move available` if the game is over.
pub fn run<W>(options: &BestMoveOptions, config: &Config, mut out: W) -> anyhow::Result<()>
where
    W: Write,
{
    let mut board = options.board;
    board
        .validate()
        .with_context(|| format!("`{}` is not a valid board", board))?;

    let search_options = SearchOptions {
        pruning: config.search().pruning() && !options.no_pruning,
    };
    let mut search = AdversarialSearch::with_options(search_options);

    let start = Instant::now();
    let result = search.best_move(&mut board, options.side);
    let stats = search.stats();
    info!(
        %board,
        side = %options.side,
        pruning = search_options.pruning,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "searched in {:?}",
        start.elapsed()
    );

    match result.best_move {
        Some(mv) => {
            writeln!(out, "{} {}", mv.row(), mv.col())?;
            writeln!(out, "score: {}", result.score)?;
            writeln!(out, "outcome: {}", outcome_name(result.expected_outcome()))?;
        }
        None => {
            writeln!(out, "no move available")?;
            writeln!(
                out,
                "outcome: {}",
                outcome_name(board.classify(Marker::Ai))
            )?;
        }
    }

    Ok(())
}

/// Describe an outcome from the ai's perspective
fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "o wins",
        Outcome::Loss => "x wins",
        Outcome::Draw => "draw",
        Outcome::InProgress => "in progress",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn best_move(board: &str, side: Marker, no_pruning: bool) -> anyhow::Result<String> {
        let options = BestMoveOptions {
            board: board.parse().expect("invalid board"),
            side,
            no_pruning,
        };
        let mut out = Vec::new();
        run(&options, &Config::default(), &mut out)?;
        Ok(String::from_utf8(out).expect("output is not utf8"))
    }

    #[test]
    fn immediate_win() {
        let output = best_move("OO-/XX-/X--", Marker::Ai, false).expect("failed to search");
        assert_eq!(output, "0 2\nscore: 1000\noutcome: o wins\n");
    }

    #[test]
    fn center_opening() {
        let output = best_move("X--/-O-/---", Marker::Ai, false).expect("failed to search");
        assert_eq!(output, "0 1\nscore: -30\noutcome: draw\n");

        let unpruned = best_move("X--/-O-/---", Marker::Ai, true).expect("failed to search");
        assert_eq!(unpruned, output);
    }

    #[test]
    fn player_to_move() {
        let output = best_move("---/---/---", Marker::Player, false).expect("failed to search");
        assert_eq!(output, "0 0\nscore: 40\noutcome: draw\n");
    }

    #[test]
    fn terminal_board() {
        let output = best_move("XOX/XOO/OXX", Marker::Ai, false).expect("failed to search");
        assert_eq!(output, "no move available\noutcome: draw\n");

        let output = best_move("XXX/OO-/---", Marker::Ai, false).expect("failed to search");
        assert_eq!(output, "no move available\noutcome: x wins\n");
    }

    #[test]
    fn invalid_board() {
        assert!(best_move("XXX/---/---", Marker::Ai, false).is_err());
        assert!(best_move("XXX/OOO/---", Marker::Ai, false).is_err());
    }
}
