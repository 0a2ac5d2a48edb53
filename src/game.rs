use std::time::Instant;
use tic_tac_toe::{
    AdversarialSearch,
    Board,
    Marker,
    Move,
    Outcome,
    SearchOptions,
    SearchResult,
};
use tracing::{
    debug,
    warn,
};

/// Failed to make a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TryMoveError {
    /// The game is already over
    #[error("the game is over")]
    GameOver,

    /// It is the computer's turn
    #[error("it is not your turn")]
    NotYourTurn,

    /// The cell is already marked
    #[error("cell {0} is already taken")]
    Occupied(Move),
}

/// The status of a game, as shown to the human
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    AiWon,
    Draw,
}

impl GameStatus {
    /// Returns true if the game is over
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::InProgress => "Player's turn",
            Self::PlayerWon => "Player Wins!",
            Self::AiWon => "AI Wins!",
            Self::Draw => "Draw!",
        };
        f.write_str(status)
    }
}

/// A game between a human and the computer
#[derive(Debug)]
pub struct Game {
    board: Board,
    turn: Marker,
    search: AdversarialSearch,
}

impl Game {
    /// Make a new [`Game`].
    pub fn new(first: Marker, options: SearchOptions) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            search: AdversarialSearch::with_options(options),
        }
    }

    /// Get the board
    pub fn board(&self) -> Board {
        self.board
    }

    /// Get whos turn it is
    pub fn turn(&self) -> Marker {
        self.turn
    }

    /// Get the status of the game
    pub fn status(&self) -> GameStatus {
        match self.board.classify(Marker::Player) {
            Outcome::InProgress => GameStatus::InProgress,
            Outcome::Win => GameStatus::PlayerWon,
            Outcome::Loss => GameStatus::AiWon,
            Outcome::Draw => GameStatus::Draw,
        }
    }

    /// Try to make a move for the human.
    pub fn try_move(&mut self, mv: Move) -> Result<(), TryMoveError> {
        if self.status().is_over() {
            return Err(TryMoveError::GameOver);
        }

        if self.turn != Marker::Player {
            return Err(TryMoveError::NotYourTurn);
        }

        if self.board.get(mv).is_some() {
            return Err(TryMoveError::Occupied(mv));
        }

        self.board = self.board.set(mv, Some(Marker::Player));
        self.turn = Marker::Ai;

        Ok(())
    }

    /// Make the computer's move.
    ///
    /// # Returns
    /// Returns the move and the search result,
    /// or `None` if it is not the computer's turn or the game is over.
    pub fn computer_move(&mut self) -> Option<(Move, SearchResult)> {
        if self.turn != Marker::Ai || self.status().is_over() {
            return None;
        }

        let start = Instant::now();
        let result = self.search.best_move(&mut self.board, Marker::Ai);
        let stats = self.search.stats();
        debug!(
            board = %self.board,
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "searched in {:?}",
            start.elapsed()
        );

        let mv = self.choose_move(result)?;
        self.board = self.board.set(mv, Some(Marker::Ai));
        self.turn = Marker::Player;

        Some((mv, result))
    }

    /// Pick the move to play from a search result.
    ///
    /// The search only returns no move on a finished board.
    /// If it ever does so on an unfinished one, take the first free cell so the game does not stall.
    fn choose_move(&self, result: SearchResult) -> Option<Move> {
        match result.best_move {
            Some(mv) => Some(mv),
            None => {
                let fallback = self.board.legal_moves().next();
                warn!(
                    board = %self.board,
                    score = result.score,
                    "search returned no move on an unfinished board, falling back to {:?}",
                    fallback
                );
                fallback
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tic_tac_toe::DRAW;

    #[test]
    fn human_moves() {
        let mut game = Game::new(Marker::Player, SearchOptions::default());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.computer_move(), None);

        game.try_move(Move::new(1, 1)).expect("failed to move");
        assert_eq!(game.turn(), Marker::Ai);
        assert_eq!(
            game.try_move(Move::new(0, 0)),
            Err(TryMoveError::NotYourTurn)
        );

        let (mv, _) = game.computer_move().expect("missing computer move");
        assert_eq!(game.board().get(mv), Some(Marker::Ai));
        assert_eq!(game.turn(), Marker::Player);
        assert_eq!(game.try_move(mv), Err(TryMoveError::Occupied(mv)));
    }

    #[test]
    fn careless_human_loses() {
        let mut game = Game::new(Marker::Ai, SearchOptions::default());

        let (mv, _) = game.computer_move().expect("missing computer move");
        assert_eq!(mv, Move::new(0, 0));

        // The human always takes the first free cell
        while !game.status().is_over() {
            let mv = game
                .board()
                .legal_moves()
                .next()
                .expect("missing legal move");
            game.try_move(mv).expect("failed to move");
            game.computer_move();
        }

        assert_eq!(game.status(), GameStatus::AiWon);
        assert_eq!(game.try_move(Move::new(0, 0)), Err(TryMoveError::GameOver));
        assert_eq!(game.computer_move(), None);
    }

    #[test]
    fn missing_search_move_falls_back() {
        let mut game = Game::new(Marker::Ai, SearchOptions::default());
        game.board = "X--/-O-/---".parse().expect("invalid board");

        let result = SearchResult {
            score: DRAW,
            best_move: None,
        };
        assert_eq!(game.choose_move(result), Some(Move::new(0, 1)));

        let result = SearchResult {
            score: DRAW,
            best_move: Some(Move::new(2, 2)),
        };
        assert_eq!(game.choose_move(result), Some(Move::new(2, 2)));

        game.board = "XOX/XOO/OXX".parse().expect("invalid board");
        let result = SearchResult {
            score: DRAW,
            best_move: None,
        };
        assert_eq!(game.choose_move(result), None);
    }

    #[test]
    fn status_text() {
        assert_eq!(GameStatus::InProgress.to_string(), "Player's turn");
        assert_eq!(GameStatus::PlayerWon.to_string(), "Player Wins!");
        assert_eq!(GameStatus::AiWon.to_string(), "AI Wins!");
        assert_eq!(GameStatus::Draw.to_string(), "Draw!");
    }
}
