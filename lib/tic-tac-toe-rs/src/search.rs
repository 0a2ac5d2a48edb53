use crate::{
    Board,
    Marker,
    Move,
    Outcome,
    DRAW,
    LOSS,
    WIN,
};

/// The score adjustment per ply of depth.
///
/// A maximizer's chosen score is lowered and a minimizer's is raised,
/// so faster wins and slower losses are preferred.
pub const DEPTH_PENALTY: i32 = 10;

/// Options for an [`AdversarialSearch`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Whether to use alpha-beta pruning.
    ///
    /// Turning this off gives plain minimax, which picks the same moves but visits every node.
    pub pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Counters from the last search.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The # of boards visited, including the root
    pub nodes: u64,

    /// The # of times the remaining siblings were pruned
    pub cutoffs: u64,
}

/// The result of a search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// The score, from the ai's perspective.
    pub score: i32,

    /// The best move, or `None` if the board was already over.
    pub best_move: Option<Move>,
}

impl SearchResult {
    /// Get the outcome that optimal play leads to, from the ai's perspective.
    ///
    /// Depth adjustments move scores away from [`WIN`], [`DRAW`] and [`LOSS`] by a few multiples of [`DEPTH_PENALTY`],
    /// so the score is bucketed by the midpoints between them.
    pub fn expected_outcome(&self) -> Outcome {
        if self.score > (WIN + DRAW) / 2 {
            Outcome::Win
        } else if self.score < (LOSS + DRAW) / 2 {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }
}

/// Minimax with alpha-beta pruning, scored from the ai's perspective.
#[derive(Debug, Clone, Default)]
pub struct AdversarialSearch {
    options: SearchOptions,
    stats: SearchStats,
}

impl AdversarialSearch {
    /// Make a new [`AdversarialSearch`] with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a new [`AdversarialSearch`] with the given options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            stats: SearchStats::default(),
        }
    }

    /// Get the options.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Get the counters of the last call to [`Self::best_move`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the best move for `side_to_move`.
    ///
    /// The board is changed during the search, but it is restored before this returns.
    pub fn best_move(&mut self, board: &mut Board, side_to_move: Marker) -> SearchResult {
        self.stats = SearchStats::default();
        self.search(board, side_to_move, 0, i32::MIN, i32::MAX)
    }

    /// Search a board that is `depth` plies below the root.
    ///
    /// `alpha` is the best score the ai is already guaranteed,
    /// `beta` is the best score the player is already guaranteed.
    pub fn search(
        &mut self,
        board: &mut Board,
        side_to_move: Marker,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let outcome = board.classify(Marker::Ai);
        if board.is_full() || outcome.is_terminal() {
            return SearchResult {
                score: outcome.score(),
                best_move: None,
            };
        }

        let maximizing = side_to_move == Marker::Ai;
        let penalty = i32::from(depth) * DEPTH_PENALTY;
        let mut best_score = if maximizing { LOSS } else { WIN };
        let mut best_move = None;

        for mv in board.legal_moves() {
            let mut trial = board.try_move(mv, side_to_move);
            let score = self
                .search(
                    &mut trial,
                    side_to_move.opponent(),
                    depth + 1,
                    alpha,
                    beta,
                )
                .score;

            if maximizing {
                if score > best_score {
                    best_score = score - penalty;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score + penalty;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            drop(trial);

            if self.options.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

/// Get the best move for the ai.
///
/// Returns `None` if the game is already over.
pub fn best_move(mut board: Board) -> Option<Move> {
    AdversarialSearch::new()
        .best_move(&mut board, Marker::Ai)
        .best_move
}
