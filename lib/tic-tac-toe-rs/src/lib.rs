//! A perfect Tic-Tac-Toe opponent.
//!
//! [`AdversarialSearch`] runs minimax with alpha-beta pruning over a [`Board`],
//! always scoring from the perspective of [`Marker::Ai`].

mod board;
mod marker;
mod outcome;
mod search;

pub use self::{
    board::{
        Board,
        BoardParseError,
        InvalidBoardError,
        LegalMoves,
        LineKind,
        Move,
        Occupied,
        TrialMove,
        WinningLine,
        SIZE,
        WINNING_TRIPLES,
    },
    marker::{
        InvalidCharError,
        InvalidStrError,
        Marker,
    },
    outcome::{
        Outcome,
        DRAW,
        LOSS,
        WIN,
    },
    search::{
        best_move,
        AdversarialSearch,
        SearchOptions,
        SearchResult,
        SearchStats,
        DEPTH_PENALTY,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;
