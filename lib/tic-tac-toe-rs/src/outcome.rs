/// The score of a won board, from the ai's perspective.
pub const WIN: i32 = 1000;

/// The score of a drawn board.
pub const DRAW: i32 = 0;

/// The score of a lost board, from the ai's perspective.
pub const LOSS: i32 = -1000;

/// The outcome of a board, relative to a fixed perspective marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The perspective marker won.
    Win,

    /// The opponent of the perspective marker won.
    Loss,

    /// The board is full and nobody won.
    Draw,

    /// The game is not over.
    InProgress,
}

impl Outcome {
    /// Returns true if the game is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Get the numeric value of this outcome.
    ///
    /// A board still in progress scores like a draw.
    pub fn score(self) -> i32 {
        match self {
            Self::Win => WIN,
            Self::Loss => LOSS,
            Self::Draw | Self::InProgress => DRAW,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scores() {
        assert_eq!(Outcome::Win.score(), WIN);
        assert_eq!(Outcome::Loss.score(), LOSS);
        assert_eq!(Outcome::Draw.score(), DRAW);
        assert_eq!(Outcome::InProgress.score(), DRAW);

        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }
}
