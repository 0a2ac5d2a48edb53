use crate::{
    InvalidCharError,
    Marker,
    Outcome,
    NUM_TILES,
};
use std::ops::{
    Deref,
    DerefMut,
};

/// The # of rows, and the # of columns, of a board.
pub const SIZE: u8 = 3;

/// The eight lines that win a game.
///
/// Rows first, then columns, then the diagonal and the anti-diagonal.
pub const WINNING_TRIPLES: [[Move; 3]; 8] = [
    // Every row
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Every column
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Every diagonal
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)],
];

const LINE_KINDS: [LineKind; 8] = [
    LineKind::Row(0),
    LineKind::Row(1),
    LineKind::Row(2),
    LineKind::Column(0),
    LineKind::Column(1),
    LineKind::Column(2),
    LineKind::Diagonal,
    LineKind::AntiDiagonal,
];

// Bit masks of WINNING_TRIPLES, one bit per tile in row-major order
const WINNING_MASKS: [u16; 8] = {
    let mut masks = [0; 8];
    let mut i = 0;
    while i < WINNING_TRIPLES.len() {
        let triple = WINNING_TRIPLES[i];
        masks[i] = triple[0].mask() | triple[1].mask() | triple[2].mask();
        i += 1;
    }
    masks
};

/// Failed to parse a [`Board`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum BoardParseError {
    /// The board does not have exactly 9 tiles.
    #[error("a Tic-Tac-Toe board has 9 tiles, got {0}")]
    InvalidLength(usize),

    /// A tile char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A board that could not have come from alternating play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoardError {
    /// One marker was placed at least twice in a row.
    #[error("marker counts differ by more than one (player: {player}, ai: {ai})")]
    MarkerCountMismatch {
        /// The # of player markers
        player: u32,

        /// The # of ai markers
        ai: u32,
    },

    /// Both markers hold a winning line.
    #[error("both markers have won")]
    BothWon,
}

/// A cell on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// Make a new [`Move`].
    ///
    /// # Panics
    /// Panics if the row or column is >= 3.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Make a new [`Move`], returning `None` if the row or column is out of range.
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Make a [`Move`] from a row-major tile index.
    pub fn from_index(index: u8) -> Option<Self> {
        if index < NUM_TILES {
            Some(Self {
                row: index / SIZE,
                col: index % SIZE,
            })
        } else {
            None
        }
    }

    /// The row, from the top.
    pub fn row(self) -> u8 {
        self.row
    }

    /// The column, from the left.
    pub fn col(self) -> u8 {
        self.col
    }

    /// The row-major tile index.
    pub fn index(self) -> u8 {
        self.row * SIZE + self.col
    }

    const fn mask(self) -> u16 {
        1 << (self.row * SIZE + self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A set of cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Occupied(u16);

impl Occupied {
    /// Check if the cell is in this set.
    pub fn contains(self, mv: Move) -> bool {
        self.0 & mv.mask() != 0
    }

    /// Check if every cell of `other` is in this set.
    pub fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The # of cells in this set.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if this set has no cells.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the cells in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Move> {
        (0..NUM_TILES)
            .filter_map(Move::from_index)
            .filter(move |mv| self.contains(*mv))
    }
}

impl FromIterator<Move> for Occupied {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |state, mv| state | mv.mask()))
    }
}

/// The kind of line a game was won on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineKind {
    /// A row, from the top.
    Row(u8),

    /// A column, from the left.
    Column(u8),

    /// Top left to bottom right.
    Diagonal,

    /// Bottom left to top right.
    AntiDiagonal,
}

/// A completed winning line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinningLine {
    /// The marker that holds the line
    pub marker: Marker,

    /// The cells of the line
    pub cells: [Move; 3],

    /// The kind of line
    pub kind: LineKind,
}

/// A Tic Tac Toe board
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    player_state: u16,
    ai_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            player_state: 0,
            ai_state: 0,
        }
    }

    /// Get the marker at the cell.
    pub fn get(self, mv: Move) -> Option<Marker> {
        if self.player_state & mv.mask() != 0 {
            Some(Marker::Player)
        } else if self.ai_state & mv.mask() != 0 {
            Some(Marker::Ai)
        } else {
            None
        }
    }

    /// Set the cell to the marker, or clear it with `None`.
    #[must_use]
    pub fn set(mut self, mv: Move, marker: Option<Marker>) -> Self {
        let mask = mv.mask();
        match marker {
            Some(Marker::Player) => {
                self.player_state |= mask;
                self.ai_state &= !mask;
            }
            Some(Marker::Ai) => {
                self.player_state &= !mask;
                self.ai_state |= mask;
            }
            None => {
                self.player_state &= !mask;
                self.ai_state &= !mask;
            }
        }
        self
    }

    /// Get the cells held by a marker.
    pub fn occupied(self, marker: Marker) -> Occupied {
        match marker {
            Marker::Player => Occupied(self.player_state),
            Marker::Ai => Occupied(self.ai_state),
        }
    }

    /// The # of cells held by a marker.
    pub fn count(self, marker: Marker) -> u32 {
        self.occupied(marker).len()
    }

    /// Returns true if no cell is marked.
    pub fn is_empty(self) -> bool {
        (self.player_state | self.ai_state) == 0
    }

    /// Get an iterator over the empty cells, in row-major order.
    ///
    /// The iterator holds a copy of the board,
    /// so the board may be changed while iterating.
    pub fn legal_moves(self) -> LegalMoves {
        LegalMoves::new(self)
    }

    /// Returns true if there are no legal moves left.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        (self.player_state | self.ai_state).count_ones() >= u32::from(NUM_TILES)
    }

    /// Check if the given marker holds a winning line.
    pub fn is_won(self, marker: Marker) -> bool {
        let occupied = self.occupied(marker);
        WINNING_MASKS
            .iter()
            .any(|&mask| occupied.is_superset(Occupied(mask)))
    }

    /// Classify this board from the perspective of a marker.
    ///
    /// Wins are checked before the board is checked for being full,
    /// so a winning move that fills the last cell is still a win.
    pub fn classify(self, perspective: Marker) -> Outcome {
        if self.is_won(perspective) {
            Outcome::Win
        } else if self.is_won(perspective.opponent()) {
            Outcome::Loss
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Get the first winning line held by the marker, if there is one.
    pub fn winning_line(self, marker: Marker) -> Option<WinningLine> {
        let occupied = self.occupied(marker);
        WINNING_MASKS
            .iter()
            .position(|&mask| occupied.is_superset(Occupied(mask)))
            .map(|i| WinningLine {
                marker,
                cells: WINNING_TRIPLES[i],
                kind: LINE_KINDS[i],
            })
    }

    /// Check that this board could have come from alternating play.
    pub fn validate(self) -> Result<(), InvalidBoardError> {
        let player = self.count(Marker::Player);
        let ai = self.count(Marker::Ai);
        if player.abs_diff(ai) > 1 {
            return Err(InvalidBoardError::MarkerCountMismatch { player, ai });
        }

        if self.is_won(Marker::Player) && self.is_won(Marker::Ai) {
            return Err(InvalidBoardError::BothWon);
        }

        Ok(())
    }

    /// Place a marker on an empty cell until the returned guard is dropped.
    ///
    /// The guard derefs to the board.
    /// Dropping it clears the cell again, including on early returns and breaks.
    pub fn try_move(&mut self, mv: Move, marker: Marker) -> TrialMove<'_> {
        debug_assert!(self.get(mv).is_none(), "{mv} is not empty");
        *self = self.set(mv, Some(marker));
        TrialMove { board: self, mv }
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at the top left and ends at the bottom right.
    pub fn iter(self) -> impl Iterator<Item = (Move, Option<Marker>)> {
        (0..NUM_TILES)
            .filter_map(Move::from_index)
            .map(move |mv| (mv, self.get(mv)))
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if tiles.len() != usize::from(NUM_TILES) {
            return Err(BoardParseError::InvalidLength(tiles.len()));
        }

        let mut board = Board::new();
        for (mv, c) in (0..NUM_TILES).filter_map(Move::from_index).zip(tiles) {
            let marker = match c {
                '-' | '.' => None,
                c => Some(Marker::from_char(c)?),
            };
            board = board.set(mv, marker);
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (mv, marker) in self.iter() {
            if mv.col() == 0 && mv.row() != 0 {
                write!(f, "/")?;
            }
            match marker {
                Some(marker) => write!(f, "{}", marker)?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

/// A marker placed on a board for the lifetime of the guard.
///
/// See [`Board::try_move`].
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl TrialMove<'_> {
    /// The cell that was marked.
    pub fn get_move(&self) -> Move {
        self.mv
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        *self.board = self.board.set(self.mv, None);
    }
}

/// An iterator over the empty cells of a board.
#[derive(Debug, Clone)]
pub struct LegalMoves {
    empty: u16,
    index: u8,
}

impl LegalMoves {
    fn new(board: Board) -> Self {
        Self {
            empty: !(board.player_state | board.ai_state),
            index: 0,
        }
    }
}

impl Iterator for LegalMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mv = Move::from_index(self.index)?;
            self.index += 1;

            if self.empty & mv.mask() != 0 {
                return Some(mv);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(NUM_TILES)))
    }
}

impl std::iter::FusedIterator for LegalMoves {}
