/// Failed to parse a [`Marker`] from a [`char`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("'{0}' is not a valid Tic-Tac-Toe marker")]
pub struct InvalidCharError(pub char);

/// Failed to parse a [`Marker`] from a [`str`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidStrError {
    /// The string is empty.
    #[error("a Tic-Tac-Toe marker cannot be made from an empty string")]
    Empty,

    /// The string is neither a marker char nor a marker name.
    #[error("'{0}' is not a valid Tic-Tac-Toe marker")]
    Unknown(String),

    /// The char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A Tic Tac Toe marker.
///
/// The engine always plays [`Marker::Ai`].
/// As text, the player is `X` and the ai is `O`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The human player, `X`.
    Player,

    /// The automated player, `O`.
    Ai,
}

impl Marker {
    /// Get the other marker.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }

    /// Get the char used to display this marker.
    pub fn as_char(self) -> char {
        match self {
            Self::Player => 'X',
            Self::Ai => 'O',
        }
    }

    /// Try to parse a [`Marker`] from a [`char`].
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' => Ok(Self::Player),
            'o' | 'O' => Ok(Self::Ai),
            c => Err(InvalidCharError(c)),
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Marker {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("player") {
            return Ok(Self::Player);
        }
        if s.eq_ignore_ascii_case("ai") || s.eq_ignore_ascii_case("computer") {
            return Ok(Self::Ai);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InvalidStrError::Empty),
            (Some(c), None) => Ok(Self::from_char(c)?),
            (Some(_), Some(_)) => Err(InvalidStrError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("x".parse::<Marker>().unwrap(), Marker::Player);
        assert_eq!("O".parse::<Marker>().unwrap(), Marker::Ai);
        assert_eq!("AI".parse::<Marker>().unwrap(), Marker::Ai);
        assert_eq!("player".parse::<Marker>().unwrap(), Marker::Player);

        assert!(matches!(
            "".parse::<Marker>(),
            Err(InvalidStrError::Empty)
        ));
        assert!(matches!(
            "q".parse::<Marker>(),
            Err(InvalidStrError::InvalidChar(InvalidCharError('q')))
        ));
        assert!(matches!(
            "nobody".parse::<Marker>(),
            Err(InvalidStrError::Unknown(_))
        ));
    }

    #[test]
    fn opponent() {
        assert_eq!(Marker::Player.opponent(), Marker::Ai);
        assert_eq!(Marker::Ai.opponent(), Marker::Player);
        assert_eq!(Marker::Ai.opponent().opponent(), Marker::Ai);
    }
}
