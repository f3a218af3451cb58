use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Represents the content of a single board cell.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'B'` for `Disc::Black`
    /// * `'W'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'B',
            Disc::White => 'W',
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Returns `true` for `Black` and `White`.
    pub fn is_color(self) -> bool {
        self != Disc::Empty
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error returned when a string does not name a disc color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiscError(String);

impl fmt::Display for ParseDiscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': expected B or W", self.0)
    }
}

impl Error for ParseDiscError {}

impl FromStr for Disc {
    type Err = ParseDiscError;

    /// Parses a color choice. Only `B` and `W` are accepted (case-insensitive);
    /// an empty cell is never a valid choice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B" | "b" => Ok(Disc::Black),
            "W" | "w" => Ok(Disc::White),
            other => Err(ParseDiscError(other.to_string())),
        }
    }
}
