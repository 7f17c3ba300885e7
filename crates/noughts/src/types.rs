//! Core domain types for the engine.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GameError;

/// A single position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Occupied by the player owning this marker.
    Marker(char),
}

impl Cell {
    /// Returns true if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker, if any.
    pub fn symbol(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Marker(symbol) => Some(symbol),
        }
    }
}

/// Who is deciding the moves for a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive from the view layer.
    Human,
    /// Moves are drawn at random by the engine.
    Automated,
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game.
    name: String,
    /// Marker written to the board.
    #[getter(copy)]
    symbol: char,
    /// Human or automated seat.
    #[getter(copy)]
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayers`] if the name is blank or the
    /// symbol cannot be told apart from an empty cell.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn human(name: impl AsRef<str>, symbol: char) -> Result<Self, GameError> {
        Self::with_kind(name.as_ref(), symbol, PlayerKind::Human)
    }

    /// Creates an automated player.
    ///
    /// # Errors
    ///
    /// Same rules as [`Player::human`].
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn automated(name: impl AsRef<str>, symbol: char) -> Result<Self, GameError> {
        Self::with_kind(name.as_ref(), symbol, PlayerKind::Automated)
    }

    fn with_kind(name: &str, symbol: char, kind: PlayerKind) -> Result<Self, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidPlayers("player name is empty".to_string()));
        }
        if is_reserved_symbol(symbol) {
            return Err(GameError::InvalidPlayers(format!(
                "symbol {symbol:?} is reserved"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            symbol,
            kind,
        })
    }

    /// Returns true if the engine picks this player's moves.
    pub fn is_automated(&self) -> bool {
        self.kind == PlayerKind::Automated
    }
}

/// True for markers that cannot be told apart from an empty cell.
pub(crate) fn is_reserved_symbol(symbol: char) -> bool {
    symbol.is_whitespace() || symbol == crate::board::EMPTY_GLYPH
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_player_trims_name() {
        let player = Player::human("  Ada ", 'x').unwrap();
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.symbol(), 'x');
        assert!(!player.is_automated());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            Player::human("   ", 'x'),
            Err(GameError::InvalidPlayers(_))
        ));
    }

    #[test]
    fn test_reserved_symbols_rejected() {
        assert!(Player::human("Ada", '.').is_err());
        assert!(Player::automated("bot", ' ').is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PlayerKind::Automated.to_string(), "automated");
        assert_eq!(PlayerKind::Human.to_string(), "human");
    }

    #[test]
    fn test_cell_symbol() {
        assert_eq!(Cell::Empty.symbol(), None);
        assert_eq!(Cell::Marker('o').symbol(), Some('o'));
        assert!(Cell::default().is_empty());
    }
}
