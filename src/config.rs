//! Game configuration.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{STANDARD_SIZE, Symbol},
};

/// Configuration shared by the board model, the search engine and the
/// round orchestrator.
///
/// # Examples
///
/// ```
/// use noughts::{GameConfig, tictactoe::Symbol};
///
/// let config = GameConfig::new()
///     .with_human_symbol(Symbol::O)
///     .with_pruning(false);
/// assert_eq!(config.size, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub size: usize,
    /// Whether the engine applies alpha-beta cut-offs
    pub pruning: bool,
    /// Symbol the human plays; prompted for when absent
    pub human_symbol: Option<Symbol>,
}

impl GameConfig {
    /// Standard 3×3 game with pruning and no preselected symbol
    pub fn new() -> Self {
        Self {
            size: STANDARD_SIZE,
            pruning: true,
            human_symbol: None,
        }
    }

    /// Set the board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Preselect the human's symbol.
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = Some(symbol);
        self
    }

    /// Reject configurations no board can be built from, and boards too
    /// large for the exhaustive engine to search.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }
        if self.size > STANDARD_SIZE {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board size {} is too large; exhaustive search is only practical up to {STANDARD_SIZE}x{STANDARD_SIZE}",
                    self.size
                ),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, 3);
        assert!(config.pruning);
        assert_eq!(config.human_symbol, None);
    }

    #[test]
    fn test_zero_size_invalid() {
        let config = GameConfig::new().with_size(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_oversized_board_invalid() {
        let config = GameConfig::new().with_size(4);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(GameConfig::new().with_size(2).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"pruning": false}"#).unwrap();
        assert_eq!(config.size, 3);
        assert!(!config.pruning);

        let config: GameConfig = serde_json::from_str(r#"{"human_symbol": "O"}"#).unwrap();
        assert_eq!(config.human_symbol, Some(Symbol::O));
    }
}
