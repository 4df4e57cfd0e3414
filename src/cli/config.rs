//! Shared argument handling for CLI commands

use std::path::Path;

use anyhow::{Context, Result};

use crate::{GameConfig, tictactoe::Symbol};

/// clap value parser for `x`, `xs`, `o`, `os` (any case)
pub fn parse_symbol(raw: &str) -> std::result::Result<Symbol, String> {
    raw.parse::<Symbol>().map_err(|e| e.to_string())
}

/// Load the config file if given, then apply flag overrides.
pub fn resolve_config(
    path: Option<&Path>,
    no_pruning: bool,
    symbol: Option<Symbol>,
) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if no_pruning {
        config = config.with_pruning(false);
    }
    if let Some(symbol) = symbol {
        config = config.with_human_symbol(symbol);
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("Os"), Ok(Symbol::O));
        assert!(parse_symbol("z").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = resolve_config(None, true, Some(Symbol::O)).unwrap();
        assert!(!config.pruning);
        assert_eq!(config.human_symbol, Some(Symbol::O));
    }
}
