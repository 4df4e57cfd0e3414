//! Loading and saving configuration and reports as JSON files

use std::io::Write;

use noughts::{
    Error, GameConfig, Scoreboard,
    cli::commands::simulate::SimulationReport,
    tictactoe::Symbol,
};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_config_round_trips_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.json");

    let config = GameConfig::new()
        .with_pruning(false)
        .with_human_symbol(Symbol::O);
    config.save(&path).unwrap();

    let loaded = GameConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_size_rejected_on_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"size": 0}}"#).unwrap();

    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn test_oversized_board_rejected_on_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"size": 4}}"#).unwrap();

    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_malformed_json_reports_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let err = GameConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_simulation_report_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    let report = SimulationReport {
        games: 3,
        seed: Some(9),
        pruning: true,
        scoreboard: Scoreboard {
            victories: 0,
            defeats: 2,
            draws: 1,
        },
    };
    report.save(&path).unwrap();

    let loaded = SimulationReport::load(&path).unwrap();
    assert_eq!(loaded.games, 3);
    assert_eq!(loaded.seed, Some(9));
    assert_eq!(loaded.scoreboard, report.scoreboard);
}
