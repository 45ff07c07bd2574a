use std::path::PathBuf;

use crate::game::{CellValue, GameState, Play};

/// Errors raised by the grid when placing a piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid column {0} (expected 0-6)")]
    InvalidColumn(usize),

    #[error("cannot append to column {column}, full")]
    ColumnFull { column: usize },
}

/// Why the validator rejected a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("the game is over ({0})")]
    GameOver(GameState),

    #[error("wrong player's turn: {player} moved during {state}")]
    WrongTurn { player: CellValue, state: GameState },

    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors raised by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move {play} in state {state}: {reason}")]
    Illegal {
        play: Play,
        state: GameState,
        reason: Violation,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised when parsing a single history record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("empty record")]
    Empty,

    #[error("unknown event kind '{0}'")]
    UnknownKind(char),

    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    #[error("invalid column {0:?}")]
    InvalidColumn(String),
}

/// Errors raised by the history store.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to access history file {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed record {record:?} on line {line}")]
    MalformedRecord {
        line: usize,
        record: String,
        source: RecordError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        assert_eq!(
            GridError::ColumnFull { column: 3 }.to_string(),
            "cannot append to column 3, full"
        );
        assert_eq!(
            GridError::InvalidColumn(9).to_string(),
            "invalid column 9 (expected 0-6)"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = MoveError::Illegal {
            play: Play {
                player: CellValue::X,
                column: 0,
            },
            state: GameState::OTurn,
            reason: Violation::WrongTurn {
                player: CellValue::X,
                state: GameState::OTurn,
            },
        };
        assert_eq!(
            err.to_string(),
            "illegal move PX0 in state O_TURN: wrong player's turn: X moved during O_TURN"
        );
    }

    #[test]
    fn test_malformed_record_display() {
        let err = HistoryError::MalformedRecord {
            line: 2,
            record: "PZ3".to_string(),
            source: RecordError::UnknownPlayer("Z".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "malformed record \"PZ3\" on line 2"
        );
    }

    #[test]
    fn test_error_chain_names_each_cause_once() {
        let err = anyhow::Error::new(HistoryError::MalformedRecord {
            line: 2,
            record: "PQ".to_string(),
            source: RecordError::UnknownPlayer("Q".to_string()),
        })
        .context("loading history from bad");
        let text = format!("{err:#}");
        assert_eq!(
            text,
            "loading history from bad: malformed record \"PQ\" on line 2: unknown player \"Q\""
        );
        assert_eq!(text.matches("unknown player").count(), 1);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = anyhow::Error::new(ConfigError::FileRead {
            path: PathBuf::from("c.toml"),
            source: io,
        });
        let text = format!("{err:#}");
        assert_eq!(text, "failed to read config file c.toml: denied");
    }

    #[test]
    fn test_toml_error_is_printed_once() {
        let source = toml::from_str::<toml::Table>("color = ").unwrap_err();
        let detail = source.to_string();
        let err = anyhow::Error::new(ConfigError::from(source));
        let text = format!("{err:#}");
        assert!(text.starts_with("failed to parse TOML: "));
        assert_eq!(text.matches(detail.as_str()).count(), 1);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("history.path must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: history.path must not be empty"
        );
    }
}
