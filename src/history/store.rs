use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::HistoryError;
use crate::game::Event;

/// Parse a history file body, one record per line. Blank lines are skipped.
pub fn parse_history(text: &str) -> Result<Vec<Event>, HistoryError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Event>().map_err(|source| HistoryError::MalformedRecord {
                line: i + 1,
                record: line.to_string(),
                source,
            })
        })
        .collect()
}

/// Render a history as one record per line.
pub fn format_history(history: &[Event]) -> String {
    history.iter().map(|event| format!("{event}\n")).collect()
}

/// Loads and saves the move history of one game at an explicit path.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(path: &Path, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Load the history; a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<Event>, HistoryError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file, starting a new game");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };
        let history = parse_history(&text)?;
        tracing::debug!(path = %self.path.display(), events = history.len(), "loaded history");
        Ok(history)
    }

    /// Replace the stored history with `history`.
    pub fn save(&self, history: &[Event]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
        }

        // Write to a sibling temp file, then rename over the real one
        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, format_history(history))
            .map_err(|e| Self::io_error(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Self::io_error(&tmp_path, e));
        }

        tracing::debug!(path = %self.path.display(), events = history.len(), "saved history");
        Ok(())
    }
}
