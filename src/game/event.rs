//! Move records. The history is an ordered list of [`Event`]s, persisted one
//! record per line.

use std::fmt;
use std::str::FromStr;

use super::board::CellValue;
use crate::error::RecordError;

/// A single player's piece dropped into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Play {
    pub player: CellValue,
    pub column: usize,
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.player, self.column)
    }
}

/// Every kind of entry the history can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Event {
    Play(Play),
}

impl Event {
    pub fn play(player: CellValue, column: usize) -> Self {
        Event::Play(Play { player, column })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Play(play) => fmt::Display::fmt(play, f),
        }
    }
}

impl FromStr for Event {
    type Err = RecordError;

    /// Parse a record such as `PX3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = s.trim();
        let mut chars = record.chars();
        match chars.next() {
            None => Err(RecordError::Empty),
            Some('P') => {
                let player = match chars.next() {
                    Some('O') => CellValue::O,
                    Some('X') => CellValue::X,
                    other => {
                        return Err(RecordError::UnknownPlayer(
                            other.map(String::from).unwrap_or_default(),
                        ))
                    }
                };
                let rest = chars.as_str();
                if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RecordError::InvalidColumn(rest.to_string()));
                }
                let column = rest
                    .parse()
                    .map_err(|_| RecordError::InvalidColumn(rest.to_string()))?;
                Ok(Event::play(player, column))
            }
            Some(kind) => Err(RecordError::UnknownKind(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_record() {
        assert_eq!(Event::play(CellValue::X, 3).to_string(), "PX3");
        assert_eq!(Event::play(CellValue::O, 0).to_string(), "PO0");
    }

    #[test]
    fn test_parse_record() {
        assert_eq!("PX3".parse::<Event>(), Ok(Event::play(CellValue::X, 3)));
        assert_eq!("  PO6\r".parse::<Event>(), Ok(Event::play(CellValue::O, 6)));
    }

    #[test]
    fn test_parse_leaves_range_to_validator() {
        assert_eq!("PO12".parse::<Event>(), Ok(Event::play(CellValue::O, 12)));
    }

    #[test]
    fn test_parse_rejects_malformed_records() {
        assert_eq!("".parse::<Event>(), Err(RecordError::Empty));
        assert_eq!("U0".parse::<Event>(), Err(RecordError::UnknownKind('U')));
        assert_eq!(
            "PZ3".parse::<Event>(),
            Err(RecordError::UnknownPlayer("Z".to_string()))
        );
        assert_eq!(
            "P".parse::<Event>(),
            Err(RecordError::UnknownPlayer(String::new()))
        );
        assert_eq!(
            "PX".parse::<Event>(),
            Err(RecordError::InvalidColumn(String::new()))
        );
        assert_eq!(
            "PX-1".parse::<Event>(),
            Err(RecordError::InvalidColumn("-1".to_string()))
        );
        assert_eq!(
            "PXa".parse::<Event>(),
            Err(RecordError::InvalidColumn("a".to_string()))
        );
    }
}
