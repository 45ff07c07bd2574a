use super::board::CellValue;
use super::event::{Event, Play};

/// One side of the game. Holds only the piece it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    value: CellValue,
}

impl Player {
    pub fn new(value: CellValue) -> Self {
        Player { value }
    }

    /// The piece this player drops
    pub fn value(self) -> CellValue {
        self.value
    }

    /// Get the other player
    pub fn other(self) -> Player {
        Player::new(self.value.other())
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self.value {
            CellValue::O => "O",
            CellValue::X => "X",
        }
    }

    /// Build the event for this player dropping a piece in `column`
    pub fn play(self, column: usize) -> Event {
        Event::Play(Play {
            player: self.value,
            column,
        })
    }
}
