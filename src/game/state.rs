use std::fmt;

use super::board::{CellValue, Grid};
use super::event::{Event, Play};
use super::player::Player;
use super::{rules, win};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    OTurn,
    XTurn,
    OWon,
    XWon,
    Draw,
}

impl GameState {
    /// Whose turn it is, or `None` once the game is over
    pub fn to_move(self) -> Option<CellValue> {
        match self {
            GameState::OTurn => Some(CellValue::O),
            GameState::XTurn => Some(CellValue::X),
            GameState::OWon | GameState::XWon | GameState::Draw => None,
        }
    }

    pub fn winner(self) -> Option<CellValue> {
        match self {
            GameState::OWon => Some(CellValue::O),
            GameState::XWon => Some(CellValue::X),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }

    fn turn_of(value: CellValue) -> GameState {
        match value {
            CellValue::O => GameState::OTurn,
            CellValue::X => GameState::XTurn,
        }
    }

    fn won_by(value: CellValue) -> GameState {
        match value {
            CellValue::O => GameState::OWon,
            CellValue::X => GameState::XWon,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::OTurn => "O_TURN",
            GameState::XTurn => "X_TURN",
            GameState::OWon => "O_WON",
            GameState::XWon => "X_WON",
            GameState::Draw => "DRAW",
        };
        f.write_str(name)
    }
}

/// A game in progress: the grid, whose turn it is, and every event applied
/// so far. Events are the only way to change a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    grid: Grid,
    history: Vec<Event>,
}

impl Game {
    /// Create the initial game: O to move on an empty grid
    pub fn new() -> Self {
        Game {
            state: GameState::OTurn,
            grid: Grid::new(),
            history: Vec::new(),
        }
    }

    /// Rebuild a game by replaying `history` from the start
    pub fn from_history(history: &[Event]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        game.replay(history)?;
        Ok(game)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Events applied so far, in order
    pub fn history(&self) -> &[Event] {
        &self.history
    }

    /// The two players, O first
    pub fn players(&self) -> (Player, Player) {
        (Player::new(CellValue::O), Player::new(CellValue::X))
    }

    /// Get current player, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        self.state.to_move().map(Player::new)
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_move_valid(&self, play: &Play) -> bool {
        rules::is_move_valid(self.state, &self.grid, play)
    }

    pub fn has_player_won(&self, player: Player) -> bool {
        win::has_won(&self.grid.as_matrix(), player.value())
    }

    pub fn is_draw(&self) -> bool {
        win::is_draw(&self.grid.as_matrix())
    }

    /// Apply one event and record it in the history.
    ///
    /// An illegal event leaves the game untouched.
    pub fn apply(&mut self, event: Event) -> Result<GameState, MoveError> {
        match event {
            Event::Play(play) => self.play(play)?,
        }
        self.history.push(event);
        Ok(self.state)
    }

    /// Reset to the initial state and apply every event in order, stopping
    /// at the first illegal one.
    pub fn replay(&mut self, history: &[Event]) -> Result<GameState, MoveError> {
        *self = Game::new();
        for event in history {
            self.apply(*event)?;
        }
        Ok(self.state)
    }

    fn play(&mut self, play: Play) -> Result<(), MoveError> {
        if let Some(reason) = rules::violation(self.state, &self.grid, &play) {
            return Err(MoveError::Illegal {
                play,
                state: self.state,
                reason,
            });
        }

        self.grid.place(play.column, play.player)?;

        let matrix = self.grid.as_matrix();
        self.state = if win::has_won(&matrix, play.player) {
            GameState::won_by(play.player)
        } else if win::is_draw(&matrix) {
            GameState::Draw
        } else {
            GameState::turn_of(play.player.other())
        };

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
