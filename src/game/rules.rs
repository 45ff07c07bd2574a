//! Move validation. Every check is a pure function of the game state and the
//! grid; nothing here mutates.

use super::board::{Grid, COLS};
use super::event::Play;
use super::state::GameState;
use crate::error::Violation;

/// True iff it is `play.player`'s turn. Terminal states accept nobody.
pub fn is_players_turn(state: GameState, play: &Play) -> bool {
    state.to_move() == Some(play.player)
}

/// True iff `column` is on the grid and still has an empty cell.
pub fn is_column_playable(grid: &Grid, column: usize) -> bool {
    column < COLS && grid.column(column).is_some_and(|c| !c.is_full())
}

pub fn is_move_valid(state: GameState, grid: &Grid, play: &Play) -> bool {
    is_players_turn(state, play) && is_column_playable(grid, play.column)
}

/// The first check `play` fails, or `None` when the move is valid.
pub fn violation(state: GameState, grid: &Grid, play: &Play) -> Option<Violation> {
    if state.is_terminal() {
        return Some(Violation::GameOver(state));
    }
    if !is_players_turn(state, play) {
        return Some(Violation::WrongTurn {
            player: play.player,
            state,
        });
    }
    if play.column >= COLS {
        return Some(Violation::InvalidColumn(play.column));
    }
    if !is_column_playable(grid, play.column) {
        return Some(Violation::ColumnFull(play.column));
    }
    None
}
