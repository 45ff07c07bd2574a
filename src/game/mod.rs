//! Core Connect Four game logic: grid model, move records, validation, win
//! detection, and the game state machine.

mod board;
mod event;
mod player;
pub mod rules;
mod state;
pub mod win;

pub use board::{Cell, CellValue, Column, Grid, Matrix, COLS, ROWS};
pub use event::{Event, Play};
pub use player::Player;
pub use state::{Game, GameState};
