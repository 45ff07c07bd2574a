//! # Connect Four
//!
//! A two-player Connect Four engine on the standard 7x6 grid. The move
//! history is the only persisted state: every invocation loads it, appends
//! one move, and replays everything from an empty grid.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, move records, validation, win detection, state machine
//! - [`history`] — Loading and saving the move history as a text event log
//! - [`ui`] — Console board rendering and JSON game summaries
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod ui;
