//! Persistence of the move history as a plain-text event log.

mod store;

pub use store::{format_history, parse_history, HistoryStore};
