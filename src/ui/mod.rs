pub mod console;
pub mod summary;

pub use console::{outcome_message, print_board};
pub use summary::GameSummary;
