use serde::Serialize;

use crate::game::{Cell, CellValue, Game, GameState};

/// Machine-readable snapshot of a game, printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub state: GameState,
    pub moves: usize,
    pub next: Option<CellValue>,
    pub winner: Option<CellValue>,
    /// History as stored on disk, e.g. `PO3`
    pub history: Vec<String>,
    /// One entry per column, bottom cell first
    pub columns: Vec<Vec<Cell>>,
}

impl GameSummary {
    pub fn from_game(game: &Game) -> Self {
        let state = game.state();
        GameSummary {
            state,
            moves: game.history().len(),
            next: state.to_move(),
            winner: state.winner(),
            history: game.history().iter().map(ToString::to_string).collect(),
            columns: game
                .grid()
                .as_matrix()
                .iter()
                .map(|column| column.to_vec())
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
