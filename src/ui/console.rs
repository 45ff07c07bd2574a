use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::config::DisplayConfig;
use crate::game::{CellValue, GameState, Grid, Player, COLS, ROWS};

fn piece_color(value: CellValue) -> Color {
    match value {
        CellValue::O => Color::Red,
        CellValue::X => Color::Yellow,
    }
}

/// Print the board top row first, column 0 on the left.
///
/// With color off and the legend on, the text is exactly `Grid`'s `Display`
/// followed by a newline.
pub fn print_board<W: Write>(out: &mut W, grid: &Grid, config: &DisplayConfig) -> io::Result<()> {
    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            if col > 0 {
                queue!(out, Print(' '))?;
            }
            match grid.get(col, row) {
                Some(value) if config.color => queue!(
                    out,
                    SetForegroundColor(piece_color(value)),
                    SetAttribute(Attribute::Bold),
                    Print(value),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?,
                Some(value) => queue!(out, Print(value))?,
                None => queue!(out, Print(' '))?,
            }
        }
        queue!(out, Print('\n'))?;
    }

    if config.legend {
        let legend: Vec<String> = (0..COLS).map(|i| i.to_string()).collect();
        queue!(out, Print(legend.join(" ")), Print('\n'))?;
    }
    out.flush()
}

/// Message announcing how the game ended, `None` while it is still running
pub fn outcome_message(state: GameState) -> Option<String> {
    if let Some(value) = state.winner() {
        return Some(format!("{} WINS!!!", Player::new(value).name()));
    }
    match state {
        GameState::Draw => Some("GAME ENDS IN A DRAW".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new();
        grid.place(0, CellValue::O).unwrap();
        grid.place(6, CellValue::X).unwrap();
        grid.place(0, CellValue::X).unwrap();
        grid
    }

    fn render(grid: &Grid, config: &DisplayConfig) -> String {
        let mut out = Vec::new();
        print_board(&mut out, grid, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_matches_display() {
        let grid = sample_grid();
        let config = DisplayConfig {
            color: false,
            legend: true,
        };
        assert_eq!(render(&grid, &config), format!("{grid}\n"));
    }

    #[test]
    fn test_legend_can_be_hidden() {
        let config = DisplayConfig {
            color: false,
            legend: false,
        };
        let text = render(&sample_grid(), &config);
        assert_eq!(text.lines().count(), ROWS);
        assert!(!text.contains("0 1 2"));
    }

    #[test]
    fn test_colored_output_styles_pieces() {
        let text = render(&sample_grid(), &DisplayConfig::default());
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('O'));
        assert!(text.contains('X'));
        assert!(text.ends_with("0 1 2 3 4 5 6\n"));
    }

    #[test]
    fn test_empty_board_has_no_escape_codes() {
        let text = render(&Grid::new(), &DisplayConfig::default());
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameState::OWon).as_deref(), Some("O WINS!!!"));
        assert_eq!(outcome_message(GameState::XWon).as_deref(), Some("X WINS!!!"));
        assert_eq!(
            outcome_message(GameState::Draw).as_deref(),
            Some("GAME ENDS IN A DRAW")
        );
        assert_eq!(outcome_message(GameState::OTurn), None);
        assert_eq!(outcome_message(GameState::XTurn), None);
    }

    #[test]
    fn test_win_message_uses_player_name() {
        for value in [CellValue::O, CellValue::X] {
            let state = if value == CellValue::O {
                GameState::OWon
            } else {
                GameState::XWon
            };
            let message = outcome_message(state).unwrap();
            assert!(message.starts_with(Player::new(value).name()));
        }
    }
}
