use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::Game;
use crate::input::editor::NameEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NameEntry,
    Match,
}

/// Presentation-side state: which screen is up and where the board cursor
/// sits. The core never sees any of this.
pub struct InputState {
    pub screen: Screen,
    pub cursor: usize,
    pub editor: NameEditor,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            screen: Screen::NameEntry,
            cursor: 4,
            editor: NameEditor::new(),
        }
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let row = (self.cursor / 3) as i32 + dy;
        let col = (self.cursor % 3) as i32 + dx;
        let row = row.clamp(0, 2);
        let col = col.clamp(0, 2);
        self.cursor = (row * 3 + col) as usize;
    }
}

// Returns true when the user asked to quit.
pub fn handle_input(game: &mut Game, input: &mut InputState, code: KeyCode, kind: KeyEventKind) -> bool {
    if kind != KeyEventKind::Press {
        return false;
    }

    match input.screen {
        Screen::NameEntry => match code {
            KeyCode::Enter => {
                let (name_a, name_b) = input.editor.names();
                game.new_game(&name_a, &name_b);
                input.screen = Screen::Match;
                input.cursor = 4;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                input.editor.toggle_focus();
            }
            KeyCode::Backspace => {
                input.editor.backspace();
            }
            KeyCode::Char(c) => {
                input.editor.insert(c);
            }
            _ => {}
        },
        Screen::Match => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                // back to name entry; the running match stays as it is
                input.screen = Screen::NameEntry;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                game.rematch();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
                input.move_cursor(-1, 0);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
                input.move_cursor(1, 0);
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                input.move_cursor(0, -1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                input.move_cursor(0, 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                game.play(input.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // digits follow the on-screen numbering, row-major from the top left
                game.play((c as u8 - b'1') as usize);
            }
            _ => {}
        },
    }

    false
}
