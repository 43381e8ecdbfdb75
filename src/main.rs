use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::stdout,
    time::Duration,
};

mod constants;
mod game;
mod input;
mod ui;

use constants::POLL_INTERVAL_MS;
use game::Game;
use input::{handle_input, InputState};
use ui::ui;

fn main() -> Result<()> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let mut input_state = InputState::new();

    // Game loop
    loop {
        // Render
        terminal.draw(|f| ui(f, &game, &input_state))?;

        // Handle input
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    _ => {
                        if handle_input(&mut game, &mut input_state, code, kind) {
                            break;
                        }
                    }
                }
            }
        }
    }

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
