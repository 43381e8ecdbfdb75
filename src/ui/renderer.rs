use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{DEFAULT_NAME_A, DEFAULT_NAME_B};
use crate::game::{Cell, Game, Mark};
use crate::input::editor::NameField;
use crate::input::{InputState, Screen};

pub fn ui(f: &mut Frame, game: &Game, input: &InputState) {
    let size = f.size();

    // Board geometry on screen
    let board_height = 13; // 3 cell rows of 3 lines + 2 grid lines + 2 borders
    let board_width = 25; // 3 cells of 7 chars + 2 grid lines + 2 borders

    // Create a centered layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),               // Flexible top space
            Constraint::Length(board_height), // Game board height
            Constraint::Min(1),               // Flexible bottom space
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),              // Left margin
            Constraint::Length(20),          // Key help panel
            Constraint::Length(board_width), // Game board
            Constraint::Length(20),          // Score panel
            Constraint::Min(1),              // Right margin
        ])
        .split(vertical_chunks[1]);

    let help_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let score_area = horizontal_chunks[3];

    // Render components
    render_board(f, game, input, board_area);
    render_help(f, help_area);
    render_score(f, game, score_area);

    // Render screen overlays on top of the board
    match input.screen {
        Screen::NameEntry => render_name_entry_overlay(f, input, board_area),
        Screen::Match => {
            if game.status().is_game_over {
                render_game_over_overlay(f, game, board_area);
            }
        }
    }
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

fn grid_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn render_board(f: &mut Frame, game: &Game, input: &InputState, area: Rect) {
    let cells = game.board_state();
    let show_cursor = input.screen == Screen::Match && !game.status().is_game_over;

    let mut board_lines = Vec::new();

    for row in 0..3 {
        if row > 0 {
            board_lines.push(Line::from(vec![Span::styled(
                "───────┼───────┼───────",
                grid_style(),
            )]));
        }

        // Each cell is three text rows tall; the mark sits on the middle one
        for text_row in 0..3 {
            let mut line_spans = Vec::new();
            for col in 0..3 {
                if col > 0 {
                    line_spans.push(Span::styled("│", grid_style()));
                }

                let index = row * 3 + col;
                let mut style = match cells[index] {
                    Cell::Empty => Style::default().fg(Color::DarkGray),
                    Cell::Marked(mark) => mark_style(mark),
                };
                if show_cursor && index == input.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                let content = if text_row == 1 {
                    match cells[index] {
                        // Empty cells show the digit key that plays them
                        Cell::Empty => format!("   {}   ", index + 1),
                        Cell::Marked(mark) => format!("   {}   ", mark),
                    }
                } else {
                    "       ".to_string()
                };
                line_spans.push(Span::styled(content, style));
            }
            board_lines.push(Line::from(line_spans));
        }
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("tictui"));

    f.render_widget(board_widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("1-9    place mark")]),
        Line::from(vec![Span::raw("←↑↓→   move cursor")]),
        Line::from(vec![Span::raw("enter  place mark")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("r      rematch")]),
        Line::from(vec![Span::raw("n      new match")]),
        Line::from(vec![Span::raw("q      quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(help_widget, area);
}

fn render_score(f: &mut Frame, game: &Game, area: Rect) {
    let mut score_lines = vec![Line::from(vec![Span::raw("")])];

    if let Some(players) = game.players_info() {
        let current = game.current_player();
        let status = game.status();

        for info in players {
            let is_current =
                !status.is_game_over && current.as_ref().map_or(false, |c| c.mark == info.mark);
            let marker = if is_current { "▸ " } else { "  " };

            score_lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} ({})", info.name, info.mark), mark_style(info.mark)),
            ]));
            score_lines.push(Line::from(vec![Span::raw(format!("   wins: {}", info.score))]));
            score_lines.push(Line::from(vec![Span::raw("")]));
        }

        let status_line = if status.is_game_over {
            match status.winner {
                Some(winner) => format!("{} wins!", winner.name),
                None => "It's a draw!".to_string(),
            }
        } else {
            match current {
                Some(player) => format!("Turn: {}", player.name),
                None => String::new(),
            }
        };
        score_lines.push(Line::from(vec![Span::raw(status_line)]));
    } else {
        score_lines.push(Line::from(vec![Span::raw("No match yet")]));
    }

    let score_widget = Paragraph::new(score_lines)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    f.render_widget(score_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn name_field_line(mark: Mark, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let cursor = if focused { "_" } else { "" };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{}: ", mark), mark_style(mark)),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn render_name_entry_overlay(f: &mut Frame, input: &InputState, area: Rect) {
    let popup_area = centered_rect(100, 90, area);
    f.render_widget(Clear, popup_area);

    let editor = &input.editor;
    let entry_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "  NEW MATCH",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::raw("")]),
        name_field_line(Mark::X, &editor.name_a, editor.focus == NameField::PlayerA),
        name_field_line(Mark::O, &editor.name_b, editor.focus == NameField::PlayerB),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("  tab to switch fields", grid_style())]),
        Line::from(vec![Span::styled("  enter to start", grid_style())]),
        Line::from(vec![Span::styled(
            format!("  blank = {} & {}", DEFAULT_NAME_A, DEFAULT_NAME_B),
            grid_style(),
        )]),
    ];

    let entry_widget = Paragraph::new(entry_text)
        .block(Block::default().borders(Borders::ALL).title("Players"));

    f.render_widget(entry_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(100, 80, area);
    f.render_widget(Clear, popup_area);

    let headline = match game.status().winner {
        Some(winner) => Span::styled(format!("{} wins!", winner.name), mark_style(winner.mark)),
        None => Span::styled("It's a draw!", Style::default().add_modifier(Modifier::BOLD)),
    };

    let over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![headline]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R for a rematch")]),
        Line::from(vec![Span::raw("Press N for a new match")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let over_widget = Paragraph::new(over_text)
        .block(Block::default().borders(Borders::ALL).title("Game over"))
        .alignment(Alignment::Center);

    f.render_widget(over_widget, popup_area);
}
