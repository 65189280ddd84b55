//! Event loop and key dispatch.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use super::app::{App, Focus};
use super::ui;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (Windows reports Press + Release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.focus {
                Focus::Grid => handle_grid_key(app, key.code, key.modifiers),
                Focus::Selector => handle_selector_key(app, key.code),
                Focus::Command => handle_command_key(app, key.code),
            }
        }
    }
}

fn handle_grid_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up if shift => app.extend_cursor(-1, 0),
        KeyCode::Down if shift => app.extend_cursor(1, 0),
        KeyCode::Left if shift => app.extend_cursor(0, -1),
        KeyCode::Right if shift => app.extend_cursor(0, 1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
        KeyCode::Char('K') => app.extend_cursor(-1, 0),
        KeyCode::Char('J') => app.extend_cursor(1, 0),
        KeyCode::Char('H') => app.extend_cursor(0, -1),
        KeyCode::Char('L') => app.extend_cursor(0, 1),
        KeyCode::Char('s') | KeyCode::Char('/') => {
            app.focus = Focus::Selector;
            app.selector_cursor = app.selector_buffer.len();
        }
        KeyCode::Char(':') | KeyCode::Char('c') => {
            app.focus = Focus::Command;
            app.update_popup();
        }
        KeyCode::Char('y') => app.yank(),
        KeyCode::Esc => app.clear_selection(),
        _ => {}
    }
}

fn handle_selector_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            // Restore the canonical form and hand focus back to the grid.
            app.refresh_selector();
            app.focus = Focus::Grid;
        }
        KeyCode::Enter => {
            if app.apply_selector_input() {
                app.focus = Focus::Grid;
            }
        }
        _ => edit_buffer(&mut app.selector_buffer, &mut app.selector_cursor, code),
    }
}

fn handle_command_key(app: &mut App, code: KeyCode) {
    // The popup takes over navigation keys while it is open.
    if !app.popup.is_empty() {
        match code {
            KeyCode::Down => {
                app.popup_move(1);
                return;
            }
            KeyCode::Up => {
                app.popup_move(-1);
                return;
            }
            KeyCode::Enter | KeyCode::Tab => {
                app.accept_suggestion();
                return;
            }
            KeyCode::Esc => {
                app.close_popup();
                return;
            }
            _ => {}
        }
    }

    match code {
        KeyCode::Esc => app.focus = Focus::Grid,
        KeyCode::Enter => app.preview_command_tags(),
        _ => {
            edit_buffer(&mut app.command_buffer, &mut app.command_cursor, code);
            app.update_popup();
        }
    }
}

/// Shared line-editing for the selector and command fields. Cursor is a byte
/// offset kept on a char boundary.
fn edit_buffer(buffer: &mut String, cursor: &mut usize, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = buffer[..*cursor].chars().next_back() {
                *cursor -= prev.len_utf8();
                buffer.remove(*cursor);
            }
        }
        KeyCode::Delete => {
            if *cursor < buffer.len() {
                buffer.remove(*cursor);
            }
        }
        KeyCode::Left => {
            if let Some(prev) = buffer[..*cursor].chars().next_back() {
                *cursor -= prev.len_utf8();
            }
        }
        KeyCode::Right => {
            if let Some(next) = buffer[*cursor..].chars().next() {
                *cursor += next.len_utf8();
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buffer.len(),
        _ => {}
    }
}
