//! UI rendering

use gridtag_core::provider::GridProvider;
use gridtag_core::suggest::SuggestionKind;
use gridtag_engine::selection::col_to_letters;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
};

use super::app::{App, Focus};

pub(crate) const SELECTOR_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 10;
pub(crate) const COMMAND_BAR_HEIGHT: u16 = 3;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 5;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SELECTOR_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(COMMAND_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    let grid_area = chunks[1];
    let available_width = grid_area
        .width
        .saturating_sub(ROW_HEADER_WIDTH + 2) as usize;
    let available_height = grid_area.height.saturating_sub(3) as usize; // header + borders

    app.visible_cols = (available_width / (app.col_width + GRID_COLUMN_SPACING as usize)).max(1);
    app.visible_rows = available_height.max(1);
    app.update_viewport();

    draw_selector_bar(f, app, chunks[0]);
    draw_grid(f, app, chunks[1]);
    draw_command_bar(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);

    if app.focus == Focus::Command && !app.popup.is_empty() {
        draw_popup(f, app, chunks[2]);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render a buffer with a visible cursor marker when focused.
fn buffer_line(buffer: &str, cursor: usize, focused: bool) -> String {
    if focused {
        let (before, after) = buffer.split_at(cursor.min(buffer.len()));
        format!("{}│{}", before, after)
    } else {
        buffer.to_string()
    }
}

fn draw_selector_bar(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Selector;
    let content = buffer_line(&app.selector_buffer, app.selector_cursor, focused);
    let bar = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title("Selection"),
    );
    f.render_widget(bar, area);
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Command;
    let content = buffer_line(&app.command_buffer, app.command_cursor, focused);
    let bar = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title("Command (#tag references cells)"),
    );
    f.render_widget(bar, area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let bounds = app.sheet.bounds();

    let mut header_cells = vec![Cell::from("")];
    for offset in 0..app.visible_cols {
        let col = app.viewport_col + offset;
        if col >= bounds.cols {
            break;
        }
        header_cells.push(
            Cell::from(col_to_letters(col)).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
    let header = Row::new(header_cells);

    let mut rows = Vec::new();
    for row_offset in 0..app.visible_rows {
        let row = app.viewport_row + row_offset;
        if row >= bounds.rows {
            break;
        }

        let mut cells = vec![
            Cell::from(format!("{}", row + 1)).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        for col_offset in 0..app.visible_cols {
            let col = app.viewport_col + col_offset;
            if col >= bounds.cols {
                break;
            }

            let mut text = app.sheet.cell_value(row, col).unwrap_or_default();
            if text.chars().count() > app.col_width {
                text = text.chars().take(app.col_width.saturating_sub(1)).collect();
                text.push('…');
            }

            let mut style = Style::default();
            if app.sheet.is_selected(row, col) {
                style = style.bg(Color::Blue).fg(Color::White);
            }
            if row == app.cursor_row && col == app.cursor_col && app.focus == Focus::Grid {
                style = style.add_modifier(Modifier::REVERSED);
            }
            cells.push(Cell::from(text).style(style));
        }
        rows.push(Row::new(cells));
    }

    let shown_cols = app
        .visible_cols
        .min(bounds.cols.saturating_sub(app.viewport_col));
    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    widths.extend((0..shown_cols).map(|_| Constraint::Length(app.col_width as u16)));

    let title = match app.file_path {
        Some(ref path) => format!(" {} ", path.display()),
        None => String::from(" (no file) "),
    };
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(GRID_COLUMN_SPACING)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::Grid))
                .title(title),
        );
    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let bounds = app.sheet.bounds();
    let hint = match app.focus {
        Focus::Grid => "arrows move · shift extends · s selector · : command · y yank · q quit",
        Focus::Selector => "Enter applies · Esc back",
        Focus::Command => "Enter previews tags · Esc back",
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}x{} ", bounds.rows, bounds.cols),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(hint),
    ];
    if !app.status_message.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            app.status_message.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn suggestion_color(kind: SuggestionKind) -> Color {
    match kind {
        SuggestionKind::Cell => Color::White,
        SuggestionKind::Column => Color::Cyan,
        SuggestionKind::Row => Color::Green,
        SuggestionKind::Range => Color::Magenta,
    }
}

/// Popup anchored above the command bar.
fn draw_popup(f: &mut Frame, app: &App, command_area: Rect) {
    let height = (app.popup.len() as u16).saturating_add(2);
    let width = 44.min(command_area.width);
    let area = Rect {
        x: command_area.x + 1,
        y: command_area.y.saturating_sub(height),
        width,
        height,
    };

    let items: Vec<ListItem> = app
        .popup
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let mut style = Style::default().fg(suggestion_color(suggestion.kind));
            if app.popup_index == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<8}", suggestion.text), style),
                Span::styled(
                    suggestion.detail.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Tags")),
        area,
    );
}
