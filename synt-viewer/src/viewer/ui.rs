//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Error banner (1 line, only when the analyzer reported an error)
//! - Middle section (responsive height):
//!   - Tree viewer (remaining space)
//!   - Token viewer (38 chars, fixed width)
//! - Status line (1 line, fixed)

use super::app::App;
use super::model::{Focus, Selection};
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Width allocated to the token viewer
const TOKEN_VIEWER_WIDTH: u16 = 38;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, file_name: &str) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, optional error banner, middle
    // (tree|tokens), status line
    let has_error = app.model.error().is_some();
    let mut constraints = vec![Constraint::Length(1)]; // Title bar
    if has_error {
        constraints.push(Constraint::Length(1)); // Error banner
    }
    constraints.push(Constraint::Min(1)); // Middle - fill available space
    constraints.push(Constraint::Length(STATUS_LINE_HEIGHT)); // Status line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_title_bar(frame, chunks[0], file_name);
    let mut next = 1;
    if has_error {
        render_error_banner(frame, chunks[next], app);
        next += 1;
    }
    render_middle_section(frame, chunks[next], app);
    render_status_line(frame, chunks[next + 1], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("syntv:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

/// The analyzer's error message; partial results still render below it
fn render_error_banner(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.model.error().unwrap_or_default();
    let paragraph = Paragraph::new(format!("⚠ {}", message)).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App) {
    // Split horizontally: tree viewer and token viewer
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),                     // Tree viewer
            Constraint::Length(TOKEN_VIEWER_WIDTH), // Token viewer
        ])
        .split(area);

    render_tree_viewer(frame, chunks[0], app);
    render_token_viewer(frame, chunks[1], app);
}

fn render_tree_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::TreeViewer {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Tree{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the tree viewer's content
    app.tree_viewer.render(frame, inner_area, &app.model);
}

fn render_token_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::TokenViewer {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Tokens{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the token viewer's content
    app.token_viewer.render(frame, inner_area, &app.model);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    // Build status line content as a single line
    let mut parts = Vec::new();

    match app.model.selection() {
        Selection::Tree(path) => {
            parts.push(Span::styled(
                "Tree",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            parts.push(Span::raw(" | "));

            if path.is_root() {
                parts.push(Span::styled(
                    "Selection: ",
                    Style::default().fg(Color::Yellow),
                ));
                parts.push(Span::raw("Root"));
            } else {
                parts.push(Span::styled("Path: ", Style::default().fg(Color::Yellow)));
                parts.push(Span::raw(format!("[{}]", path)));
            }

            parts.push(Span::raw(" | "));
            parts.push(Span::styled("State: ", Style::default().fg(Color::Yellow)));
            parts.push(Span::raw(if app.model.is_expanded(path) {
                "Expanded"
            } else {
                "Collapsed"
            }));
        }
        Selection::Token(index) => {
            parts.push(Span::styled(
                "Tokens",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            parts.push(Span::raw(" | "));

            let count = app.model.tokens().len();
            parts.push(Span::styled("Token: ", Style::default().fg(Color::Yellow)));
            parts.push(Span::raw(format!("{} of {}", index + 1, count)));

            if let Some(token) = app.model.tokens().get(*index) {
                parts.push(Span::raw(" | "));
                parts.push(Span::raw(format!(
                    "{} '{}' @ {}:{}",
                    token.kind, token.value, token.line, token.column
                )));
            }
        }
    }

    // Render as a simple single-line status without borders
    let paragraph = Paragraph::new(ratatui::text::Line::from(parts))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(paragraph, area);
}
