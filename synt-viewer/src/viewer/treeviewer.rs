//! Tree viewer - displays and navigates the presented syntax tree
//!
//! The tree viewer shows the engine's row sequence: one line per node,
//! indented by depth, with an expand marker on rows that have children.
//! Users navigate with Up/Down and toggle expansion with Left/Right or
//! Enter. All structural decisions (what is a variant, what gets a
//! header, what is visible) were already made by the engine; this
//! component only styles rows and routes keys.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use synt_engine::expansion::NodePath;
use synt_engine::render::{Row, RowContent, ScalarDisplay};

/// Tree viewer - displays and navigates the presented syntax tree
#[derive(Debug, Default)]
pub struct TreeViewer {
    /// Position of the currently selected row
    selected_path: Option<NodePath>,
}

#[allow(dead_code)]
impl TreeViewer {
    /// Create a new tree viewer
    pub fn new() -> Self {
        TreeViewer {
            selected_path: None,
        }
    }

    /// Get the currently selected row position
    pub fn selected_path(&self) -> Option<&NodePath> {
        self.selected_path.as_ref()
    }

    /// Forget the selection (called when the result is replaced)
    pub fn reset(&mut self) {
        self.selected_path = None;
    }

    /// Get the position of the next visible row after `current`
    ///
    /// Returns None if `current` is the last visible row or is no
    /// longer visible.
    pub fn next_visible_row(&self, current: &NodePath, rows: &[Row]) -> Option<NodePath> {
        let index = rows.iter().position(|row| &row.path == current)?;
        rows.get(index + 1).map(|row| row.path.clone())
    }

    /// Get the position of the previous visible row before `current`
    pub fn previous_visible_row(&self, current: &NodePath, rows: &[Row]) -> Option<NodePath> {
        let index = rows.iter().position(|row| &row.path == current)?;
        if index > 0 {
            rows.get(index - 1).map(|row| row.path.clone())
        } else {
            None
        }
    }
}

impl Viewer for TreeViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let rows = model.visible_rows();

        if rows.is_empty() {
            let empty = Paragraph::new("No syntax tree available.").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(empty, area);
            return;
        }

        let selected_index = self
            .selected_path
            .as_ref()
            .and_then(|path| rows.iter().position(|row| &row.path == path));

        // Keep the selected row inside the viewport
        let height = area.height as usize;
        let start = match selected_index {
            Some(index) if height > 0 && index >= height => index + 1 - height,
            _ => 0,
        };

        let width = area.width as usize;
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(start)
            .take(height.max(1))
            .map(|(index, row)| row_line(row, width, selected_index == Some(index)))
            .collect();

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let rows = model.visible_rows();

        // Initialize selection to the first visible row if not yet selected
        if self.selected_path.is_none() {
            if let Some(first) = rows.first() {
                self.selected_path = Some(first.path.clone());
            }
        }

        let current = self.selected_path.clone()?;

        match key.code {
            KeyCode::Up => {
                if let Some(previous) = self.previous_visible_row(&current, &rows) {
                    self.selected_path = Some(previous.clone());
                    Some(ViewerEvent::SelectRow(previous))
                } else {
                    Some(ViewerEvent::NoChange)
                }
            }
            KeyCode::Down => {
                if let Some(next) = self.next_visible_row(&current, &rows) {
                    self.selected_path = Some(next.clone());
                    Some(ViewerEvent::SelectRow(next))
                } else {
                    Some(ViewerEvent::NoChange)
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Enter => {
                // Toggling only means something on rows with children
                let selected_row = rows.iter().find(|row| row.path == current);
                match selected_row {
                    Some(row) if row.has_children => {
                        Some(ViewerEvent::ToggleNodeExpansion(current))
                    }
                    _ => Some(ViewerEvent::NoChange),
                }
            }
            _ => Some(ViewerEvent::NoChange),
        }
    }
}

/// Build the styled line for one row
fn row_line(row: &Row, width: usize, selected: bool) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let marker = if row.has_children {
        if row.expanded {
            "▾ "
        } else {
            "▸ "
        }
    } else {
        "  "
    };

    if selected {
        // Selected row: uniform highlight, muted when collapsed
        let text_color = if row.has_children && !row.expanded {
            Color::Gray
        } else {
            Color::White
        };
        let text = fit_text(
            format!("{}{}{}", indent, marker, plain_text(row)),
            width,
        );
        return Line::from(text).style(
            Style::default()
                .bg(Color::Blue)
                .fg(text_color)
                .add_modifier(Modifier::BOLD),
        );
    }

    let mut spans = vec![Span::styled(
        format!("{}{}", indent, marker),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(label) = &row.label {
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    spans.extend(content_spans(&row.content));

    Line::from(fit_spans(spans, width))
}

/// Unstyled text of a row (labels and content), for highlighted lines
fn plain_text(row: &Row) -> String {
    let content = match &row.content {
        RowContent::Null => "null".to_string(),
        RowContent::Literal(display) => literal_text(display),
        RowContent::Tag { name, inline: None } => name.clone(),
        RowContent::Tag {
            name,
            inline: Some(value),
        } => format!("{} {}", name, value),
        RowContent::Record => String::new(),
        RowContent::SequenceHeader { field, len } => format!("{} [{}]", field, len),
    };
    match &row.label {
        Some(label) if content.is_empty() => format!("{}:", label),
        Some(label) => format!("{}: {}", label, content),
        None => content,
    }
}

fn literal_text(display: &ScalarDisplay) -> String {
    match display {
        ScalarDisplay::TagToken(s) => s.clone(),
        ScalarDisplay::Quoted(s) => format!("\"{}\"", s),
        ScalarDisplay::Number(n) => n.clone(),
        ScalarDisplay::Bool(b) => b.to_string(),
    }
}

/// Styled spans for a row's content
fn content_spans(content: &RowContent) -> Vec<Span<'static>> {
    match content {
        RowContent::Null => vec![Span::styled(
            "null",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )],
        RowContent::Literal(ScalarDisplay::TagToken(s)) => vec![Span::styled(
            s.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )],
        RowContent::Literal(display) => vec![Span::styled(
            literal_text(display),
            Style::default().fg(Color::Yellow),
        )],
        RowContent::Tag { name, inline } => {
            let mut spans = vec![Span::styled(
                name.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(value) = inline {
                spans.push(Span::styled(
                    format!(" {}", value),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            spans
        }
        RowContent::Record => Vec::new(),
        RowContent::SequenceHeader { field, len } => vec![Span::styled(
            format!("{} [{}]", field, len),
            Style::default().fg(Color::DarkGray),
        )],
    }
}

/// Truncate a plain string to the available width
fn fit_text(text: String, width: usize) -> String {
    if text.chars().count() > width {
        text.chars().take(width).collect()
    } else {
        text
    }
}

/// Truncate a span list to the available width, cutting inside the
/// span that crosses the limit
fn fit_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut used = 0usize;
    for span in spans {
        let len = span.content.chars().count();
        if used + len <= width {
            used += len;
            out.push(span);
        } else {
            let remaining = width.saturating_sub(used);
            if remaining > 0 {
                let truncated: String = span.content.chars().take(remaining).collect();
                out.push(Span::styled(truncated, span.style));
            }
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use synt_engine::loader::ResultLoader;

    fn model(json: &str) -> Model {
        Model::new(ResultLoader::from_string(json).parse().unwrap())
    }

    fn render_to_text(viewer: &TreeViewer, model: &Model, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                viewer.render(frame, area, model);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = buffer.cell((x, y)) {
                    output.push_str(cell.symbol());
                }
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_tree_viewer_creation() {
        let viewer = TreeViewer::new();
        assert_eq!(viewer.selected_path(), None);
    }

    #[test]
    fn test_renders_tag_and_fields() {
        let model = model(r#"{"ast": {"If": {"cond": "X", "then": ["A", "B"]}}}"#);
        let output = render_to_text(&TreeViewer::new(), &model, 40, 10);

        assert!(output.contains("If"));
        assert!(output.contains("cond: X"));
        assert!(output.contains("then [2]"));
    }

    #[test]
    fn test_renders_empty_state() {
        let model = model(r#"{"ast": null}"#);
        let output = render_to_text(&TreeViewer::new(), &model, 40, 5);
        assert!(output.contains("No syntax tree available."));
    }

    #[test]
    fn test_quoted_literals_keep_quotes() {
        let model = model(r#"{"ast": {"tipo": "int", "nome": "x"}}"#);
        let output = render_to_text(&TreeViewer::new(), &model, 40, 10);
        assert!(output.contains("tipo: \"int\""));
        assert!(output.contains("nome: \"x\""));
    }

    #[test]
    fn test_long_lines_are_truncated_to_width() {
        let long = "a".repeat(80);
        let model = model(&format!(r#"{{"ast": {{"name": "{}"}}}}"#, long));
        let output = render_to_text(&TreeViewer::new(), &model, 30, 5);

        for line in output.lines() {
            assert!(
                line.trim_end().chars().count() <= 30,
                "line too long: '{}'",
                line
            );
        }
    }

    #[test]
    fn test_navigation_moves_selection() {
        let model = model(r#"{"ast": {"If": {"cond": "X", "then": ["A", "B"]}}}"#);
        let mut viewer = TreeViewer::new();

        let key = KeyEvent::new(KeyCode::Down, crossterm::event::KeyModifiers::empty());
        let event = viewer.handle_key(key, &model);

        // first key initializes to the root row, then moves down
        match event {
            Some(ViewerEvent::SelectRow(path)) => {
                assert!(!path.is_root());
            }
            other => panic!("expected SelectRow, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_requires_children() {
        let model = model(r#"{"ast": {"Num": 42}}"#);
        let mut viewer = TreeViewer::new();

        // the only row is an inline variant with no children
        let key = KeyEvent::new(KeyCode::Right, crossterm::event::KeyModifiers::empty());
        assert_eq!(viewer.handle_key(key, &model), Some(ViewerEvent::NoChange));
    }
}
