//! Token viewer - displays the analyzer's flat token sequence
//!
//! Shows one token per line as `line:column  kind  value`, with a
//! movable selection. The token list is display-only; the engine never
//! consumes it.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Token viewer - displays the analyzer's flat token sequence
#[derive(Debug, Default)]
pub struct TokenViewer {
    /// Index of the currently selected token
    selected: usize,
}

#[allow(dead_code)]
impl TokenViewer {
    /// Create a new token viewer
    pub fn new() -> Self {
        TokenViewer { selected: 0 }
    }

    /// Get the selected token index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Return the selection to the top (called when the result is replaced)
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl Viewer for TokenViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let tokens = model.tokens();

        if tokens.is_empty() {
            let empty = Paragraph::new("No tokens.").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(empty, area);
            return;
        }

        // Keep the selected token inside the viewport
        let height = area.height as usize;
        let start = if height > 0 && self.selected >= height {
            self.selected + 1 - height
        } else {
            0
        };

        let lines: Vec<Line> = tokens
            .iter()
            .enumerate()
            .skip(start)
            .take(height.max(1))
            .map(|(index, token)| {
                let text = format!(
                    "{:>4}:{:<4} {:<12} {}",
                    token.line, token.column, token.kind, token.value
                );
                if index == self.selected {
                    Line::from(text).style(
                        Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(text)
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let count = model.tokens().len();
        if count == 0 {
            return Some(ViewerEvent::NoChange);
        }

        match key.code {
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    Some(ViewerEvent::SelectToken(self.selected))
                } else {
                    Some(ViewerEvent::NoChange)
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                    Some(ViewerEvent::SelectToken(self.selected))
                } else {
                    Some(ViewerEvent::NoChange)
                }
            }
            _ => Some(ViewerEvent::NoChange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use synt_engine::loader::ResultLoader;

    fn model_with_tokens(count: usize) -> Model {
        let tokens: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"type": "Identifier", "value": "t{}", "line": {}, "column": 0}}"#,
                    i,
                    i + 1
                )
            })
            .collect();
        let json = format!(r#"{{"tokens": [{}], "ast": null}}"#, tokens.join(", "));
        Model::new(ResultLoader::from_string(json).parse().unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_token_viewer_creation() {
        let viewer = TokenViewer::new();
        assert_eq!(viewer.selected(), 0);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let model = model_with_tokens(3);
        let mut viewer = TokenViewer::new();

        assert_eq!(
            viewer.handle_key(key(KeyCode::Down), &model),
            Some(ViewerEvent::SelectToken(1))
        );
        assert_eq!(
            viewer.handle_key(key(KeyCode::Down), &model),
            Some(ViewerEvent::SelectToken(2))
        );
        // already at the last token
        assert_eq!(
            viewer.handle_key(key(KeyCode::Down), &model),
            Some(ViewerEvent::NoChange)
        );

        assert_eq!(
            viewer.handle_key(key(KeyCode::Up), &model),
            Some(ViewerEvent::SelectToken(1))
        );
    }

    #[test]
    fn test_empty_token_list_is_inert() {
        let model = model_with_tokens(0);
        let mut viewer = TokenViewer::new();
        assert_eq!(
            viewer.handle_key(key(KeyCode::Down), &model),
            Some(ViewerEvent::NoChange)
        );
    }
}
