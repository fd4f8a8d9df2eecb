//! Test infrastructure for the viewer
//!
//! Provides utilities for testing the full application including:
//! - TestApp: wrapper for testing the application
//! - Keyboard helpers: easy creation of keyboard events
//! - Render helpers: getting and verifying UI output

use super::app::App;
use super::model::Model;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::{Backend, TestBackend};
use ratatui::Terminal;
use synt_engine::loader::ResultLoader;

/// A small analyzer result used by most tests: an `If` statement with a
/// condition and a two-element body, plus a few tokens.
const SAMPLE_RESULT: &str = r#"{
    "tokens": [
        {"type": "Keyword", "value": "if", "line": 1, "column": 0},
        {"type": "Identifier", "value": "x", "line": 1, "column": 4},
        {"type": "Symbol", "value": "{", "line": 1, "column": 6}
    ],
    "ast": {"If": {"cond": "X", "then": ["A", "B"]}},
    "error": null
}"#;

/// Test application wrapper with test backend
pub struct TestApp {
    app: App,
    terminal: Terminal<TestBackend>,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test app with the sample result
    pub fn new() -> Self {
        Self::with_result(SAMPLE_RESULT)
    }

    /// Create a test app with a specific result JSON
    pub fn with_result(json: &str) -> Self {
        let result = ResultLoader::from_string(json)
            .parse()
            .expect("Failed to parse test result");
        let model = Model::new(result);
        let app = App::new(model);

        // Create terminal with reasonable default size (80x24)
        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");

        TestApp { app, terminal }
    }

    /// Send a keyboard event and return the rendered output
    pub fn send_key(&mut self, code: KeyCode) -> String {
        self.send_key_with_modifiers(code, KeyModifiers::empty())
    }

    /// Send a keyboard event with modifiers and return the rendered output
    pub fn send_key_with_modifiers(&mut self, code: KeyCode, modifiers: KeyModifiers) -> String {
        let key = KeyEvent::new(code, modifiers);
        let _ = self.app.handle_key(key);
        self.render()
    }

    /// Render the current application state and return output
    pub fn render(&mut self) -> String {
        use super::ui;

        self.terminal
            .draw(|frame| {
                let file_name = "result.json";
                ui::render(frame, &self.app, file_name);
            })
            .expect("Failed to draw");

        self.terminal_output()
    }

    /// Get the current terminal output as a string
    fn terminal_output(&self) -> String {
        let backend = self.terminal.backend();
        let (width, height) = (
            backend.size().unwrap().width,
            backend.size().unwrap().height,
        );
        let mut output = String::new();

        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = backend.buffer().cell((x, y)) {
                    output.push_str(cell.symbol());
                } else {
                    output.push(' ');
                }
            }
            output.push('\n');
        }

        output
    }

    /// Get reference to the app for assertions
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get mutable reference to the app for direct state manipulation
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Check if the tree viewer is focused
    pub fn is_tree_viewer_focused(&self) -> bool {
        self.app.focus == super::model::Focus::TreeViewer
    }

    /// Check if the token viewer is focused
    pub fn is_token_viewer_focused(&self) -> bool {
        self.app.focus == super::model::Focus::TokenViewer
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for creating keyboard events
#[allow(dead_code)]
pub mod keyboard {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Create a key event with no modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Create a key event with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }
}

// Tests that can only run within this module (need access to TestApp)
use synt_engine::expansion::NodePath;

#[test]
fn test_renders_tree_and_tokens() {
    let mut app = TestApp::new();
    let output = app.render();

    // title bar
    assert!(output.contains("syntv:: result.json"));
    // tree pane content
    assert!(output.contains("If"));
    assert!(output.contains("cond: X"));
    assert!(output.contains("then [2]"));
    // token pane content
    assert!(output.contains("Keyword"));
    assert!(output.contains("Identifier"));
}

#[test]
fn test_empty_ast_shows_empty_state() {
    let mut app = TestApp::with_result(r#"{"tokens": [], "ast": null}"#);
    let output = app.render();
    assert!(output.contains("No syntax tree available."));
    assert!(output.contains("No tokens."));
}

#[test]
fn test_error_banner_keeps_partial_result() {
    let mut app = TestApp::with_result(
        r#"{
            "tokens": [{"type": "Keyword", "value": "int", "line": 1, "column": 0}],
            "ast": [{"Num": 7}],
            "error": "Syntax error: unexpected token"
        }"#,
    );
    let output = app.render();

    // the banner shows up and the partial result still renders
    assert!(output.contains("⚠ Syntax error: unexpected token"));
    assert!(output.contains("Num"));
    assert!(output.contains("Keyword"));
}

#[test]
fn test_tab_toggles_focus() {
    let mut app = TestApp::new();
    assert!(app.is_tree_viewer_focused());

    app.send_key(KeyCode::Tab);
    assert!(app.is_token_viewer_focused());

    app.send_key(KeyCode::Tab);
    assert!(app.is_tree_viewer_focused());
}

#[test]
fn test_q_quits() {
    let mut app = TestApp::new();
    assert!(!app.should_quit());
    app.send_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = TestApp::new();
    app.send_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[test]
fn test_tree_navigation_updates_model_selection() {
    let mut app = TestApp::new();

    app.send_key(KeyCode::Down);

    let selected = app
        .app()
        .model
        .selected_path()
        .expect("tree selection should be tracked");
    assert!(!selected.is_root());
}

#[test]
fn test_collapse_hides_children_and_expand_restores_them() {
    let mut app = TestApp::new();
    let before = app.render();
    let rows_before = app.app().model.visible_rows().len();

    // first key initializes the selection at the root row; Left
    // collapses it
    app.send_key(KeyCode::Left);
    let rows_collapsed = app.app().model.visible_rows().len();
    assert!(rows_collapsed < rows_before);

    // toggling again restores the exact same rendering
    let after = app.send_key(KeyCode::Right);
    assert_eq!(app.app().model.visible_rows().len(), rows_before);
    assert_eq!(before, after);
}

#[test]
fn test_token_navigation_updates_model_selection() {
    let mut app = TestApp::new();
    app.send_key(KeyCode::Tab); // focus the token viewer
    app.send_key(KeyCode::Down);

    assert_eq!(app.app().model.selected_token(), Some(1));
}

#[test]
fn test_status_line_shows_path_and_state() {
    let mut app = TestApp::new();

    // navigate into the tree so a non-root path is selected
    app.send_key(KeyCode::Down);
    let output = app.render();

    assert!(output.contains("Path: [cond]"));
    assert!(output.contains("State:"));
}

#[test]
fn test_replace_result_resets_presentation_state() {
    let mut app = TestApp::new();

    // collapse the root, then swap in a new result
    app.send_key(KeyCode::Left);
    assert!(!app.app().model.is_expanded(&NodePath::root()));

    let next = ResultLoader::from_string(r#"{"ast": {"While": {"cond": "Y"}}}"#)
        .parse()
        .unwrap();
    app.app_mut().replace_result(next);

    // defaults are back: the new root renders expanded
    assert!(app.app().model.is_expanded(&NodePath::root()));
    let output = app.render();
    assert!(output.contains("While"));
    assert!(output.contains("cond: Y"));
}

#[test]
fn test_statement_list_renders_every_statement() {
    let mut app = TestApp::with_result(
        r#"{"ast": [{"Decl": {"name": "x"}}, {"Num": 1}, {"Num": 2}]}"#,
    );
    let output = app.render();

    assert!(output.contains("Decl"));
    assert!(output.contains("Num 1"));
    assert!(output.contains("Num 2"));
}

#[test]
fn test_terminal_too_narrow_message() {
    let mut app = TestApp::new();
    app.terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let output = app.render();
    assert!(output.contains("Terminal too narrow"));
}
