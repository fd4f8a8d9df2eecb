//! Viewer module - trait, events, and main entry points
//!
//! The Viewer trait defines a common interface for UI components that:
//! - Render themselves given a model and area
//! - Handle keyboard input and return events
//!
//! This module also contains the terminal lifecycle for the interactive
//! viewer and the plain-text dump entry point.

use super::app::App;
use super::model::Model;
use super::ui;
use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use synt_engine::analysis::AnalysisResult;
use synt_engine::expansion::{ExpansionStore, NodePath};
use synt_engine::loader::ResultLoader;
use synt_engine::present::present;
use synt_engine::treeviz;

/// Events that can be emitted by viewers
///
/// These represent model changes that should be applied after handling
/// input.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// Select a tree row by position
    SelectRow(NodePath),
    /// Select a token by index
    SelectToken(usize),
    /// Toggle whether a node shows its children
    ToggleNodeExpansion(NodePath),
    /// No change to model
    NoChange,
}

/// Trait for UI viewers
///
/// A viewer is a component that:
/// - Knows how to render itself given a model
/// - Knows how to interpret keyboard input
/// - Emits ViewerEvents when user interactions require model changes
pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent>;
}

/// Run the interactive viewer for the given result file
pub fn run_viewer(file_path: PathBuf) -> io::Result<()> {
    let result = load_result(&file_path)?;
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let model = Model::new(result);
    let mut app = App::new(model);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &file_path, &file_name);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Print the fully expanded tree to stdout and exit
pub fn dump_tree(file_path: PathBuf) -> io::Result<()> {
    let result = load_result(&file_path)?;

    if let Some(error) = &result.error {
        eprintln!("analyzer error: {}", error);
    }

    let rows = present(result.ast.as_ref(), &ExpansionStore::expanded_everywhere());
    if rows.is_empty() {
        println!("No syntax tree in {}", file_path.display());
    } else {
        print!("{}", treeviz::rows_to_text(&rows));
    }

    Ok(())
}

fn load_result(path: &Path) -> io::Result<AnalysisResult> {
    let loader = ResultLoader::from_path(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read analyzer result: {}", e),
        )
    })?;
    loader.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse analyzer result: {}", e),
        )
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    file_path: &Path,
    file_name: &str,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app, file_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    handle_key_event(key, app, file_path);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration will re-render with new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App, file_path: &Path) {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Char('r') if key.modifiers.is_empty() => {
            // Reload the result file; keep the current result if the
            // file went away or no longer parses
            if let Ok(result) = load_result(file_path) {
                app.replace_result(result);
            }
        }
        _ => {
            let _ = app.handle_key(key);
        }
    }
}
