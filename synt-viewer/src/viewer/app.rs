//! Application state and event dispatch
//!
//! App owns the model and the two viewers and routes keyboard input to
//! whichever viewer has focus. Viewers never mutate the model directly;
//! they emit ViewerEvents which App applies, keeping rendering a pure
//! function of model state.

use super::model::{Focus, Model};
use super::tokenviewer::TokenViewer;
use super::treeviewer::TreeViewer;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use synt_engine::analysis::AnalysisResult;

/// Top-level application state
pub struct App {
    pub model: Model,
    pub focus: Focus,
    pub tree_viewer: TreeViewer,
    pub token_viewer: TokenViewer,
    pub should_quit: bool,
}

impl App {
    /// Create the app around a model
    pub fn new(model: Model) -> Self {
        App {
            model,
            focus: Focus::default(),
            tree_viewer: TreeViewer::new(),
            token_viewer: TokenViewer::new(),
            should_quit: false,
        }
    }

    /// Switch keyboard focus to the other viewer
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Handle a keyboard event, applying any resulting model change
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                self.toggle_focus();
                None
            }
            _ => {
                let event = match self.focus {
                    Focus::TreeViewer => self.tree_viewer.handle_key(key, &self.model),
                    Focus::TokenViewer => self.token_viewer.handle_key(key, &self.model),
                };
                if let Some(event) = &event {
                    self.apply_event(event.clone());
                }
                event
            }
        }
    }

    /// Swap in a freshly loaded analyzer result
    pub fn replace_result(&mut self, result: AnalysisResult) {
        self.model.replace_result(result);
        self.tree_viewer.reset();
        self.token_viewer.reset();
    }

    fn apply_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::SelectRow(path) => self.model.select_row(path),
            ViewerEvent::SelectToken(index) => self.model.select_token(index),
            ViewerEvent::ToggleNodeExpansion(path) => self.model.toggle_expansion(&path),
            ViewerEvent::NoChange => {}
        }
    }
}
