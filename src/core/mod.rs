//! Core application state
//!
//! Contains the editable input panes, user events, and the shell state that
//! ties them to the diff engine

pub mod editor;
pub mod events;
pub mod state;

// Re-export main types
pub use editor::Editor;
pub use events::{AppEvent, Pane, ViewMode};
pub use state::AppState;
