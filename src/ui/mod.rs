//! User interface module
//!
//! Contains the terminal UI, key bindings, and the pure diff renderer

pub mod keys;
pub mod render;
pub mod styles;
pub mod tui;

// Re-export main types
pub use render::{render, RenderOptions, RenderedView, SplitColumns};
pub use tui::{TuiApp, setup_terminal, restore_terminal};
