pub mod cli;
pub mod config;
pub mod core;
pub mod diff;
pub mod ui;

pub use crate::config::DiffDeskConfig;
pub use crate::core::{AppEvent, AppState, ViewMode};
pub use crate::diff::{align, AlignedRow, DiffSegment, Granularity, RowStatus, SegmentKind};
