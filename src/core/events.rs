use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the diff output region presents the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Single column with added and removed text interleaved
    #[default]
    Inline,
    /// Two independent columns, no row alignment
    Split,
    /// Two columns with paired rows
    SplitAligned,
}

impl ViewMode {
    /// Next mode in the cycle Inline -> Split -> SplitAligned -> Inline
    pub fn next(self) -> Self {
        match self {
            Self::Inline => Self::Split,
            Self::Split => Self::SplitAligned,
            Self::SplitAligned => Self::Inline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inline => "Inline",
            Self::Split => "Split",
            Self::SplitAligned => "Split (aligned)",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which input pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Original,
    Modified,
}

impl Pane {
    pub fn other(self) -> Self {
        match self {
            Self::Original => Self::Modified,
            Self::Modified => Self::Original,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Modified => "Modified",
        }
    }
}

/// Every user intent the shell reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Insert(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    ClearPane,
    FocusNext,
    ToggleGranularity,
    CycleViewMode,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    ToggleHelp,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_cycle_order() {
        let mut mode = ViewMode::Inline;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(mode);
            mode = mode.next();
        }

        assert_eq!(
            seen,
            vec![ViewMode::Inline, ViewMode::Split, ViewMode::SplitAligned, ViewMode::Inline]
        );
    }

    #[test]
    fn test_pane_other() {
        assert_eq!(Pane::Original.other(), Pane::Modified);
        assert_eq!(Pane::Modified.other(), Pane::Original);
    }
}
