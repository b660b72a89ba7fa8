use crate::config::DiffDeskConfig;
use crate::diff::{
    align, AlignedRow, DiffGenerator, DiffSegment, DiffStats, Granularity,
};
use super::editor::Editor;
use super::events::{AppEvent, Pane, ViewMode};

/// State owned by the application shell.
///
/// Holds both input texts and the two selectors, and caches everything the
/// renderer needs. Any change to a text or selector triggers `recompute`.
pub struct AppState {
    pub original: Editor,
    pub modified: Editor,
    pub focus: Pane,
    pub granularity: Granularity,
    pub view_mode: ViewMode,
    pub scroll_offset: usize,
    pub scroll_step: usize,
    pub show_help: bool,
    pub should_quit: bool,
    generator: DiffGenerator,
    /// Segments shown by the current view
    segments: Vec<DiffSegment>,
    /// Rows for the aligned view, empty in other modes
    rows: Vec<AlignedRow>,
    stats: DiffStats,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(&DiffDeskConfig::default())
    }
}

impl AppState {
    /// Create a new AppState with configuration
    pub fn with_config(config: &DiffDeskConfig) -> Self {
        let mut state = Self {
            original: Editor::new(),
            modified: Editor::new(),
            focus: Pane::default(),
            granularity: config.diff.granularity,
            view_mode: config.ui.view_mode,
            scroll_offset: 0,
            scroll_step: config.ui.scroll_step,
            show_help: false,
            should_quit: false,
            generator: DiffGenerator::new(config.diff.algorithm),
            segments: Vec::new(),
            rows: Vec::new(),
            stats: DiffStats::default(),
        };
        state.recompute();
        state
    }

    /// Seed both panes
    pub fn with_texts(mut self, original: &str, modified: &str) -> Self {
        self.original.set_text(original);
        self.modified.set_text(modified);
        self.recompute();
        self
    }

    pub fn segments(&self) -> &[DiffSegment] {
        &self.segments
    }

    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    pub fn stats(&self) -> DiffStats {
        self.stats
    }

    pub fn algorithm_name(&self) -> &str {
        self.generator.algorithm_name()
    }

    pub fn algorithm_description(&self) -> &str {
        self.generator.algorithm_description()
    }

    pub fn editor(&self, pane: Pane) -> &Editor {
        match pane {
            Pane::Original => &self.original,
            Pane::Modified => &self.modified,
        }
    }

    fn focused_mut(&mut self) -> &mut Editor {
        match self.focus {
            Pane::Original => &mut self.original,
            Pane::Modified => &mut self.modified,
        }
    }

    /// Granularity actually used by the current view
    pub fn effective_granularity(&self) -> Granularity {
        match self.view_mode {
            ViewMode::Inline => self.granularity,
            ViewMode::Split | ViewMode::SplitAligned => Granularity::Line,
        }
    }

    /// Re-derive segments, rows and stats from the texts and selectors
    pub fn recompute(&mut self) {
        let original = self.original.text();
        let modified = self.modified.text();

        let line_segments = self.generator.compute(&original, &modified, Granularity::Line);
        self.stats = DiffStats::from_segments(&line_segments);

        self.rows = if self.view_mode == ViewMode::SplitAligned {
            align(&line_segments)
        } else {
            Vec::new()
        };

        self.segments = match self.effective_granularity() {
            Granularity::Line => line_segments,
            Granularity::Char => self.generator.compute(&original, &modified, Granularity::Char),
        };

        self.clamp_scroll();

        tracing::debug!(
            view = %self.view_mode,
            granularity = %self.effective_granularity(),
            segments = self.segments.len(),
            rows = self.rows.len(),
            "recomputed diff"
        );
    }

    /// Number of visual lines the output region needs
    pub fn content_height(&self) -> usize {
        match self.view_mode {
            ViewMode::Inline => visual_lines(self.segments.iter()),
            ViewMode::Split => {
                let left = visual_lines(self.segments.iter().filter(|s| s.in_original()));
                let right = visual_lines(self.segments.iter().filter(|s| s.in_modified()));
                left.max(right)
            }
            ViewMode::SplitAligned => self.rows.len(),
        }
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.content_height().saturating_sub(1);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_scroll = self.content_height().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max_scroll);
    }

    pub fn toggle_granularity(&mut self) {
        self.granularity = self.granularity.toggle();
        tracing::info!("Granularity set to {}", self.granularity);
        self.recompute();
    }

    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
        self.scroll_offset = 0;
        tracing::info!("View mode set to {}", self.view_mode);
        self.recompute();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Apply one user event
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::FocusNext => self.focus = self.focus.other(),
            AppEvent::ToggleGranularity => self.toggle_granularity(),
            AppEvent::CycleViewMode => self.cycle_view_mode(),
            AppEvent::ScrollUp => self.scroll_up(self.scroll_step),
            AppEvent::ScrollDown => self.scroll_down(self.scroll_step),
            AppEvent::ScrollTop => self.scroll_offset = 0,
            AppEvent::ScrollBottom => self.scroll_offset = self.content_height().saturating_sub(1),
            AppEvent::ToggleHelp => self.toggle_help(),
            AppEvent::Quit => self.should_quit = true,
            edit => {
                // cursor moves go through the editor too but leave the diff alone
                if self.focused_mut().apply(&edit) {
                    self.recompute();
                }
            }
        }
    }
}

/// Count the visual lines produced by rendering segments in sequence
fn visual_lines<'a>(segments: impl Iterator<Item = &'a DiffSegment>) -> usize {
    let mut lines = 0;
    let mut open = false;
    for segment in segments {
        for ch in segment.value.chars() {
            if ch == '\n' {
                lines += 1;
                open = false;
            } else {
                open = true;
            }
        }
    }
    if open {
        lines += 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffAlgorithmType, RowStatus, SegmentKind};

    fn state(original: &str, modified: &str) -> AppState {
        AppState::default().with_texts(original, modified)
    }

    #[test]
    fn test_rows_only_computed_in_aligned_mode() {
        let mut state = state("a\nb\nc", "a\nx\nc");
        assert_eq!(state.view_mode, ViewMode::Inline);
        assert!(state.rows().is_empty());

        state.apply(AppEvent::CycleViewMode);
        assert_eq!(state.view_mode, ViewMode::Split);
        assert!(state.rows().is_empty());

        state.apply(AppEvent::CycleViewMode);
        assert_eq!(state.view_mode, ViewMode::SplitAligned);
        assert_eq!(state.rows().len(), 3);
        assert_eq!(state.rows()[1], AlignedRow::new("b", "x", RowStatus::Modified));

        state.apply(AppEvent::CycleViewMode);
        assert_eq!(state.view_mode, ViewMode::Inline);
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_granularity_only_affects_inline() {
        let mut state = state("Hello World", "Hello Code");
        assert_eq!(state.effective_granularity(), Granularity::Char);
        assert!(state
            .segments()
            .iter()
            .any(|s| s.kind == SegmentKind::Unchanged && s.value.starts_with("Hello")));

        state.apply(AppEvent::CycleViewMode);
        assert_eq!(state.granularity, Granularity::Char);
        assert_eq!(state.effective_granularity(), Granularity::Line);
        assert!(state.segments().iter().all(|s| s.kind != SegmentKind::Unchanged));

        state.apply(AppEvent::ToggleGranularity);
        assert_eq!(state.granularity, Granularity::Line);
        assert_eq!(state.effective_granularity(), Granularity::Line);
    }

    #[test]
    fn test_typing_recomputes() {
        let mut state = state("abc", "abc");
        assert!(state.stats().is_identical());

        state.apply(AppEvent::FocusNext);
        state.apply(AppEvent::Insert('d'));

        assert_eq!(state.modified.text(), "abcd");
        assert_eq!(state.original.text(), "abc");
        assert!(!state.stats().is_identical());
        assert!(state.segments().iter().any(|s| s.kind == SegmentKind::Added && s.value == "d"));
    }

    #[test]
    fn test_paste_and_clear() {
        let mut state = AppState::default();
        state.apply(AppEvent::Paste("one\ntwo".to_string()));
        assert_eq!(state.original.text(), "one\ntwo");
        assert_eq!(state.stats().lines_removed, 2);

        state.apply(AppEvent::ClearPane);
        assert!(state.original.is_empty());
        assert!(state.segments().is_empty());
    }

    #[test]
    fn test_crlf_seed_is_normalized() {
        let state = state("a\r\nb\r\n", "a\nb\n");
        assert_eq!(state.original.text(), "a\nb\n");
        assert!(state.stats().is_identical());
    }

    #[test]
    fn test_cursor_events_leave_diff_alone() {
        let mut state = state("abc", "abd");
        let before = state.segments().to_vec();

        state.apply(AppEvent::CursorLeft);
        state.apply(AppEvent::CursorHome);
        assert_eq!(state.original.cursor(), (0, 0));
        assert_eq!(state.segments(), before.as_slice());

        state.apply(AppEvent::Insert('x'));
        assert_eq!(state.original.text(), "xabc");
        assert_ne!(state.segments(), before.as_slice());
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let text: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let mut state = state(&text, "");
        assert_eq!(state.content_height(), 30);

        state.apply(AppEvent::ScrollDown);
        assert_eq!(state.scroll_offset, 10);
        state.scroll_down(100);
        assert_eq!(state.scroll_offset, 29);
        state.apply(AppEvent::ScrollTop);
        assert_eq!(state.scroll_offset, 0);
        state.apply(AppEvent::ScrollBottom);
        assert_eq!(state.scroll_offset, 29);

        state.apply(AppEvent::ClearPane);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_split_height_is_longer_column() {
        let mut state = state("a\n", "a\nb\nc\n");
        state.apply(AppEvent::CycleViewMode);

        assert_eq!(state.view_mode, ViewMode::Split);
        assert_eq!(state.content_height(), 3);
    }

    #[test]
    fn test_quit_and_help() {
        let mut state = AppState::default();
        state.apply(AppEvent::ToggleHelp);
        assert!(state.show_help);
        state.apply(AppEvent::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_config_selects_algorithm() {
        let mut config = DiffDeskConfig::default();
        config.diff.algorithm = DiffAlgorithmType::Patience;
        config.ui.view_mode = ViewMode::SplitAligned;

        let state = AppState::with_config(&config).with_texts("a", "b");
        assert_eq!(state.algorithm_name(), "Patience");
        assert_eq!(state.rows(), &[AlignedRow::new("a", "b", RowStatus::Modified)]);
    }

    #[test]
    fn test_visual_lines() {
        let segments = vec![DiffSegment::unchanged("a\nb"), DiffSegment::added("c\n")];
        assert_eq!(visual_lines(segments.iter()), 2);
        assert_eq!(visual_lines(std::iter::empty()), 0);
    }
}
