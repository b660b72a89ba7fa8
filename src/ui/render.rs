//! Pure mapping from diff data to styled lines
//!
//! Nothing here touches the terminal; the TUI lays the returned lines out.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use crate::core::ViewMode;
use crate::diff::{AlignedRow, DiffSegment, RowStatus, SegmentKind};
use super::styles;

/// Two columns of visual lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitColumns {
    pub left: Vec<Line<'static>>,
    pub right: Vec<Line<'static>>,
}

/// Output of the renderer for one view mode
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    Inline(Vec<Line<'static>>),
    Columns(SplitColumns),
}

impl RenderedView {
    /// Height in visual lines; for columns, the longer one
    pub fn height(&self) -> usize {
        match self {
            Self::Inline(lines) => lines.len(),
            Self::Columns(columns) => columns.left.len().max(columns.right.len()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_markers: true }
    }
}

/// Style of an inline span, a pure function of the segment kind
pub fn segment_style(kind: SegmentKind) -> Style {
    match kind {
        SegmentKind::Added => styles::add_style(),
        SegmentKind::Removed => styles::del_style(),
        SegmentKind::Unchanged => styles::neutral_style(),
    }
}

/// Left and right cell styles for an aligned row
pub fn row_styles(status: RowStatus) -> (Style, Style) {
    match status {
        RowStatus::Unchanged => (styles::neutral_style(), styles::neutral_style()),
        RowStatus::Modified => (styles::modified_style(), styles::modified_style()),
        RowStatus::Added => (styles::neutral_style(), styles::add_style()),
        RowStatus::Removed => (styles::del_style(), styles::neutral_style()),
    }
}

fn row_markers(status: RowStatus) -> (&'static str, &'static str) {
    match status {
        RowStatus::Unchanged => (" ", " "),
        RowStatus::Modified => ("~", "~"),
        RowStatus::Added => (" ", "+"),
        RowStatus::Removed => ("-", " "),
    }
}

/// Render segments in order as styled spans, breaking visual lines at `\n`.
///
/// A blank line inside a changed segment gets a single styled space so the
/// change stays visible.
pub fn render_inline<'a>(segments: impl IntoIterator<Item = &'a DiffSegment>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = segment_style(segment.kind);
        let pieces: Vec<&str> = segment.value.split('\n').collect();
        let last = pieces.len() - 1;

        for (idx, piece) in pieces.into_iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            if !piece.is_empty() {
                spans.push(Span::styled(piece.to_string(), style));
            } else if idx < last && spans.is_empty() && segment.kind != SegmentKind::Unchanged {
                spans.push(Span::styled(" ", style));
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

/// Unaligned split: original text on the left, modified text on the right
pub fn render_split(segments: &[DiffSegment]) -> SplitColumns {
    SplitColumns {
        left: render_inline(segments.iter().filter(|s| s.in_original())),
        right: render_inline(segments.iter().filter(|s| s.in_modified())),
    }
}

/// Aligned split: one visual row per aligned row
pub fn render_aligned(rows: &[AlignedRow], options: RenderOptions) -> SplitColumns {
    let mut columns = SplitColumns::default();

    for row in rows {
        let (left_style, right_style) = row_styles(row.status);
        let (left_marker, right_marker) = row_markers(row.status);

        columns.left.push(cell(&row.left, left_marker, left_style, options));
        columns.right.push(cell(&row.right, right_marker, right_style, options));
    }

    columns
}

fn cell(text: &str, marker: &'static str, style: Style, options: RenderOptions) -> Line<'static> {
    let mut spans = Vec::with_capacity(2);
    if options.show_markers {
        let marker_style = if marker == " " { styles::gutter_style() } else { style };
        spans.push(Span::styled(format!("{} ", marker), marker_style));
    }
    if !text.is_empty() {
        spans.push(Span::styled(text.to_string(), style));
    }
    Line::from(spans)
}

/// Render the view for the given mode.
///
/// `segments` must already be at the granularity the mode uses; `rows` is
/// only read in the aligned mode.
pub fn render(
    segments: &[DiffSegment],
    rows: &[AlignedRow],
    mode: ViewMode,
    options: RenderOptions,
) -> RenderedView {
    match mode {
        ViewMode::Inline => RenderedView::Inline(render_inline(segments)),
        ViewMode::Split => RenderedView::Columns(render_split(segments)),
        ViewMode::SplitAligned => RenderedView::Columns(render_aligned(rows, options)),
    }
}
