use super::algorithms::{split_lines, DiffSegment, SegmentKind};

/// Line-level statistics about a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub lines_added: usize,
    pub lines_removed: usize,
    /// Lines the row aligner pairs into modified rows
    pub lines_modified: usize,
    pub lines_unchanged: usize,
}

impl DiffStats {
    /// Compute statistics from a line-granularity segment sequence
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = Self::default();
        let mut pending_removed: Option<usize> = None;

        for segment in segments {
            let count = split_lines(&segment.value).len();
            match segment.kind {
                SegmentKind::Unchanged => {
                    stats.lines_unchanged += count;
                    pending_removed = None;
                }
                SegmentKind::Removed => {
                    stats.lines_removed += count;
                    pending_removed = Some(count);
                }
                SegmentKind::Added => {
                    stats.lines_added += count;
                    if let Some(removed) = pending_removed.take() {
                        stats.lines_modified += removed.min(count);
                    }
                }
            }
        }

        stats
    }

    pub fn total_changes(&self) -> usize {
        self.lines_added + self.lines_removed
    }

    pub fn is_identical(&self) -> bool {
        self.total_changes() == 0
    }

    /// Human readable one-line summary
    pub fn summary(&self) -> String {
        if self.is_identical() {
            return "No changes".to_string();
        }

        let mut parts = Vec::new();

        if self.lines_added > 0 {
            parts.push(format!("{} insertion{}",
                self.lines_added,
                if self.lines_added == 1 { "" } else { "s" }
            ));
        }

        if self.lines_removed > 0 {
            parts.push(format!("{} deletion{}",
                self.lines_removed,
                if self.lines_removed == 1 { "" } else { "s" }
            ));
        }

        parts.join(", ")
    }
}
