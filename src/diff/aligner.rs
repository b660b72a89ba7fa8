//! Row alignment for side-by-side display
//!
//! Reconciles a line-granularity segment stream into paired left/right rows.
//! A removed group immediately followed by an added group is paired
//! positionally into modified rows; everything else maps one line to one row.

use super::algorithms::{split_lines, DiffSegment, SegmentKind};

/// Status of one aligned row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowStatus {
    Added,
    Removed,
    Unchanged,
    Modified,
}

/// One visual line pair, possibly empty on one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub left: String,
    pub right: String,
    pub status: RowStatus,
}

impl AlignedRow {
    pub fn new(left: impl Into<String>, right: impl Into<String>, status: RowStatus) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            status,
        }
    }

    fn unchanged(line: &str) -> Self {
        Self::new(line, line, RowStatus::Unchanged)
    }

    fn removed(line: &str) -> Self {
        Self::new(line, "", RowStatus::Removed)
    }

    fn added(line: &str) -> Self {
        Self::new("", line, RowStatus::Added)
    }

    fn is_blank_unchanged(&self) -> bool {
        self.status == RowStatus::Unchanged && self.left.is_empty() && self.right.is_empty()
    }
}

/// Align a line-granularity segment sequence into rows.
///
/// Total over its input: an empty sequence yields no rows.
pub fn align(segments: &[DiffSegment]) -> Vec<AlignedRow> {
    let mut rows = Vec::new();
    let mut index = 0;

    while index < segments.len() {
        let segment = &segments[index];
        let lines = split_lines(&segment.value);

        match segment.kind {
            SegmentKind::Unchanged => {
                rows.extend(lines.into_iter().map(AlignedRow::unchanged));
            }
            SegmentKind::Removed => {
                match segments.get(index + 1) {
                    Some(next) if next.kind == SegmentKind::Added => {
                        pair_group(&lines, &split_lines(&next.value), &mut rows);
                        // the added half of the group is consumed here
                        index += 1;
                    }
                    _ => rows.extend(lines.into_iter().map(AlignedRow::removed)),
                }
            }
            SegmentKind::Added => {
                rows.extend(lines.into_iter().map(AlignedRow::added));
            }
        }

        index += 1;
    }

    preserve_blank_runs(rows)
}

fn pair_group(removed: &[&str], added: &[&str], rows: &mut Vec<AlignedRow>) {
    let count = removed.len().max(added.len());
    for i in 0..count {
        let row = match (removed.get(i), added.get(i)) {
            (Some(left), Some(right)) => AlignedRow::new(*left, *right, RowStatus::Modified),
            (Some(left), None) => AlignedRow::removed(left),
            (None, Some(right)) => AlignedRow::added(right),
            (None, None) => break,
        };
        rows.push(row);
    }
}

/// Re-emit maximal runs of blank unchanged rows as they are, so blank-line
/// runs are never merged or dropped by later filtering.
fn preserve_blank_runs(rows: Vec<AlignedRow>) -> Vec<AlignedRow> {
    let mut output = Vec::with_capacity(rows.len());
    let mut run: Vec<AlignedRow> = Vec::new();

    for row in rows {
        if row.is_blank_unchanged() {
            run.push(row);
            continue;
        }
        output.append(&mut run);
        output.push(row);
    }
    output.append(&mut run);

    output
}
