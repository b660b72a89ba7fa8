use similar::{Algorithm, ChangeTag, TextDiff};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Trait defining a diff algorithm interface
pub trait DiffAlgorithm: Send + Sync {
    /// Generate the segment sequence between old and new content
    fn diff(&self, old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment>;

    /// Get the algorithm name
    fn name(&self) -> &'static str;

    /// Get algorithm description
    fn description(&self) -> &'static str;
}

/// How a segment relates the two inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Added,
    Removed,
    Unchanged,
}

/// A maximal run of text marked uniformly added, removed or unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub value: String,
    pub kind: SegmentKind,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, value: impl Into<String>) -> Self {
        Self { value: value.into(), kind }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, value)
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, value)
    }

    pub fn unchanged(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, value)
    }

    /// True when the segment belongs to the original (left) text
    pub fn in_original(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Removed)
    }

    /// True when the segment belongs to the modified (right) text
    pub fn in_modified(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Added)
    }
}

/// Unit of comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Character-by-character comparison
    #[default]
    Char,
    /// Whole-line comparison
    Line,
}

impl Granularity {
    pub fn toggle(self) -> Self {
        match self {
            Self::Char => Self::Line,
            Self::Line => Self::Char,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Line => "Line",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Split text into lines on `\n`, discarding the empty artifact left by a
/// terminating separator. Empty input has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Myers diff algorithm implementation
pub struct MyersAlgorithm;

impl DiffAlgorithm for MyersAlgorithm {
    fn diff(&self, old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment> {
        collect_segments(Algorithm::Myers, old, new, granularity)
    }

    fn name(&self) -> &'static str {
        "Myers"
    }

    fn description(&self) -> &'static str {
        "Myers' O(ND) diff algorithm - fast and widely used"
    }
}

/// Patience diff algorithm implementation
pub struct PatienceAlgorithm;

impl DiffAlgorithm for PatienceAlgorithm {
    fn diff(&self, old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment> {
        collect_segments(Algorithm::Patience, old, new, granularity)
    }

    fn name(&self) -> &'static str {
        "Patience"
    }

    fn description(&self) -> &'static str {
        "Patience diff - better for refactored code with moved blocks"
    }
}

/// LCS (Longest Common Subsequence) diff algorithm
pub struct LcsAlgorithm;

impl DiffAlgorithm for LcsAlgorithm {
    fn diff(&self, old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment> {
        collect_segments(Algorithm::Lcs, old, new, granularity)
    }

    fn name(&self) -> &'static str {
        "LCS"
    }

    fn description(&self) -> &'static str {
        "Longest Common Subsequence - produces minimal diffs"
    }
}

fn collect_segments(
    algorithm: Algorithm,
    old: &str,
    new: &str,
    granularity: Granularity,
) -> Vec<DiffSegment> {
    match granularity {
        Granularity::Char => char_segments(algorithm, old, new),
        Granularity::Line => line_segments(algorithm, old, new),
    }
}

/// Accumulates changes into maximal same-kind segments
#[derive(Default)]
struct SegmentCollector {
    segments: Vec<DiffSegment>,
}

impl SegmentCollector {
    fn push(&mut self, kind: SegmentKind, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(text),
            _ => self.segments.push(DiffSegment::new(kind, text)),
        }
    }

    fn finish(self) -> Vec<DiffSegment> {
        self.segments
    }
}

fn kind_of(tag: ChangeTag) -> SegmentKind {
    match tag {
        ChangeTag::Equal => SegmentKind::Unchanged,
        ChangeTag::Insert => SegmentKind::Added,
        ChangeTag::Delete => SegmentKind::Removed,
    }
}

fn char_segments(algorithm: Algorithm, old: &str, new: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::configure()
        .algorithm(algorithm)
        .diff_chars(old, new);

    let mut collector = SegmentCollector::default();
    for change in diff.iter_all_changes() {
        collector.push(kind_of(change.tag()), change.value());
    }
    collector.finish()
}

/// Lines of one input plus whether its final line carries a terminator
struct LineSource<'a> {
    lines: Vec<&'a str>,
    terminated: bool,
}

impl<'a> LineSource<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
            terminated: text.ends_with('\n'),
        }
    }

    fn has_terminator(&self, index: usize) -> bool {
        index + 1 < self.lines.len() || self.terminated
    }
}

// Lines are compared without their terminators, so a final line missing its
// newline still matches the same line followed by more text.
fn line_segments(algorithm: Algorithm, old: &str, new: &str) -> Vec<DiffSegment> {
    let old_src = LineSource::new(old);
    let new_src = LineSource::new(new);

    let diff = TextDiff::configure()
        .algorithm(algorithm)
        .diff_slices(old_src.lines.as_slice(), new_src.lines.as_slice());

    let mut collector = SegmentCollector::default();
    for change in diff.iter_all_changes() {
        let terminated = match change.tag() {
            ChangeTag::Delete => change.old_index().map_or(false, |i| old_src.has_terminator(i)),
            ChangeTag::Insert => change.new_index().map_or(false, |i| new_src.has_terminator(i)),
            ChangeTag::Equal => {
                change.old_index().map_or(false, |i| old_src.has_terminator(i))
                    || change.new_index().map_or(false, |i| new_src.has_terminator(i))
            }
        };

        let kind = kind_of(change.tag());
        let value: &str = change.value();
        if terminated {
            collector.push(kind, &format!("{}\n", value));
        } else {
            collector.push(kind, value);
        }
    }
    collector.finish()
}

/// Available diff algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithmType {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl DiffAlgorithmType {
    pub fn all() -> &'static [DiffAlgorithmType] {
        &[Self::Myers, Self::Patience, Self::Lcs]
    }

    pub fn create(&self) -> Box<dyn DiffAlgorithm> {
        match self {
            Self::Myers => Box::new(MyersAlgorithm),
            Self::Patience => Box::new(PatienceAlgorithm),
            Self::Lcs => Box::new(LcsAlgorithm),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Myers => "Myers",
            Self::Patience => "Patience",
            Self::Lcs => "LCS",
        }
    }
}

impl std::fmt::Display for DiffAlgorithmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[DiffSegment], keep: impl Fn(&DiffSegment) -> bool) -> String {
        segments
            .iter()
            .filter(|s| keep(*s))
            .map(|s| s.value.as_str())
            .collect()
    }

    #[test]
    fn test_split_lines_drops_terminator_artifact() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_line_diff_segments() {
        let segments = MyersAlgorithm.diff("a\nb\nc", "a\nx\nc", Granularity::Line);

        assert_eq!(
            segments,
            vec![
                DiffSegment::unchanged("a\n"),
                DiffSegment::removed("b\n"),
                DiffSegment::added("x\n"),
                DiffSegment::unchanged("c"),
            ]
        );
    }

    #[test]
    fn test_line_diff_ignores_missing_final_newline() {
        let segments = MyersAlgorithm.diff("a\nb", "a\nb\nc", Granularity::Line);

        assert_eq!(
            segments,
            vec![DiffSegment::unchanged("a\nb\n"), DiffSegment::added("c")]
        );
    }

    #[test]
    fn test_char_diff_reconstructs_inputs() {
        let old = "Hello World";
        let new = "Hello Code";

        for algorithm in DiffAlgorithmType::all() {
            let segments = algorithm.create().diff(old, new, Granularity::Char);
            assert_eq!(concat(&segments, DiffSegment::in_original), old);
            assert_eq!(concat(&segments, DiffSegment::in_modified), new);
            assert!(segments.iter().any(|s| s.kind == SegmentKind::Removed));
            assert!(segments.iter().any(|s| s.kind == SegmentKind::Added));
        }
    }

    #[test]
    fn test_segments_are_maximal() {
        let segments = PatienceAlgorithm.diff("one\ntwo\nthree\n", "uno\ndos\nthree\n", Granularity::Line);

        for pair in segments.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(LcsAlgorithm.diff("", "", Granularity::Line).is_empty());
        assert!(LcsAlgorithm.diff("", "", Granularity::Char).is_empty());
        assert_eq!(
            LcsAlgorithm.diff("", "new\n", Granularity::Line),
            vec![DiffSegment::added("new\n")]
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(DiffAlgorithmType::Myers.create().name(), "Myers");
        assert_eq!(DiffAlgorithmType::Lcs.to_string(), "LCS");
        assert_eq!(DiffAlgorithmType::default(), DiffAlgorithmType::Myers);
    }

    #[test]
    fn test_granularity_toggle() {
        assert_eq!(Granularity::Char.toggle(), Granularity::Line);
        assert_eq!(Granularity::Line.toggle(), Granularity::Char);
    }
}
