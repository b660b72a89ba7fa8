//! Diff computation and row alignment
//!
//! Segment generation wraps the `similar` crate behind the `DiffAlgorithm`
//! trait; the aligner turns line segments into side-by-side rows.

pub mod algorithms;
pub mod aligner;
pub mod generator;
pub mod stats;

// Re-export the main types for easier use
pub use algorithms::{
    split_lines, DiffAlgorithm, DiffAlgorithmType, DiffSegment, Granularity, SegmentKind,
    LcsAlgorithm, MyersAlgorithm, PatienceAlgorithm,
};
pub use aligner::{align, AlignedRow, RowStatus};
pub use generator::DiffGenerator;
pub use stats::DiffStats;
