use super::algorithms::{DiffAlgorithm, DiffAlgorithmType, DiffSegment, Granularity};

/// High-level diff generator that can use different algorithms
pub struct DiffGenerator {
    algorithm: Box<dyn DiffAlgorithm>,
}

impl DiffGenerator {
    /// Create a new diff generator with the specified algorithm
    pub fn new(algorithm_type: DiffAlgorithmType) -> Self {
        Self {
            algorithm: algorithm_type.create(),
        }
    }

    /// Compute the segment sequence between old and new content
    pub fn compute(&self, old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment> {
        self.algorithm.diff(old, new, granularity)
    }

    /// Get the current algorithm name
    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Get the current algorithm description
    pub fn algorithm_description(&self) -> &str {
        self.algorithm.description()
    }
}

impl Default for DiffGenerator {
    fn default() -> Self {
        Self::new(DiffAlgorithmType::default())
    }
}
