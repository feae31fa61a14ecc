/// Ranges of at most this many elements are sorted on the current thread
/// instead of spawning two more tasks.
pub const THRESHOLD: usize = 2048;
/// Ranges of at most this many elements are finished with insertion sort.
pub const BASE_CASE: usize = 16;
/// Tasks deeper than this finish their range sequentially. Random input
/// stays far below it; presorted input would otherwise nest one scope per
/// element.
pub const MAX_DEPTH: usize = 128;
/// Hard ceiling on the spawning depth. Every level nests a rayon scope on
/// one worker stack, so deeper levels always fall back to the sequential
/// path, whose stack stays constant. Applies to every `SortConfig`.
pub const STACK_SAFE_DEPTH: usize = 256;

pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_COUNT: usize = 1_000_000;
pub const DEFAULT_INPUT: &str = "random_numbers.csv";
pub const DEFAULT_OUTPUT: &str = "out1m.csv";

const _: () = {
    assert!(BASE_CASE >= 1, "BASE_CASE must be at least 1");
    assert!(THRESHOLD >= BASE_CASE, "THRESHOLD must not be smaller than BASE_CASE");
    assert!(MAX_DEPTH <= STACK_SAFE_DEPTH, "MAX_DEPTH must not exceed STACK_SAFE_DEPTH");
};

/// Runtime knobs for the concurrent sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Largest range sorted sequentially. `0` spawns two tasks for every
    /// partition that leaves anything to sort.
    pub threshold: usize,
    /// Deepest recursion level that still spawns tasks, capped at
    /// `STACK_SAFE_DEPTH`.
    pub max_depth: usize,
}

impl SortConfig {
    pub fn new(threshold: usize) -> Self {
        SortConfig { threshold, max_depth: MAX_DEPTH }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        SortConfig { max_depth: max_depth.min(STACK_SAFE_DEPTH), ..self }
    }

    /// Fan out on every partition, no size cutoff. Only recursion past
    /// `STACK_SAFE_DEPTH` levels, which random input never reaches, is
    /// finished sequentially.
    pub fn unbounded() -> Self {
        SortConfig { threshold: 0, max_depth: STACK_SAFE_DEPTH }
    }

    pub(crate) fn is_sequential(&self, len: usize, level: usize) -> bool {
        len <= self.threshold || level > self.max_depth.min(STACK_SAFE_DEPTH)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig::new(THRESHOLD)
    }
}
