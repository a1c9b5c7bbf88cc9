/// Tuning knobs for [`MiniMax`](super::MiniMax).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    /// Plies searched below the root; values below 1 are treated as 1.
    pub depth: u32,
    /// Worker threads for the root moves; 1 searches on the caller's thread.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 4,
            threads: 1,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}
