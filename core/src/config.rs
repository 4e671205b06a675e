/// Tuning knobs for [`PathEngine`](crate::PathEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Run per-root sweeps on the rayon pool during `precompute`.
    pub parallel: bool,
    /// Minimum vertex count before sweeps go parallel.
    pub parallel_threshold: usize,
    /// Precompute refuses to start when the graph's approximate memory use
    /// exceeds this many megabytes.
    pub max_memory_mb: usize,
}

impl EngineConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// True if a precompute over `vertex_count` vertices should use rayon.
    pub fn use_parallel(&self, vertex_count: usize) -> bool {
        self.parallel && vertex_count >= self.parallel_threshold
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 256,
            max_memory_mb: 4096,
        }
    }
}
