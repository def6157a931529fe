//! Run configuration

/// Configuration for one pairing run.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Desired parallelism; also the number of chunks the population is split
    /// into (effectively clamped to the population size at partition time).
    pub workers: usize,
    /// Rejected-draw budget per dwarf; `None` uses the matcher's default,
    /// which scales with chunk size.
    pub max_attempts: Option<usize>,
}

impl GameConfig {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_parallelism())
    }
}

/// Number of workers to use when the caller does not say.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
