//! Profiling configuration.

/// Seed used for row sampling when none is given.
pub const DEFAULT_SEED: u64 = 2018;

/// Longest categorical value kept before truncation.
pub const DEFAULT_MAX_VALUE_LEN: usize = 50;

/// Options controlling a profiling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Rows to sample before profiling; `None` profiles the whole table.
    pub sample_size: Option<usize>,
    /// Seed for the row sample.
    pub seed: u64,
    /// Worker threads; `None` uses one per CPU.
    pub workers: Option<usize>,
    /// Categorical values longer than this are truncated with `...`.
    pub max_value_len: usize,
    /// Build contingency tables between binary variables.
    pub confusion_matrices: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            sample_size: None,
            seed: DEFAULT_SEED,
            workers: None,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            confusion_matrices: true,
        }
    }
}

impl ProfileOptions {
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: Option<usize>) -> Self {
        self.sample_size = sample_size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the worker count. Zero is treated as "use the default".
    #[must_use]
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers.filter(|&n| n > 0);
        self
    }

    #[must_use]
    pub fn with_max_value_len(mut self, max_value_len: usize) -> Self {
        self.max_value_len = max_value_len;
        self
    }

    #[must_use]
    pub fn with_confusion_matrices(mut self, enabled: bool) -> Self {
        self.confusion_matrices = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ProfileOptions::default();
        assert_eq!(options.seed, 2018);
        assert_eq!(options.sample_size, None);
        assert_eq!(options.max_value_len, 50);
        assert!(options.confusion_matrices);
    }

    #[test]
    fn test_zero_workers_means_default() {
        let options = ProfileOptions::default().with_workers(Some(0));
        assert_eq!(options.workers, None);
        let options = ProfileOptions::default().with_workers(Some(4));
        assert_eq!(options.workers, Some(4));
    }
}
