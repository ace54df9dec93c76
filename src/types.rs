use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub icons_dir: PathBuf,
}

/// Outcome of stripping a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Pixels that were turned transparent.
    pub stripped: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}
