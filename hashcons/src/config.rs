use serde::{Deserialize, Serialize};

/// Sizing parameters for a new interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternerConfig {
    /// Expected number of unique entries; the initial bucket count is the
    /// next prime at or above it.
    pub expected_entries: usize,
}

impl Default for InternerConfig {
    fn default() -> Self {
        Self {
            expected_entries: 16,
        }
    }
}

impl InternerConfig {
    pub fn with_expected_entries(mut self, expected_entries: usize) -> Self {
        self.expected_entries = expected_entries;
        self
    }
}
