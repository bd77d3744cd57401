//! Search statistics for diagnostics and pruning comparisons.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited (terminal and interior).
    pub nodes: u64,

    /// Terminal states evaluated via `utility`.
    pub terminals: u64,

    /// Alpha/beta cutoffs taken. Always zero for plain minimax.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// States visited that were not terminal.
    #[must_use]
    pub fn interior(&self) -> u64 {
        self.nodes - self.terminals
    }
}
