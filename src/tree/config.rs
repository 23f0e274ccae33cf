//! Configuration types for tree walking

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose names start with a dot.
    pub show_hidden: bool,
    /// Depth below which directories are listed but not explored.
    /// Entries of the root are at depth 1, so `Some(0)` lists the root's
    /// entries without descending into any of them.
    pub max_depth: Option<usize>,
}
