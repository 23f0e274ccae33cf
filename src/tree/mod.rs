//! Directory tree walking logic
//!
//! `TreeWalker` builds the full tree in memory in one pass; all three
//! renderers consume the same immutable result.

mod config;
mod node;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use node::TreeNode;
pub use walker::{TreeWalker, WalkWarning};
