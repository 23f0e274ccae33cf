//! Treeviz - directory tree visualizer: terminal tree, nested JSON, Graphviz PNG

pub mod error;
pub mod output;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod tree;

pub use error::{Result, TreevizError};
pub use output::{build_graph, to_json, write_json, DotBackend, GraphBackend, TreeFormatter};
pub use tree::{TreeNode, TreeWalker, WalkWarning, WalkerConfig};
