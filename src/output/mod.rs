//! Output formatting for the tree model
//!
//! Three independent passes over the same `TreeNode`: text to the terminal,
//! nested JSON to a file, and a Graphviz PNG. None of them mutate the model
//! and no pass depends on another.

mod graph;
mod json;
mod tree;

// Re-export public types
pub use graph::{build_graph, DotBackend, GraphBackend};
pub use json::{to_json, write_json};
pub use tree::TreeFormatter;
