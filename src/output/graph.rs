//! Graph rendering through Graphviz
//!
//! The tree becomes a directed graph with one node per entry and one edge
//! per parent-child pair, built against a small backend trait so the layout
//! engine stays swappable. `DotBackend` accumulates DOT source and shells
//! out to Graphviz via the `graphviz-rust` wrapper to rasterize a PNG.

use std::path::Path;

use graphviz_rust::cmd::{CommandArg, Format};

use crate::error::{Result, TreevizError};
use crate::tree::TreeNode;

/// Minimal surface a graph layout backend must provide.
pub trait GraphBackend {
    fn add_node(&mut self, id: &str, label: &str);
    fn add_edge(&mut self, parent_id: &str, child_id: &str);
    fn render_to_file(&self, path: &Path) -> Result<()>;
}

/// Add one node per tree entry and one edge per parent-child pair.
///
/// Node ids are slash-joined paths from the root, so files sharing a name
/// in different directories stay distinct; labels carry only the base name.
pub fn build_graph(root: &TreeNode, root_label: &str, backend: &mut dyn GraphBackend) {
    backend.add_node(root_label, root_label);
    add_children(root.children(), root_label, backend);
}

fn add_children(children: &[TreeNode], parent_id: &str, backend: &mut dyn GraphBackend) {
    for child in children {
        let child_id = format!("{}/{}", parent_id, child.name());
        backend.add_node(&child_id, child.name());
        backend.add_edge(parent_id, &child_id);
        if let TreeNode::Dir { children, .. } = child {
            add_children(children, &child_id, backend);
        }
    }
}

/// Backend that accumulates a DOT digraph and rasterizes it with Graphviz.
pub struct DotBackend {
    lines: Vec<String>,
}

impl DotBackend {
    pub fn new() -> Self {
        Self {
            lines: vec!["digraph tree {".to_string(), "    rankdir=TB;".to_string()],
        }
    }

    /// The DOT source accumulated so far, as a complete digraph.
    pub fn dot_source(&self) -> String {
        let mut source = self.lines.join("\n");
        source.push_str("\n}\n");
        source
    }
}

impl Default for DotBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

impl GraphBackend for DotBackend {
    fn add_node(&mut self, id: &str, label: &str) {
        self.lines.push(format!(
            "    {} [label={}, shape=box];",
            quote(id),
            quote(label)
        ));
    }

    fn add_edge(&mut self, parent_id: &str, child_id: &str) {
        self.lines
            .push(format!("    {} -> {};", quote(parent_id), quote(child_id)));
    }

    fn render_to_file(&self, path: &Path) -> Result<()> {
        graphviz_rust::exec_dot(
            self.dot_source(),
            vec![
                Format::Png.into(),
                CommandArg::Output(path.display().to_string()),
            ],
        )
        .map_err(|e| TreevizError::RenderFailed(e.to_string()))?;
        Ok(())
    }
}
