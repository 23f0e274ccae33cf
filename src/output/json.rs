//! Nested key-value JSON output
//!
//! Files map to `null`, directories to an object of their children. The
//! root's own name is not a key: the top-level object holds the root's
//! children directly. That asymmetry matches the historical output format
//! and is kept for compatibility.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, TreevizError};
use crate::tree::TreeNode;

/// Serialize the tree to its nested-mapping form, root unwrapped.
pub fn to_json(root: &TreeNode) -> Value {
    Value::Object(children_to_map(root.children()))
}

fn children_to_map(children: &[TreeNode]) -> Map<String, Value> {
    let mut map = Map::new();
    for child in children {
        let value = match child {
            TreeNode::File { .. } => Value::Null,
            TreeNode::Dir { children, .. } => Value::Object(children_to_map(children)),
        };
        map.insert(child.name().to_string(), value);
    }
    map
}

/// Write the pretty-printed serialization to `path` as UTF-8.
pub fn write_json(root: &TreeNode, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(&to_json(root)).map_err(|e| {
        TreevizError::WriteFailed {
            path: path.to_path_buf(),
            source: e.into(),
        }
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|e| TreevizError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
