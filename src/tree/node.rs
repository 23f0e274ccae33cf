//! In-memory tree model shared by all renderers

/// One filesystem entry. Directories own their children by value; children
/// are sorted by file name so every renderer is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count (directories, files) beneath this node, excluding the node itself.
    pub fn count_entries(&self) -> (usize, usize) {
        let mut dirs = 0;
        let mut files = 0;
        for child in self.children() {
            if child.is_dir() {
                dirs += 1;
                let (d, f) = child.count_entries();
                dirs += d;
                files += f;
            } else {
                files += 1;
            }
        }
        (dirs, files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_have_no_children() {
        let node = TreeNode::file("a.txt");
        assert!(!node.is_dir());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_count_entries_nested() {
        let tree = TreeNode::dir(
            "root",
            vec![
                TreeNode::file("a.txt"),
                TreeNode::dir(
                    "b",
                    vec![TreeNode::file("c.txt"), TreeNode::dir("d", vec![])],
                ),
            ],
        );
        let (dirs, files) = tree.count_entries();
        assert_eq!(dirs, 2, "b and d");
        assert_eq!(files, 2, "a.txt and c.txt");
    }
}
