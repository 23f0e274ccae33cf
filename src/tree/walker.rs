//! TreeWalker - builds the full tree in memory

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreevizError};

use super::config::WalkerConfig;
use super::node::TreeNode;

/// Warning raised during a walk and recovered locally, so one unreadable
/// subdirectory does not invalidate the rest of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkWarning {
    /// Directory could not be listed; recorded as an empty directory.
    PermissionDenied(PathBuf),
    /// A single entry of this directory could not be read and was skipped.
    UnreadableEntry(PathBuf),
}

impl fmt::Display for WalkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkWarning::PermissionDenied(path) => {
                write!(f, "cannot list '{}': permission denied", path.display())
            }
            WalkWarning::UnreadableEntry(dir) => {
                write!(f, "skipped an unreadable entry in '{}'", dir.display())
            }
        }
    }
}

/// Tree walker that builds the full tree in memory.
///
/// Entries are sorted by file name before descending, which makes the
/// output of every renderer deterministic and reproducible in tests.
pub struct TreeWalker {
    config: WalkerConfig,
    warnings: Vec<WalkWarning>,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    /// Warnings collected during the most recent `walk` call.
    pub fn warnings(&self) -> &[WalkWarning] {
        &self.warnings
    }

    /// Walk `root` and return the tree model.
    ///
    /// Fails only on a bad root; unreadable subdirectories below it are
    /// recorded as empty directories and reported via [`Self::warnings`].
    pub fn walk(&mut self, root: &Path) -> Result<TreeNode> {
        if !root.exists() {
            return Err(TreevizError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(TreevizError::NotADirectory(root.to_path_buf()));
        }
        self.warnings.clear();

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let children = self.walk_children(root, 1)?;
        Ok(TreeNode::Dir { name, children })
    }

    fn walk_children(&mut self, dir: &Path, depth: usize) -> Result<Vec<TreeNode>> {
        let reader = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                self.warnings
                    .push(WalkWarning::PermissionDenied(dir.to_path_buf()));
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for entry in reader {
            match entry {
                Ok(e) => entries.push(e),
                // An entry that cannot be read is skipped, but never silently
                Err(_) => self
                    .warnings
                    .push(WalkWarning::UnreadableEntry(dir.to_path_buf())),
            }
        }
        entries.sort_by_key(|e| e.file_name());

        let mut children = Vec::new();
        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.show_hidden && name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if path.is_dir() {
                let at_cutoff = self.config.max_depth.is_some_and(|max| depth > max);
                // Symlinked directories are listed but never followed, so
                // symlink cycles cannot recurse.
                let sub = if at_cutoff || path.is_symlink() {
                    Vec::new()
                } else {
                    self.walk_children(&path, depth + 1)?
                };
                children.push(TreeNode::Dir {
                    name,
                    children: sub,
                });
            } else {
                children.push(TreeNode::File { name });
            }
        }
        Ok(children)
    }
}
