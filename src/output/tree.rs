//! Tree formatter for terminal output
//!
//! Renders the tree model with box-drawing connectors: the last child at
//! each level gets a corner, every other child a tee, and each ancestor
//! level contributes either a vertical bar or blank space to the prefix.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

fn summary_line(dir_count: usize, file_count: usize) -> String {
    format!(
        "{} {}, {} {}",
        dir_count,
        if dir_count == 1 { "directory" } else { "directories" },
        file_count,
        if file_count == 1 { "file" } else { "files" },
    )
}

/// Formatter for the textual tree view.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render to a plain string: header line, one line per entry, then a
    /// directory/file summary. Pure function of the model: same tree, same
    /// text, always.
    pub fn format(&self, root: &TreeNode, header: &str) -> String {
        let mut output = String::new();
        output.push_str(header);
        output.push('\n');
        self.format_children(root.children(), &mut output, "");
        let (dir_count, file_count) = root.count_entries();
        output.push('\n');
        output.push_str(&summary_line(dir_count, file_count));
        output.push('\n');
        output
    }

    fn format_children(&self, children: &[TreeNode], output: &mut String, prefix: &str) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(child.name());
            output.push('\n');
            if child.is_dir() {
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.format_children(child.children(), output, &child_prefix);
            }
        }
    }

    /// Print the tree to stdout, directories in bold blue.
    pub fn print(&self, root: &TreeNode, header: &str) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stdout, "{}", header)?;
        stdout.reset()?;

        self.print_children(root.children(), &mut stdout, "")?;

        let (dir_count, file_count) = root.count_entries();
        writeln!(stdout)?;
        writeln!(stdout, "{}", summary_line(dir_count, file_count))?;
        Ok(())
    }

    fn print_children(
        &self,
        children: &[TreeNode],
        stdout: &mut StandardStream,
        prefix: &str,
    ) -> io::Result<()> {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            write!(stdout, "{}{}", prefix, connector)?;
            if child.is_dir() {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                writeln!(stdout, "{}", child.name())?;
                stdout.reset()?;
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.print_children(child.children(), stdout, &child_prefix)?;
            } else {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                writeln!(stdout, "{}", child.name())?;
                stdout.reset()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectors_and_prefixes() {
        let tree = TreeNode::dir(
            "x",
            vec![
                TreeNode::file("a.txt"),
                TreeNode::dir("b", vec![TreeNode::file("c.txt")]),
            ],
        );
        let text = TreeFormatter::new(false).format(&tree, "/tmp/x");
        let expected = "\
/tmp/x
├── a.txt
└── b
    └── c.txt

1 directory, 2 files
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary_line(1, 1), "1 directory, 1 file");
        assert_eq!(summary_line(0, 0), "0 directories, 0 files");
        assert_eq!(summary_line(2, 1), "2 directories, 1 file");
        assert_eq!(summary_line(1, 3), "1 directory, 3 files");
    }

    #[test]
    fn test_vertical_bar_carries_past_open_levels() {
        let tree = TreeNode::dir(
            "x",
            vec![
                TreeNode::dir("first", vec![TreeNode::file("inner.txt")]),
                TreeNode::file("last.txt"),
            ],
        );
        let text = TreeFormatter::new(false).format(&tree, "x");
        assert!(text.contains("├── first\n│   └── inner.txt\n└── last.txt"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let tree = TreeNode::dir("x", vec![TreeNode::file("a"), TreeNode::file("b")]);
        let formatter = TreeFormatter::new(false);
        assert_eq!(formatter.format(&tree, "x"), formatter.format(&tree, "x"));
    }

    #[test]
    fn test_empty_root_renders_header_and_summary_only() {
        let tree = TreeNode::dir("x", vec![]);
        let text = TreeFormatter::new(false).format(&tree, "x");
        assert_eq!(text, "x\n\n0 directories, 0 files\n");
    }
}
