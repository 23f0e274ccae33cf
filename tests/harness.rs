//! Test harness for treeviz integration tests

use std::path::Path;
use std::process::Command;

pub use treeviz::test_utils::TestDir;

/// Run the treeviz binary against `dir` with extra arguments.
/// Returns (stdout, stderr, exit code).
pub fn run_treeviz(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_treeviz");
    let output = Command::new(binary)
        .arg(".")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run treeviz");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the treeviz binary with a raw argument list, no implied path.
pub fn run_treeviz_raw(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_treeviz");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run treeviz");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("sub/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
