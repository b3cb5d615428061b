use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Git-derived build metadata surfaced in the public runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub version: String,
    pub commit_hash: String,
}

impl GitInfo {
    /// Read the version and short commit hash from the repository containing
    /// `root`. Never fails; a field falls back to `"unknown"` when git is
    /// unavailable or `root` is not inside a repository.
    pub fn discover(root: &Path) -> Self {
        Self {
            version: git_output(root, &["describe", "--tags", "--always"]),
            commit_hash: git_output(root, &["rev-parse", "--short", "HEAD"]),
        }
    }
}

fn git_output(root: &Path, args: &[&str]) -> String {
    let output = Command::new("git").args(args).current_dir(root).output();

    match output {
        Ok(output) if output.status.success() => {
            let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if value.is_empty() {
                UNKNOWN.to_string()
            } else {
                value
            }
        }
        _ => UNKNOWN.to_string(),
    }
}
