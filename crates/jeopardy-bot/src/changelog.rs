//! Changelog file access.
//!
//! The changelog is a plain text file where releases are separated by a
//! line of dashes; the newest release is on top and its first line names
//! the version. The file is read on every request so a redeploy that only
//! touches the changelog shows up without a restart.

use std::io;
use std::path::Path;

/// A release separator is a line of at least six dashes.
fn is_separator(line: &str) -> bool {
    line.starts_with("------")
}

/// First line of the changelog: the current version.
pub fn current_version(contents: &str) -> String {
    contents.lines().next().unwrap_or_default().trim().to_string()
}

/// Everything above the first separator: the latest release's entries.
pub fn latest_entries(contents: &str) -> String {
    contents
        .lines()
        .take_while(|line| !is_separator(line))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read the version line from the changelog file.
pub async fn read_version(path: &Path) -> io::Result<String> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(current_version(&contents))
}

/// Read the latest release's entries from the changelog file.
pub async fn read_latest_entries(path: &Path) -> io::Result<String> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(latest_entries(&contents))
}
