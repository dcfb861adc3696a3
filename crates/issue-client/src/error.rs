//! Issue tracker client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker refused the issue; `reason` is human-readable and safe
    /// to show in a chat reply.
    #[error("Issue rejected: {reason}")]
    Rejected { reason: String },
}
