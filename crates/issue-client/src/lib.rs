//! GitHub Issues client used for error reports.

mod client;
mod error;
mod types;

pub use client::IssueClient;
pub use error::IssueError;
pub use types::*;
