//! GitHub Issues API types.

use serde::{Deserialize, Serialize};

/// Issue creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The filed issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub html_url: String,
    pub number: i64,
}

/// Error body shape the API uses for rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
