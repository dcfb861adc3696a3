//! GitHub Issues HTTP client.

use crate::error::IssueError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Label attached to every issue this bot files.
const AUTO_LABEL: &str = "auto_created";

/// Client for filing issues against a fixed repository.
#[derive(Clone)]
pub struct IssueClient {
    client: Client,
    base_url: String,
    token: SecretString,
    owner: String,
    repo: String,
}

impl IssueClient {
    /// Create a new issue client.
    pub fn new(
        token: impl Into<String>,
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, IssueError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("jeopardy-bot")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: SecretString::new(token.into()),
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    /// File an issue; returns its URL.
    ///
    /// A rejection (any non-created status) comes back as
    /// [`IssueError::Rejected`] with the tracker's own explanation when the
    /// body carries one.
    #[instrument(skip(self, body))]
    pub async fn create_issue(&self, title: &str, body: &str) -> Result<CreatedIssue, IssueError> {
        let request = CreateIssueRequest {
            title: title.to_string(),
            body: body.to_string(),
            labels: vec![AUTO_LABEL.to_string()],
        };

        let response = self
            .client
            .post(format!(
                "{}/repos/{}/{}/issues",
                self.base_url, self.owner, self.repo
            ))
            .header("Authorization", format!("Bearer {}", self.token.expose_secret()))
            .header("Accept", "application/vnd.github+json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let reason = extract_reason(status, &response.text().await.unwrap_or_default());
            warn!("Issue rejected ({}): {}", status, reason);
            return Err(IssueError::Rejected { reason });
        }

        let issue: CreatedIssue = response.json().await.map_err(IssueError::Http)?;
        info!("Filed issue #{}: {}", issue.number, issue.html_url);
        Ok(issue)
    }
}

/// Pull a human-readable reason out of a rejection response.
///
/// Structured bodies carry a `message` field (possibly multi-line); anything
/// else falls back to the status' canonical reason.
fn extract_reason(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|e| {
            e.message
                .lines()
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}
