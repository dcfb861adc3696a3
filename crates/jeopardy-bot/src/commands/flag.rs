//! Flag command - files an error report for the last served question.

use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use game_store::GameStore;
use issue_client::{IssueClient, IssueError};
use std::sync::Arc;
use tracing::{info, warn};

pub struct FlagCommand {
    games: GameStore,
    issues: Arc<IssueClient>,
}

impl FlagCommand {
    pub fn new(games: GameStore, issues: Arc<IssueClient>) -> Self {
        Self { games, issues }
    }
}

#[async_trait]
impl Command for FlagCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["flag"]
    }

    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let session = self.games.session(ctx.chat_id).await;
        let mut session = session.lock().await;

        let Some(raw) = session.last_served().map(str::to_string) else {
            return Ok(Some(Reply::text(
                "Unable to file an error report, no question found",
            )));
        };
        let Some(reason) = ctx.args.as_deref() else {
            return Ok(Some(Reply::text(
                "Please provide a reason for this error report",
            )));
        };

        let body = format!("Reported by: {}\nRaw Data:\n{}", ctx.sender, raw);

        match self.issues.create_issue(reason, &body).await {
            Ok(issue) => {
                // A flagged question should not stay in play.
                session.end_round();
                info!("Filed error report {}", issue.html_url);
                Ok(Some(Reply::text(format!(
                    "Error report filed successfully. You can track the issue here: {}",
                    issue.html_url
                ))))
            }
            Err(IssueError::Rejected { reason }) => {
                warn!("Error report rejected: {}", reason);
                Ok(Some(Reply::text(format!(
                    "Unable to file report. Reason:\n\n{}",
                    reason
                ))))
            }
            Err(error) => Err(error.into()),
        }
    }
}
