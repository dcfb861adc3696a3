//! Changelog command - shows the latest release's entries.

use crate::changelog;
use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct ChangelogCommand {
    changelog_path: PathBuf,
}

impl ChangelogCommand {
    pub fn new(changelog_path: PathBuf) -> Self {
        Self { changelog_path }
    }
}

#[async_trait]
impl Command for ChangelogCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["changelog"]
    }

    async fn execute(&self, _ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let entries = changelog::read_latest_entries(&self.changelog_path).await?;
        Ok(Some(Reply::text(entries)))
    }
}
