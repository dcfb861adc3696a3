//! Version command - reports the current release.

use crate::changelog;
use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct VersionCommand {
    changelog_path: PathBuf,
}

impl VersionCommand {
    pub fn new(changelog_path: PathBuf) -> Self {
        Self { changelog_path }
    }
}

#[async_trait]
impl Command for VersionCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["version"]
    }

    async fn execute(&self, _ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let version = changelog::read_version(&self.changelog_path).await?;
        Ok(Some(Reply::text(version)))
    }
}
