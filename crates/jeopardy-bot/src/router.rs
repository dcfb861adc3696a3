//! Slash-command parsing and the static dispatch table.

use crate::commands::Command;
use std::collections::HashMap;
use std::sync::Arc;

/// A parsed slash-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command keyword with the `/` prefix and any `@target` removed.
    pub keyword: String,
    /// Free-text remainder after the keyword, if any.
    pub args: Option<String>,
}

/// Parse an inbound message into a command.
///
/// Returns `None` both for plain chatter (no `/` prefix) and for commands
/// addressed to a different bot (`/cmd@otherbot`); neither gets a reply.
/// The whole message is lower-cased, so keyword and args come back
/// lower-cased.
pub fn parse(raw_text: &str, bot_name: &str) -> Option<ParsedCommand> {
    let text = raw_text.trim().to_lowercase();

    let (head, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim_start())),
        None => (text.as_str(), None),
    };

    let keyword = head.strip_prefix('/')?;

    let keyword = match keyword.split_once('@') {
        Some((keyword, target)) => {
            if !target.eq_ignore_ascii_case(bot_name) {
                return None;
            }
            keyword
        }
        None => keyword,
    };

    if keyword.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        keyword: keyword.to_string(),
        args: rest.filter(|rest| !rest.is_empty()).map(String::from),
    })
}

/// Keyword to handler mapping, built once at startup.
pub struct CommandTable {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandTable {
    pub fn new(commands: Vec<Arc<dyn Command>>) -> Self {
        let mut table = HashMap::new();
        for command in commands {
            for keyword in command.keywords() {
                table.insert(*keyword, command.clone());
            }
        }
        Self { commands: table }
    }

    /// Look up the handler bound to a keyword.
    pub fn get(&self, keyword: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(keyword)
    }

    /// Number of bound keywords.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
