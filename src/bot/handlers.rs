//! Command and inline query handlers.

use crate::bot::views::inline_results;
use crate::replies::Replies;
use crate::responder::QueryResponder;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::InlineQuery, utils::command::BotCommands};
use tracing::debug;

/// Supported commands for the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Show the welcome message
    #[command(description = "Start the bot.")]
    Start,
    /// Show usage instructions
    #[command(description = "How to use the bot.")]
    Help,
}

/// Reply text for a command
#[must_use]
pub fn command_reply<'a>(cmd: &Command, replies: &'a Replies) -> &'a str {
    match cmd {
        Command::Start => replies.start(),
        Command::Help => replies.help(),
    }
}

/// Command handler. Messages without a sender (channel posts) are ignored.
///
/// # Errors
///
/// Returns an error if the reply cannot be sent.
pub async fn command(bot: Bot, msg: Message, cmd: Command, replies: Arc<Replies>) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    debug!("Received {cmd:?} from user {}", user.id.0);

    bot.send_message(msg.chat.id, command_reply(&cmd, &replies))
        .await?;
    Ok(())
}

/// Inline query handler.
///
/// Empty queries get no answer at all.
///
/// # Errors
///
/// Returns an error if the answer cannot be delivered.
pub async fn inline_query(
    bot: Bot,
    q: InlineQuery,
    responder: Arc<QueryResponder>,
    cache_time: InlineCacheTime,
) -> Result<()> {
    let items = responder.respond(Some(q.query.as_str()));
    if items.is_empty() {
        return Ok(());
    }

    debug!(
        "Answering inline query from user {} with {} results",
        q.from.id.0,
        items.len()
    );

    bot.answer_inline_query(q.id.clone(), inline_results(items))
        .cache_time(cache_time.0)
        .await?;
    Ok(())
}

/// Seconds Telegram may cache an inline answer, injected as a dependency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineCacheTime(pub u32);
