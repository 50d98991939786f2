use crate::bot;
use crate::bot::handlers::{Command, InlineCacheTime};
use crate::config::Settings;
use crate::replies::Replies;
use crate::responder::QueryResponder;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::InlineQuery;
use tracing::{error, info};

/// Run the Telegram bot until Ctrl-C.
pub async fn run_bot(settings: Arc<Settings>) {
    let bot = Bot::new(settings.bot_token.clone());
    let responder = Arc::new(QueryResponder::with_defaults());
    let replies = Arc::new(Replies::new(&settings.bot_username));
    let cache_time = InlineCacheTime(settings.inline_cache_time);

    info!(
        "Serving {} templates as @{}",
        responder.registry().len(),
        settings.bot_username
    );

    let handler = setup_handler();

    info!("Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![responder, replies, cache_time])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Update routing: commands from messages, then inline queries.
#[must_use]
pub fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_inline_query().endpoint(handle_inline_query))
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    replies: Arc<Replies>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::command(bot, msg, cmd, replies).await {
        error!("Command error: {}", e);
    }
    respond(())
}

async fn handle_inline_query(
    bot: Bot,
    q: InlineQuery,
    responder: Arc<QueryResponder>,
    cache_time: InlineCacheTime,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::inline_query(bot, q, responder, cache_time).await {
        error!("Inline query handler error: {}", e);
    }
    respond(())
}
