//! Static replies for the `/start` and `/help` commands.

/// Command reply texts, built once from the bot's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replies {
    start: String,
    help: String,
}

impl Replies {
    /// Build both replies, substituting `bot_username` (without the leading `@`).
    #[must_use]
    pub fn new(bot_username: &str) -> Self {
        let start = format!(
            "Hello! 👋 I'm a Telegram inline bot that adds a touch of humor to your \
             messages. Type your text after typing @{bot_username} in any chat to \
             get fun replies in Irony, Sarcasm, or Meme styles — each tagged with a \
             unique UUID for easy tracking.\n\nUse /help to see how to use me."
        );
        let help = format!(
            "How to use this bot:\n\n\
             1. In any chat, type @{bot_username} <your message>\n\
             2. Choose a style (Irony, Sarcasm, or Meme)\n\
             3. Send the generated message with a unique UUID tag.\n\n\
             This makes your conversations more expressive and fun!"
        );
        Self { start, help }
    }

    /// Welcome text for `/start`
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Usage text for `/help`
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }
}
