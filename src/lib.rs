#![deny(missing_docs)]
//! Quipbot: an inline Telegram bot.
//!
//! Type `@botname <text>` in any chat and pick Irony, Sarcasm or Meme; the
//! sent message carries a tag with a per-query UUID.

/// Telegram handlers and views
pub mod bot;
/// Configuration management
pub mod config;
/// Logging setup with token redaction
pub mod logging;
/// `/start` and `/help` texts
pub mod replies;
/// Inline query responder
pub mod responder;
/// Telegram runtime entrypoint
pub mod runner;
/// Message templates and registry
pub mod templates;
