/// Command and inline query handlers
pub mod handlers;
/// Telegram result views for responder output
pub mod views;
