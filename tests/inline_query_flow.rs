use quipbot::bot::handlers::{command_reply, Command};
use quipbot::bot::views::inline_results;
use quipbot::replies::Replies;
use quipbot::responder::QueryResponder;
use teloxide::types::{InlineQueryResult, InputMessageContent};
use teloxide::utils::command::BotCommands;

#[test]
fn inline_query_becomes_three_text_articles() {
    let responder = QueryResponder::with_defaults();
    let results = inline_results(responder.respond(Some("great meeting")));

    let mut titles = Vec::new();
    for result in &results {
        let InlineQueryResult::Article(article) = result else {
            panic!("expected an article result, got {result:?}");
        };
        titles.push(article.title.as_str());
    }
    assert_eq!(titles, ["🤨 Irony", "😒 Sarcasm", "😂 Meme"]);

    for result in &results {
        let InlineQueryResult::Article(article) = result else {
            panic!("expected an article result");
        };
        let InputMessageContent::Text(text) = &article.input_message_content else {
            panic!("expected text content");
        };
        let Some(description) = article.description.as_deref() else {
            panic!("expected the tag as description");
        };
        assert_eq!(text.message_text, format!("great meeting\n\n{description}"));
    }
}

#[test]
fn empty_inline_query_is_not_answered() {
    let responder = QueryResponder::with_defaults();
    assert!(inline_results(responder.respond(Some(""))).is_empty());
}

#[test]
fn commands_reply_with_fixed_texts() {
    let replies = Replies::new("quip_bot");

    let Ok(start) = Command::parse("/start", "quip_bot") else {
        panic!("/start should parse");
    };
    let Ok(help) = Command::parse("/help", "quip_bot") else {
        panic!("/help should parse");
    };

    let start_text = command_reply(&start, &replies);
    assert!(start_text.starts_with("Hello! 👋"));
    assert!(start_text.contains("@quip_bot"));
    assert_eq!(start_text, command_reply(&Command::Start, &replies));

    let help_text = command_reply(&help, &replies);
    assert!(help_text.contains("1. In any chat, type @quip_bot <your message>"));
}
