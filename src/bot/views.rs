//! Conversion of responder output into Telegram inline results.

use crate::responder::ResultItem;
use teloxide::types::{
    InlineQueryResult, InlineQueryResultArticle, InputMessageContent, InputMessageContentText,
};

/// Build one article per item, keeping order.
///
/// Picking an article sends `content` as a plain text message; `description`
/// (the tag) is shown under the title.
#[must_use]
pub fn inline_results(items: Vec<ResultItem>) -> Vec<InlineQueryResult> {
    items.into_iter().map(article).collect()
}

fn article(item: ResultItem) -> InlineQueryResult {
    let content = InputMessageContent::Text(InputMessageContentText::new(item.content));
    InlineQueryResult::Article(
        InlineQueryResultArticle::new(item.result_id, item.display_title, content)
            .description(item.description),
    )
}
