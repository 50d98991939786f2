//! Inline query responder.
//!
//! Renders every registry template against the query text and one shared
//! tracking id. Pure computation: delivery is left to the transport.

use crate::templates::Registry;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Source of unique string tokens
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Return a fresh token with negligible collision probability
    fn new_id(&self) -> String;
}

/// Random UUIDv4 tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// One selectable inline result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Per-item token used by the transport to tell entries apart
    pub result_id: String,
    /// Emoji and title, e.g. "🤨 Irony"
    pub display_title: String,
    /// Message sent when the user picks this item
    pub content: String,
    /// The tag alone, shown under the title
    pub description: String,
}

/// Turns inline query text into the ordered list of styled results.
#[derive(Clone)]
pub struct QueryResponder {
    registry: Arc<Registry>,
    ids: Arc<dyn IdGenerator>,
}

impl QueryResponder {
    /// Create a responder over `registry` drawing tokens from `ids`
    #[must_use]
    pub fn new(registry: Arc<Registry>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { registry, ids }
    }

    /// Default registry with UUIDv4 ids
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(Registry::default()), Arc::new(UuidGenerator))
    }

    /// Templates this responder renders
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Build results for `query_text`.
    ///
    /// Empty or absent text yields no results. Otherwise one id is generated
    /// for the whole query and shared by every item; each item also gets its
    /// own `result_id`. Items follow registry order.
    ///
    /// # Examples
    ///
    /// ```
    /// use quipbot::responder::QueryResponder;
    ///
    /// let responder = QueryResponder::with_defaults();
    /// assert!(responder.respond(None).is_empty());
    /// assert_eq!(responder.respond(Some("nice job")).len(), 3);
    /// ```
    #[must_use]
    pub fn respond(&self, query_text: Option<&str>) -> Vec<ResultItem> {
        let Some(text) = query_text.filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        let message_id = self.ids.new_id();
        debug!("Handling inline query: \"{text}\" with id: {message_id}");

        self.registry
            .templates()
            .iter()
            .map(|template| ResultItem {
                result_id: self.ids.new_id(),
                display_title: template.display_title(),
                content: template.render(text, &message_id),
                description: template.tag(&message_id),
            })
            .collect()
    }
}
