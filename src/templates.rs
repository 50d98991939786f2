//! Message templates and the fixed registry of styles.
//!
//! A template turns the user's inline text into a tagged message. The tag
//! (`{alias}id:{id}`) lets the style and the query that produced a message be
//! traced later on.

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while assembling a [`Registry`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Alias is an empty string
    #[error("template '{0}' has an empty alias")]
    EmptyAlias(String),
    /// Alias contains whitespace
    #[error("alias '{0}' contains whitespace")]
    WhitespaceInAlias(String),
    /// Two templates share the same alias
    #[error("alias '{0}' is used by more than one template")]
    DuplicateAlias(String),
}

/// A message style: title, display glyph and the alias used as tag prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Human-readable style name, e.g. "Irony"
    pub title: String,
    /// Glyph shown next to the title
    pub emoji: String,
    /// Short lowercase tag prefix, e.g. "iron"
    pub alias: String,
}

impl MessageTemplate {
    /// Create a new template
    #[must_use]
    pub fn new(title: impl Into<String>, emoji: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            emoji: emoji.into(),
            alias: alias.into(),
        }
    }

    /// Tag identifying this style and message id.
    ///
    /// # Examples
    ///
    /// ```
    /// use quipbot::templates::MessageTemplate;
    ///
    /// let irony = MessageTemplate::new("Irony", "🤨", "iron");
    /// assert_eq!(irony.tag("abc-123"), "ironid:abc-123");
    /// ```
    #[must_use]
    pub fn tag(&self, id: &str) -> String {
        format!("{}id:{id}", self.alias)
    }

    /// Full message: the text, a blank line, then the tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use quipbot::templates::MessageTemplate;
    ///
    /// let meme = MessageTemplate::new("Meme", "😂", "meme");
    /// assert_eq!(meme.render("nice job", "abc-123"), "nice job\n\nmemeid:abc-123");
    /// ```
    #[must_use]
    pub fn render(&self, text: &str, id: &str) -> String {
        format!("{text}\n\n{}", self.tag(id))
    }

    /// Title as shown in the inline results list
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }
}

/// Ordered, immutable set of templates. Order is the display order of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    templates: Vec<MessageTemplate>,
}

impl Registry {
    /// Build a registry, checking that every alias is non-empty, free of
    /// whitespace and unique.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] describing the first offending alias.
    pub fn new(templates: Vec<MessageTemplate>) -> Result<Self, TemplateError> {
        let mut seen = HashSet::with_capacity(templates.len());
        for template in &templates {
            if template.alias.is_empty() {
                return Err(TemplateError::EmptyAlias(template.title.clone()));
            }
            if template.alias.chars().any(char::is_whitespace) {
                return Err(TemplateError::WhitespaceInAlias(template.alias.clone()));
            }
            if !seen.insert(template.alias.as_str()) {
                return Err(TemplateError::DuplicateAlias(template.alias.clone()));
            }
        }
        Ok(Self { templates })
    }

    /// Templates in display order
    #[must_use]
    pub fn templates(&self) -> &[MessageTemplate] {
        &self.templates
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry holds no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for Registry {
    /// Irony, Sarcasm and Meme, in that order.
    fn default() -> Self {
        Self {
            templates: vec![
                MessageTemplate::new("Irony", "🤨", "iron"),
                MessageTemplate::new("Sarcasm", "😒", "sarcasm"),
                MessageTemplate::new("Meme", "😂", "meme"),
            ],
        }
    }
}
