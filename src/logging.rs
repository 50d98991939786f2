//! Logging setup with bot token redaction.
//!
//! teloxide includes the request URL (and so the bot token) in some error
//! messages. Everything written by the fmt layer passes through
//! [`MaskingMakeWriter`] before it reaches stderr.

use regex::Regex;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter outside debug mode
pub const DEFAULT_FILTER: &str = "quipbot=info,teloxide=warn,hyper=warn,reqwest=warn";

/// Regex patterns for redacting bot tokens
pub struct RedactionPatterns {
    url_token: Regex,
    bare_token: Regex,
    prefixed_token: Regex,
}

impl RedactionPatterns {
    /// Compile all patterns
    ///
    /// # Errors
    ///
    /// Returns an error if any regex pattern is invalid
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            url_token: Regex::new(r"(https?://[^/]+/bot)([0-9]+:[A-Za-z0-9_-]+)(/['\s]*)")?,
            bare_token: Regex::new(r"([0-9]{8,10}:[A-Za-z0-9_-]{35})")?,
            prefixed_token: Regex::new(r"(bot[0-9]{8,10}:)[A-Za-z0-9_-]+")?,
        })
    }

    /// Mask every bot token found in `input`
    #[must_use]
    pub fn redact(&self, input: &str) -> String {
        let output = self
            .url_token
            .replace_all(input, "$1[TELEGRAM_TOKEN]$3")
            .to_string();
        let output = self
            .bare_token
            .replace_all(&output, "[TELEGRAM_TOKEN]")
            .to_string();
        self.prefixed_token
            .replace_all(&output, "$1[TELEGRAM_TOKEN]")
            .to_string()
    }
}

/// Per-event writer; masks tokens before they reach `inner`
pub struct MaskedWriter<W> {
    inner: W,
    patterns: Arc<RedactionPatterns>,
}

impl<W: Write> Write for MaskedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let masked = self.patterns.redact(&String::from_utf8_lossy(buf));
        self.inner.write_all(masked.as_bytes())?;
        // Callers count progress in input bytes, not masked bytes
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Wraps any [`MakeWriter`] so every event it writes is masked
pub struct MaskingMakeWriter<M> {
    inner: M,
    patterns: Arc<RedactionPatterns>,
}

impl<M> MaskingMakeWriter<M> {
    /// Mask output of `inner` with `patterns`
    pub const fn new(inner: M, patterns: Arc<RedactionPatterns>) -> Self {
        Self { inner, patterns }
    }
}

impl<'a, M> MakeWriter<'a> for MaskingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = MaskedWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        MaskedWriter {
            inner: self.inner.make_writer(),
            patterns: Arc::clone(&self.patterns),
        }
    }
}

/// Whether a `DEBUG_MODE` value asks for verbose logs (`true` or `1`)
#[must_use]
pub fn is_debug_mode(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "1"))
}

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub const fn default_filter(debug_mode: bool) -> &'static str {
    if debug_mode {
        "debug"
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global subscriber writing masked output to stderr.
///
/// Logging starts before [`crate::config::Settings`] are loaded, so
/// `DEBUG_MODE` is read from the process environment only. `RUST_LOG`
/// always wins over the default filter.
pub fn init_logging(patterns: Arc<RedactionPatterns>) {
    let debug_mode = is_debug_mode(std::env::var("DEBUG_MODE").ok().as_deref());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug_mode)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(MaskingMakeWriter::new(io::stderr, patterns)),
        )
        .init();
}
