//! Regular-expression highlighter producing HTML-safe fragments.
//!
//! Matches are first delimited with random sentinel markers, the whole text is escaped,
//! and only then are the markers swapped for `<span>` tags. Neither the subject text nor
//! the matched content can therefore reintroduce markup.

use crate::domain::escape::escape_html;
use crate::domain::message::Message;
use rand::rngs::OsRng;
use rand::RngCore;
use regex::RegexBuilder;
use thiserror::Error;

/// Default limit of the subject text, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 1_100;

/// Upper bound of the compiled program of a user pattern.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

const SPAN_OPEN: &str = "<span>";
const SPAN_CLOSE: &str = "</span>";

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Shorten text to a maximum of {max} characters.")]
    TextTooLong { max: usize },
    #[error("{0}")]
    InvalidPattern(regex::Error),
    #[error("{0}")]
    ResourceExhausted(regex::Error),
}

impl HighlightError {
    /// Stable label used as the prefix of the error message.
    pub fn kind(&self) -> &'static str {
        match self {
            HighlightError::TextTooLong { .. } => "TextTooLong",
            HighlightError::InvalidPattern(_) => "InvalidPattern",
            HighlightError::ResourceExhausted(_) => "ResourceExhausted",
        }
    }
}

impl From<regex::Error> for HighlightError {
    fn from(e: regex::Error) -> Self {
        match e {
            regex::Error::CompiledTooBig(_) => HighlightError::ResourceExhausted(e),
            _ => HighlightError::InvalidPattern(e),
        }
    }
}

impl HighlightError {
    /// `"<kind>: <detail>"` without HTML escaping, for non-HTML clients.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

impl From<HighlightError> for Message {
    fn from(e: HighlightError) -> Self {
        // The detail may quote the user's pattern and is rendered as raw HTML.
        Message::error(e.kind(), escape_html(&e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    max_length: usize,
}

impl Highlighter {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Highlights every match of `pattern` in `text` with a `<span>` element.
    ///
    /// Never fails: errors are reported as an error [`Message`].
    pub fn highlight(&self, text: &str, pattern: &str) -> Message {
        match self.try_highlight(text, pattern) {
            Ok(html) => Message::of(html),
            Err(e) => e.into(),
        }
    }

    pub fn try_highlight(&self, text: &str, pattern: &str) -> Result<String, HighlightError> {
        self.highlight_with(text, pattern, &mut OsRng)
    }

    fn highlight_with<G: RngCore>(
        &self,
        text: &str,
        pattern: &str,
        rng: &mut G,
    ) -> Result<String, HighlightError> {
        if text.chars().count() > self.max_length {
            return Err(HighlightError::TextTooLong {
                max: self.max_length,
            });
        }
        // An empty pattern highlights nothing rather than every position.
        if pattern.is_empty() {
            return Ok(escape_html(text));
        }

        let regex = RegexBuilder::new(pattern)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()?;
        let markers = Markers::generate(text, rng);

        let mut marked = String::with_capacity(text.len() + 32);
        let mut last = 0;
        for m in regex.find_iter(text) {
            if m.is_empty() {
                continue;
            }
            marked.push_str(&text[last..m.start()]);
            marked.push_str(&markers.begin);
            marked.push_str(m.as_str());
            marked.push_str(&markers.end);
            last = m.end();
        }
        marked.push_str(&text[last..]);

        Ok(escape_html(&marked)
            .replace(&markers.begin, SPAN_OPEN)
            .replace(&markers.end, SPAN_CLOSE))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

/// Highlights with the default text limit.
pub fn highlight(text: &str, pattern: &str) -> Message {
    Highlighter::default().highlight(text, pattern)
}

/// A pair of one-shot sentinels. Fixed width, so neither can be a substring of the other,
/// and built from characters the escaper leaves untouched.
struct Markers {
    begin: String,
    end: String,
}

impl Markers {
    fn generate<G: RngCore>(text: &str, rng: &mut G) -> Self {
        loop {
            let begin = format!("_{:020}_", rng.next_u64());
            let end = format!("_{:020}_", rng.next_u64());
            if begin != end && !text.contains(&begin) && !text.contains(&end) {
                return Self { begin, end };
            }
        }
    }
}
