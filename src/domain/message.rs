use serde::Serialize;
use utoipa::ToSchema;

/// A success/error-tagged text result.
///
/// Handlers render a successful message verbatim and wrap an error message in an
/// `error` span, so the text of a successful message must already be HTML-safe.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Message {
    text: String,
    error: bool,
}

impl Message {
    pub fn of(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    /// Builds an error message as `"<kind>: <detail>"`.
    pub fn error(kind: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            text: format!("{}: {}", kind, detail),
            error: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
