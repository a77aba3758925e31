//! HTML escaping shared by the highlighter and the page renderer.

/// Escapes `&`, `<`, `>`, `"` and `'`, so the result is safe both as element content
/// and inside a double- or single-quoted attribute value.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
