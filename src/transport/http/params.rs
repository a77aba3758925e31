//! Request parameters recognized by the HTML endpoints.
//!
//! Every parameter is a constant `{ key, default }` pair; handlers read values through it
//! so that a key is spelled exactly once.

use std::collections::HashMap;
use std::str::FromStr;

/// Decoded query-string or form parameters of one request.
#[derive(Debug, Default, Clone)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Params(map)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpParam {
    pub key: &'static str,
    pub default: &'static str,
}

impl HttpParam {
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }

    /// The raw value, or the default when the parameter is absent.
    pub fn text(&self, params: &Params) -> String {
        params.get(self.key).unwrap_or(self.default).to_string()
    }

    /// The value parsed as `T`; an absent or unparsable value yields `fallback`.
    pub fn parse_or<T: FromStr>(&self, params: &Params, fallback: T) -> T {
        params
            .get(self.key)
            .unwrap_or(self.default)
            .trim()
            .parse()
            .unwrap_or(fallback)
    }

    /// Checkbox-style boolean: `true`, `on` and `1` are true.
    pub fn flag(&self, params: &Params) -> bool {
        let value = params.get(self.key).unwrap_or(self.default).trim();
        ["true", "on", "1"]
            .iter()
            .any(|t| value.eq_ignore_ascii_case(t))
    }
}

pub const NAME: HttpParam = HttpParam::new("name", "");
pub const CITY: HttpParam = HttpParam::new("city", "");
pub const COUNTRY: HttpParam = HttpParam::new("country", "");
/// Row limit; the default is declared per report.
pub const LIMIT: HttpParam = HttpParam::new("limit", "");
pub const SORT: HttpParam = HttpParam::new("sort", "");
pub const DIR: HttpParam = HttpParam::new("dir", "asc");
pub const REGEXP: HttpParam = HttpParam::new("regexp", "");
pub const TEXT: HttpParam = HttpParam::new("text", "");
pub const MONTH: HttpParam = HttpParam::new("month", "JANUARY");
pub const NOTE: HttpParam = HttpParam::new("note", "");
/// Selects a JSON fragment response instead of a full page.
pub const AJAX: HttpParam = HttpParam::new("_ajax", "false");

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn absent_values_use_the_default() {
        let p = params(&[]);
        assert_eq!(MONTH.text(&p), "JANUARY");
        assert_eq!(NAME.text(&p), "");
        assert!(!AJAX.flag(&p));
    }

    #[test]
    fn values_are_parsed_with_fallback() {
        let p = params(&[("limit", " -3 "), ("sort", "x")]);
        assert_eq!(LIMIT.parse_or(&p, 15i64), -3);
        assert_eq!(SORT.parse_or(&p, 7u32), 7);
        assert_eq!(LIMIT.parse_or(&params(&[]), 15i64), 15);
    }

    #[test]
    fn ajax_flag_accepts_common_spellings() {
        for v in ["true", "TRUE", "on", "1"] {
            assert!(AJAX.flag(&params(&[("_ajax", v)])));
        }
        assert!(!AJAX.flag(&params(&[("_ajax", "no")])));
    }
}
