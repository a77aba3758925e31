//! Centralized configuration (environment variables + defaults).

use crate::domain::highlight::DEFAULT_MAX_LENGTH;
use std::path::PathBuf;

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Listen address (default `0.0.0.0`).
pub fn bind_addr() -> String {
    var_or("BIND_ADDR", "0.0.0.0")
}

/// Listen port (default `8080`). Invalid values fall back to the default.
pub fn port() -> u16 {
    var_or("PORT", "8080").trim().parse().unwrap_or(8080)
}

/// Port from the first command-line argument if it is all digits, otherwise [`port`].
pub fn port_from_args(args: &[String]) -> u16 {
    args.first()
        .filter(|a| !a.is_empty() && a.chars().all(|c| c.is_ascii_digit()))
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(port)
}

/// Directory holding `ResourceHotel.csv` and `ResourceCity.csv`.
pub fn data_dir() -> PathBuf {
    PathBuf::from(var_or("DATA_DIR", "resources/csv"))
}

/// Directory of static assets served under `/static`.
pub fn static_dir() -> PathBuf {
    PathBuf::from(var_or("STATIC_DIR", "static"))
}

/// Maximum length of the highlighted text, in characters.
pub fn highlight_max_length() -> usize {
    var_or("HIGHLIGHT_MAX_LENGTH", "")
        .trim()
        .parse()
        .unwrap_or(DEFAULT_MAX_LENGTH)
}
