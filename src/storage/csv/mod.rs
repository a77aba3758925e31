//! Semicolon-delimited resource files of the demo tables.
//!
//! Lines starting with `* ` are comments, the header line starts with the first column
//! name (`NAME;` or `ID;`). Rows with too few fields are skipped silently, rows whose
//! numeric fields do not parse are skipped with a warning.

pub mod city;
pub mod hotel;

pub use city::parse_cities;
pub use hotel::parse_hotels;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HOTELS_FILE: &str = "ResourceHotel.csv";
pub const CITIES_FILE: &str = "ResourceCity.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) async fn read_resource(dir: &Path, file: &str) -> Result<String, LoadError> {
    let path = dir.join(file);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| LoadError::Io { path, source })
}

/// Data lines of a resource: comments and the header line removed, fields split.
pub(crate) fn records<'a>(
    content: &'a str,
    header_prefix: &'a str,
) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .filter(|(_, line)| !line.starts_with("* "))
        .filter(move |(_, line)| !line.starts_with(header_prefix))
        .map(|(n, line)| (n, line.split(';').collect()))
}
