//! Generic sortable, filterable and limited tabular reports.
//!
//! A report declares its columns once; the same declaration drives both the rendering of
//! the table (which headers are sort links) and the row query (which comparator to use).

pub mod column;
pub mod query;

pub use column::{CellValue, Column};
pub use query::{select_rows, Report, RowQuery, SortDirection, SortSpec};

/// The two free-text filterable fields of a report row.
pub trait ReportRow {
    /// Field matched by the name filter and used as the tie-breaking sort key.
    fn name(&self) -> &str;

    /// Field matched by the secondary filter (for example a city name).
    fn secondary_name(&self) -> &str;
}
