pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::Reports;
pub use domain::report::{select_rows, Column, Report, RowQuery};
pub use domain::{highlight, Highlighter, Message};
pub use storage::RowSource;
