//! Application layer: report declarations shared by the HTML and JSON endpoints.

pub mod reports;

pub use reports::Reports;
