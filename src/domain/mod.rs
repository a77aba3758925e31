//! Pure request/response transforms: highlighting and report queries.

pub mod escape;
pub mod highlight;
pub mod message;
pub mod model;
pub mod report;

pub use highlight::{highlight, HighlightError, Highlighter};
pub use message::Message;
