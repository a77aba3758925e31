pub mod csv;
pub mod rows;

pub use rows::RowSource;
