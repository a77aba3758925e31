//! In-memory row types of the demo tables.

pub mod city;
pub mod hotel;

pub use city::{City, CityTable};
pub use hotel::Hotel;
