//! Filter transformations over the labeled dataset.

pub mod filtering;

pub use filtering::{filter_by_country, filter_by_year_range};
