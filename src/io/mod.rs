//! Dataset file ingestion.

pub mod checksum;
pub mod loaders;

pub use checksum::calculate_checksum;
pub use loaders::{DatasetLoader, RawRecord, REQUIRED_COLUMNS};
