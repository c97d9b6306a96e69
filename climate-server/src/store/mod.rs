//! Read-only access to the climate dataset.
//!
//! The dataset is an external SQLite file with two tables:
//! - `measurement`: one weather reading per station per day
//!   (`station`, `date`, `prcp`, `tobs`)
//! - `station`: station metadata (`station`, `name`, location columns)
//!
//! The file is opened with SQLite's read-only flag. Each request borrows a
//! [`Session`] from the pool and gives it back when the session is dropped.

mod client;
mod error;
mod records;
mod session;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{ClimateStore, StoreConfig};
pub use error::StoreError;
pub use records::{DatasetSummary, PrecipitationRecord, TemperatureRecord, TemperatureSummary};
pub use session::Session;
