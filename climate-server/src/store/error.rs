//! Store error types.

use crate::domain::InvalidDate;

/// Errors that can occur when reading the climate dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or a query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The measurement table has no rows
    #[error("no measurements in dataset")]
    EmptyDataset,

    /// A date stored in the dataset is not in YYYY-MM-DD form
    #[error("stored date {value:?} is malformed: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: InvalidDate,
    },
}
