//! Row types read from the dataset.
//!
//! Each type matches the columns of one query, declared statically rather
//! than discovered from the database at startup.

use sqlx::FromRow;

/// Precipitation recorded on one day at one station.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRecord {
    /// Observation date (YYYY-MM-DD)
    pub date: String,

    /// Precipitation amount, missing for some readings
    pub prcp: Option<f64>,
}

/// Temperature observed on one day at one station.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureRecord {
    /// Observation date (YYYY-MM-DD)
    pub date: String,

    /// Temperature observation
    pub tobs: f64,
}

/// Minimum, average and maximum temperature over a date filter.
///
/// All three are `None` when no rows match.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Row counts for both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct DatasetSummary {
    pub stations: i64,
    pub measurements: i64,
}
