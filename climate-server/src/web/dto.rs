//! Data transfer objects for web responses.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::store::{PrecipitationRecord, TemperatureRecord, TemperatureSummary};

/// One reading keyed by its date.
///
/// Serializes as a single-entry object, `{"2017-08-23": 0.5}`. Readings that
/// share a date stay separate objects in a list; they are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedValue<T> {
    /// Observation date (YYYY-MM-DD)
    pub date: String,

    /// Reading for that date
    pub value: T,
}

impl<T: Serialize> Serialize for DatedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.value)?;
        map.end()
    }
}

/// Precipitation for one date; `null` where no amount was recorded.
pub type PrecipitationEntry = DatedValue<Option<f64>>;

/// Temperature observation for one date.
pub type TemperatureEntry = DatedValue<f64>;

impl From<PrecipitationRecord> for PrecipitationEntry {
    fn from(r: PrecipitationRecord) -> Self {
        DatedValue {
            date: r.date,
            value: r.prcp,
        }
    }
}

impl From<TemperatureRecord> for TemperatureEntry {
    fn from(r: TemperatureRecord) -> Self {
        DatedValue {
            date: r.date,
            value: r.tobs,
        }
    }
}

/// Response for the temperature aggregate routes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TemperatureSummaryResponse {
    /// Lowest observation, `null` if no rows matched
    #[serde(rename = "Min")]
    pub min: Option<f64>,

    /// Mean observation, `null` if no rows matched
    #[serde(rename = "Avg")]
    pub avg: Option<f64>,

    /// Highest observation, `null` if no rows matched
    #[serde(rename = "Max")]
    pub max: Option<f64>,
}

impl From<TemperatureSummary> for TemperatureSummaryResponse {
    fn from(s: TemperatureSummary) -> Self {
        Self {
            min: s.min,
            avg: s.avg,
            max: s.max,
        }
    }
}

/// Error response.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
