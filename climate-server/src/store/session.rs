//! Per-request queries against the dataset.

use sqlx::Sqlite;
use sqlx::pool::PoolConnection;
use tracing::debug;

use super::error::StoreError;
use super::records::{DatasetSummary, PrecipitationRecord, TemperatureRecord, TemperatureSummary};
use crate::domain::ObservationDate;

/// A pooled connection held for the lifetime of one request.
///
/// Dropping the session returns the connection to the pool, whether the
/// request succeeded or not.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(super) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    /// Every dated `(date, prcp)` pair, in storage order.
    ///
    /// Rows without a date have no key to report under and are skipped.
    pub async fn precipitation(&mut self) -> Result<Vec<PrecipitationRecord>, StoreError> {
        let records = sqlx::query_as::<_, PrecipitationRecord>(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement \
             WHERE date IS NOT NULL",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        debug!(rows = records.len(), "loaded precipitation");
        Ok(records)
    }

    /// Every station name, in storage order; `None` where the name is NULL.
    pub async fn station_names(&mut self) -> Result<Vec<Option<String>>, StoreError> {
        let names = sqlx::query_scalar::<_, Option<String>>("SELECT name FROM station")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(names)
    }

    /// The most recent measurement date.
    ///
    /// Returns [`StoreError::EmptyDataset`] if there are no measurements.
    pub async fn latest_date(&mut self) -> Result<ObservationDate, StoreError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *self.conn)
            .await?;

        let value = latest.ok_or(StoreError::EmptyDataset)?;
        ObservationDate::parse(&value).map_err(|source| StoreError::InvalidDate { value, source })
    }

    /// Non-zero temperature observations on or after `since`.
    pub async fn temperatures_since(
        &mut self,
        since: ObservationDate,
    ) -> Result<Vec<TemperatureRecord>, StoreError> {
        let records = sqlx::query_as::<_, TemperatureRecord>(
            "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement \
             WHERE tobs != 0 AND date >= ?",
        )
        .bind(since.to_string())
        .fetch_all(&mut *self.conn)
        .await?;

        debug!(%since, rows = records.len(), "loaded temperature observations");
        Ok(records)
    }

    /// Observations from the year ending on the most recent measurement.
    ///
    /// Both queries run on this session.
    pub async fn recent_temperatures(&mut self) -> Result<Vec<TemperatureRecord>, StoreError> {
        let latest = self.latest_date().await?;
        self.temperatures_since(latest.year_before()).await
    }

    /// Min/avg/max temperature for dates `>= start`, and `<= end` if given.
    ///
    /// The bounds are compared as text and are not validated; anything that
    /// is not a stored date simply matches nothing, or everything.
    pub async fn temperature_summary(
        &mut self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, StoreError> {
        const SELECT: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min, \
                              CAST(AVG(tobs) AS REAL) AS avg, \
                              CAST(MAX(tobs) AS REAL) AS max \
                              FROM measurement WHERE date >= ?";

        let sql = match end {
            Some(_) => format!("{SELECT} AND date <= ?"),
            None => SELECT.to_string(),
        };

        let mut query = sqlx::query_as::<_, TemperatureSummary>(&sql).bind(start);
        if let Some(end) = end {
            query = query.bind(end);
        }

        let summary = query.fetch_one(&mut *self.conn).await?;

        Ok(summary)
    }

    /// Row counts for both tables.
    ///
    /// Fails if either table is missing, so it doubles as a schema check.
    pub async fn dataset_summary(&mut self) -> Result<DatasetSummary, StoreError> {
        let summary = sqlx::query_as::<_, DatasetSummary>(
            "SELECT (SELECT COUNT(*) FROM station) AS stations, \
                    (SELECT COUNT(*) FROM measurement) AS measurements",
        )
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(summary)
    }

    #[cfg(test)]
    pub(crate) fn connection(&mut self) -> &mut sqlx::SqliteConnection {
        &mut *self.conn
    }
}
