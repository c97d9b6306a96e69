//! Throwaway datasets for tests.
//!
//! Builds a SQLite file with the same schema as the published dataset,
//! seeds it through a writable connection, then reopens it read-only.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tempfile::TempDir;

use super::client::{ClimateStore, StoreConfig};

const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
];

/// A measurement row to insert.
#[derive(Debug, Clone)]
pub(crate) struct SeedMeasurement {
    pub date: Option<&'static str>,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

impl SeedMeasurement {
    pub fn new(date: &'static str) -> Self {
        Self {
            date: Some(date),
            prcp: None,
            tobs: None,
        }
    }

    /// A reading with a NULL date.
    pub fn undated() -> Self {
        Self {
            date: None,
            prcp: None,
            tobs: None,
        }
    }

    pub fn prcp(mut self, prcp: f64) -> Self {
        self.prcp = Some(prcp);
        self
    }

    pub fn tobs(mut self, tobs: f64) -> Self {
        self.tobs = Some(tobs);
        self
    }
}

/// A station row to insert.
#[derive(Debug, Clone)]
pub(crate) struct SeedStation {
    pub station: &'static str,
    pub name: Option<&'static str>,
}

impl SeedStation {
    pub fn new(station: &'static str, name: &'static str) -> Self {
        Self {
            station,
            name: Some(name),
        }
    }

    /// A station row with a NULL name.
    pub fn unnamed(station: &'static str) -> Self {
        Self {
            station,
            name: None,
        }
    }
}

/// Create a seeded dataset and open it read-only with a single connection.
///
/// The returned `TempDir` owns the file; keep it alive for the whole test.
pub(crate) async fn seeded_store(
    measurements: &[SeedMeasurement],
    stations: &[SeedStation],
) -> (TempDir, ClimateStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("climate.sqlite");

    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    for statement in SCHEMA {
        sqlx::query(statement).execute(&writer).await.unwrap();
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind("USC00519397")
            .bind(m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&writer)
            .await
            .unwrap();
    }

    for s in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, 21.2716, -157.8168, 3.0)",
        )
        .bind(s.station)
        .bind(s.name)
        .execute(&writer)
        .await
        .unwrap();
    }

    writer.close().await;

    let store = ClimateStore::open(&StoreConfig::new(&path).with_max_connections(1))
        .await
        .unwrap();

    (dir, store)
}
