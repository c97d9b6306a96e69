//! Climate API server.
//!
//! A read-only JSON API over a SQLite dataset of weather station
//! measurements: precipitation by date, station names, the last year of
//! temperature observations, and temperature summaries for date ranges.

pub mod config;
pub mod domain;
pub mod store;
pub mod web;
