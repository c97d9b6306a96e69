//! Domain types for the climate API.
//!
//! Dates are the only values this service interprets; everything else is
//! passed through from the dataset as-is.

mod date;

pub use date::{InvalidDate, ObservationDate, RECENT_WINDOW_DAYS};
