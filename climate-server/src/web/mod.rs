//! Web layer for the climate API.
//!
//! Provides the JSON endpoints under `/api/v1.0` and an HTML index page
//! listing them.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
