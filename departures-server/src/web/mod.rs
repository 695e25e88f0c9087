//! Web layer for the departures server.
//!
//! Provides the JSON departures endpoint and a small server-rendered page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
