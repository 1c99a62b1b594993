//! Biomechanics inference HTTP API.
//!
//! Exposes `/health`, `/analyze`, and `/frame` over JSON and maps internal
//! failures onto HTTP statuses.

pub mod analyze_api;
pub mod error;
pub mod frame_api;
pub mod health_api;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
