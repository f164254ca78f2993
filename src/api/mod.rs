//! HTTP API module for the NZ pay engine.
//!
//! This module provides the REST endpoints for single-week deductions,
//! multi-week pay runs, hours sweeps, and the active rate tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeductionsRequest, SweepRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
