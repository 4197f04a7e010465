//! HTTP API module for the consultant forecast engine.
//!
//! This module provides the REST API endpoints for yearly projections,
//! salary breakdowns and configured tax settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProjectionRequest, SalaryBreakdownRequest, SalaryEntryRequest, salary_schedule};
pub use response::{ApiError, ApiErrorResponse, SalaryBreakdownResponse};
pub use state::AppState;
