//! HTTP API module for the duty roster engine.
//!
//! This module provides the REST endpoint that generates a roster for one
//! payroll period using the loaded unit configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RosterRequest;
pub use response::{ApiError, ApiErrorResponse, RosterResponse, RosterWarning};
pub use state::AppState;
