//! HTTP API module for the payroll engine.
//!
//! This module exposes a payroll run over HTTP. Month validation happens
//! here, before the engine is invoked.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
