//! API Lambda handler and response rendering

pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::handler;

/// Generic failure message returned to the frontend when the summary cannot
/// be assembled. The specific cause goes into the `details` field and the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to load product summary";
