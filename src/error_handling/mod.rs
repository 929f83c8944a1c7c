//! Error handling.
//!
//! Errors are split by failure domain:
//! - **Initialization**: logger or HTTP client setup, fatal at startup
//! - **Refresh**: upstream fetch/parse failures, logged and never surfaced to clients
//! - **Query**: invalid client filters, answered with a 400 response

mod types;

// Re-export public API
pub use types::{ErrorBody, InitializationError, QueryError, RefreshError};
