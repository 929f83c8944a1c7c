//! Process lifecycle helpers.

pub mod shutdown;

// Re-export public API
pub use shutdown::{cancel_on_ctrl_c, shutdown_gracefully};
