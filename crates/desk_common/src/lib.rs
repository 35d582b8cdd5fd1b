//! Shared types for the helpdesk agent components.
//!
//! Wire schemas, the closed category set, the classification trace, and
//! the error taxonomy used by both the daemon and the CLI.

pub mod category;
pub mod error;
pub mod schemas;
pub mod trace;

pub use category::*;
pub use error::*;
pub use schemas::*;
pub use trace::*;

/// Default address the daemon binds and the CLI targets
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";
