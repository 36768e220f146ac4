//! Utils Module - Shared Helpers
//!
//! Constants and in-memory telemetry used across the application.

pub mod constants;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
