//! Shared helpers reused across modules (errors, paths, telemetry).

pub mod errors;
pub mod paths;
pub mod telemetry;
