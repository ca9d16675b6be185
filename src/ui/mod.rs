//! # Diagnostics
//!
//! Colored, timestamped stderr logging gated by a verbosity switch.

pub mod log;

pub use log::{debug, info, warn, Log};
