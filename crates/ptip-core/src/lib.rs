#![forbid(unsafe_code)]

//! Core: geometry primitives shared by the placement resolver and the
//! presentation surface, plus the logging shim.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
