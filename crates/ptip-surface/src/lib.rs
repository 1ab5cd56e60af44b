#![forbid(unsafe_code)]

//! Presentation surface for pointer tooltips.
//!
//! The surface sits between a host UI and the pure resolver in
//! [`ptip_layout`]. It tracks the show/dismiss lifecycle, waits for the
//! host's layout pass to report element sizes, resolves the placement once,
//! and turns it into element frames the host can apply.

pub mod applied;
pub mod config;
pub mod tooltip;

pub use applied::AppliedLayout;
pub use config::{ConfigError, TooltipConfig};
pub use tooltip::{
    Measurements, SurfaceError, SurfaceHost, Tooltip, TooltipPhase, TouchOutcome,
};
