#![forbid(unsafe_code)]

//! ptip public facade crate.
//!
//! Re-exports the geometry types, the placement resolver and the
//! presentation surface, and provides a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use ptip_core::geometry::{Point, Rect, Size, StatusBar, Viewport};
#[cfg(feature = "tracing-json")]
pub use ptip_core::logging::init_json;

// --- Layout re-exports -----------------------------------------------------

pub use ptip_layout::{
    BubbleHorizontal, ConnectorHorizontal, Edge, Placement, PlacementError, PlacementRequest,
    ResolvedSide, Side, resolve,
};

// --- Surface re-exports ----------------------------------------------------

pub use ptip_surface::{
    AppliedLayout, ConfigError, Measurements, SurfaceError, SurfaceHost, Tooltip, TooltipConfig,
    TooltipPhase, TouchOutcome,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ptip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The resolver rejected its input.
    Placement(PlacementError),
    /// Surface lifecycle misuse.
    Surface(SurfaceError),
    /// Malformed configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(err) => write!(f, "{err}"),
            Self::Surface(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<PlacementError> for Error {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for ptip APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AppliedLayout, Error, Measurements, Placement, PlacementRequest, Rect, ResolvedSide,
        Result, Side, Size, SurfaceHost, Tooltip, TooltipConfig, Viewport, resolve,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::{ConfigError, PlacementError, SurfaceError};

    fn show_from_env(env: &[(&str, &str)]) -> Result<AppliedLayout> {
        let config = TooltipConfig::from_env_with(|key| {
            env.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })?;
        let viewport = Viewport::new(400, 800);
        let mut tooltip = Tooltip::new("hi", Rect::new(0, 100, 20, 20), viewport).config(config);
        tooltip.show()?;
        let layout = *tooltip.on_layout(Measurements::centered(
            viewport,
            Size::new(20, 10),
            Size::new(320, 60),
        ))?;
        Ok(layout)
    }

    #[test]
    fn question_mark_converts_all_errors() {
        let layout = show_from_env(&[]).unwrap();
        assert_eq!(layout.placement.side, ResolvedSide::Below);
        assert_eq!(layout.connector.x, 8);

        let err = show_from_env(&[("PTIP_POSITION", "nowhere")]).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn errors_chain_sources() {
        let placement = PlacementError::NegativeSpacing { spacing: -1 };
        let err = Error::from(SurfaceError::from(placement));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("connector spacing"));
        assert!(std::error::Error::source(source).is_some());
    }

    #[test]
    fn resolve_is_reexported() {
        let req = PlacementRequest::new(Rect::new(180, 100, 40, 20), Viewport::new(400, 800));
        let placement: Placement = resolve(&req).unwrap();
        assert_eq!(placement.side, ResolvedSide::Below);

        let forced = resolve(&req.side(Side::Above)).unwrap();
        assert_eq!(forced.side, ResolvedSide::Above);
        assert_eq!(Side::default(), Side::Auto);
    }
}
