//! Pointer tooltip anchored to an element.
//!
//! # Lifecycle
//!
//! ```text
//! Hidden -> AwaitingLayout -> Placed -> Dismissed
//!               \------------------------/
//! ```
//!
//! 1. [`Tooltip::show`] moves to `AwaitingLayout`. Elements have no measured
//!    size yet, so nothing is placed.
//! 2. [`Tooltip::on_layout`] receives the measurements once the host's
//!    layout pass completes, resolves the placement exactly once and moves
//!    to `Placed`. Later layout passes are rejected so placement never feeds
//!    back into itself.
//! 3. [`Tooltip::dismiss`] (or an outside touch) moves to `Dismissed`.
//!
//! # Example
//!
//! ```
//! use ptip_core::geometry::{Rect, Size, Viewport};
//! use ptip_surface::{Measurements, Tooltip, TooltipConfig};
//!
//! let viewport = Viewport::new(400, 800);
//! let mut tooltip = Tooltip::new("Saved", Rect::new(100, 50, 40, 20), viewport)
//!     .config(TooltipConfig::default());
//! tooltip.show().unwrap();
//! let layout = tooltip
//!     .on_layout(Measurements::centered(viewport, Size::new(20, 10), Size::new(320, 60)))
//!     .unwrap();
//! assert_eq!(layout.connector.y, 70);
//! ```

use std::fmt;

use ptip_core::geometry::{Point, Rect, Size, Viewport};
use ptip_core::{debug, info};
use ptip_layout::{PlacementError, PlacementRequest, resolve};
use serde::{Deserialize, Serialize};

use crate::applied::AppliedLayout;
use crate::config::TooltipConfig;

/// Element sizes and the bubble's pre-placement span, read after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub connector: Size,
    pub bubble: Size,
    pub bubble_left: i32,
    pub bubble_right: i32,
}

impl Measurements {
    /// Measurements for a bubble laid out centered in the viewport.
    #[must_use]
    pub fn centered(viewport: Viewport, connector: Size, bubble: Size) -> Self {
        let (bubble_left, bubble_right) = viewport.centered_span(bubble.width);
        Self {
            connector,
            bubble,
            bubble_left,
            bubble_right,
        }
    }
}

/// Where a tooltip is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipPhase {
    Hidden,
    AwaitingLayout,
    Placed,
    Dismissed,
}

/// What a touch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Tooltip not visible; the touch belongs to the host.
    Ignored,
    /// Touch landed on the tooltip.
    Consumed,
    /// Touch landed outside and dismissed the tooltip.
    Dismissed,
}

/// Host side of the surface: measures the tooltip elements and applies the
/// final frames.
pub trait SurfaceHost {
    /// Measured sizes, valid once a layout pass has completed.
    fn measure(&self) -> Measurements;

    /// Apply element frames and connector rotation.
    fn apply(&mut self, layout: &AppliedLayout);

    /// Called when the tooltip is dismissed.
    fn dismissed(&mut self) {}
}

/// A message tooltip pointing at an anchor rectangle.
#[derive(Debug, Clone)]
pub struct Tooltip {
    message: String,
    anchor: Rect,
    viewport: Viewport,
    config: TooltipConfig,
    phase: TooltipPhase,
    layout: Option<AppliedLayout>,
}

impl Tooltip {
    /// Create a hidden tooltip with default configuration.
    #[must_use]
    pub fn new(message: impl Into<String>, anchor: Rect, viewport: Viewport) -> Self {
        Self {
            message: message.into(),
            anchor,
            viewport,
            config: TooltipConfig::default(),
            phase: TooltipPhase::Hidden,
            layout: None,
        }
    }

    /// Set the tooltip configuration.
    #[must_use]
    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.config = config;
        self
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Anchor rectangle in screen coordinates.
    #[must_use]
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    /// Whether the tooltip is on screen (placed or waiting for layout).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            TooltipPhase::AwaitingLayout | TooltipPhase::Placed
        )
    }

    /// Applied frames, once placed.
    #[must_use]
    pub fn layout(&self) -> Option<&AppliedLayout> {
        self.layout.as_ref()
    }

    /// Show the tooltip; placement waits for [`Tooltip::on_layout`].
    pub fn show(&mut self) -> Result<(), SurfaceError> {
        if self.phase != TooltipPhase::Hidden {
            return Err(SurfaceError::AlreadyShown { phase: self.phase });
        }
        info!(message_len = self.message.len(), "tooltip shown");
        self.phase = TooltipPhase::AwaitingLayout;
        Ok(())
    }

    /// The resolver input this tooltip would use for `measurements`.
    #[must_use]
    pub fn request(&self, measurements: &Measurements) -> PlacementRequest {
        PlacementRequest::new(self.anchor, self.viewport)
            .side(self.config.position)
            .connector(measurements.connector)
            .bubble(measurements.bubble)
            .bubble_span(measurements.bubble_left, measurements.bubble_right)
            .connector_spacing(self.config.connector_spacing)
            .shadow_padding(self.config.shadow_padding)
    }

    /// Resolve and apply the placement after the host's layout pass.
    pub fn on_layout(&mut self, measurements: Measurements) -> Result<&AppliedLayout, SurfaceError> {
        match self.phase {
            TooltipPhase::AwaitingLayout => {}
            TooltipPhase::Placed => return Err(SurfaceError::AlreadyPlaced),
            TooltipPhase::Hidden | TooltipPhase::Dismissed => {
                return Err(SurfaceError::NotShown { phase: self.phase });
            }
        }

        let request = self.request(&measurements);
        let placement = resolve(&request)?;
        let layout = AppliedLayout::apply(placement, &request);
        debug!(
            side = placement.side.as_str(),
            connector = ?layout.connector,
            bubble = ?layout.bubble,
            "tooltip placed"
        );
        self.phase = TooltipPhase::Placed;
        Ok(self.layout.insert(layout))
    }

    /// Measure through `host`, place, and hand the frames back to it.
    pub fn present<H: SurfaceHost>(&mut self, host: &mut H) -> Result<AppliedLayout, SurfaceError> {
        let layout = *self.on_layout(host.measure())?;
        host.apply(&layout);
        Ok(layout)
    }

    /// Route a touch: on the tooltip it is consumed, elsewhere it dismisses
    /// (when enabled).
    pub fn handle_touch(&mut self, point: Point) -> TouchOutcome {
        if !self.is_visible() {
            return TouchOutcome::Ignored;
        }
        if self.layout.is_some_and(|layout| layout.hit(point)) {
            return TouchOutcome::Consumed;
        }
        if !self.config.dismiss_on_outside_touch {
            return TouchOutcome::Ignored;
        }
        self.dismiss();
        TouchOutcome::Dismissed
    }

    /// Like [`Tooltip::handle_touch`], notifying `host` on dismissal.
    pub fn handle_touch_with<H: SurfaceHost>(&mut self, point: Point, host: &mut H) -> TouchOutcome {
        let outcome = self.handle_touch(point);
        if outcome == TouchOutcome::Dismissed {
            host.dismissed();
        }
        outcome
    }

    /// Dismiss the tooltip. Returns false if it was not visible.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        debug!(phase = ?self.phase, "tooltip dismissed");
        self.phase = TooltipPhase::Dismissed;
        self.layout = None;
        true
    }
}

/// Lifecycle misuse or a rejected placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// `show` called on a tooltip that was already shown.
    AlreadyShown { phase: TooltipPhase },
    /// Layout arrived for a tooltip that is not showing.
    NotShown { phase: TooltipPhase },
    /// Layout arrived after placement already happened.
    AlreadyPlaced,
    /// The measurements broke the resolver contract.
    Placement(PlacementError),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyShown { phase } => write!(f, "tooltip already shown (phase {phase:?})"),
            Self::NotShown { phase } => {
                write!(f, "layout received for a tooltip that is not showing (phase {phase:?})")
            }
            Self::AlreadyPlaced => write!(f, "tooltip is already placed"),
            Self::Placement(err) => write!(f, "placement rejected: {err}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlacementError> for SurfaceError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}
