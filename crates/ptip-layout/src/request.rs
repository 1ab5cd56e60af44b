//! Resolver input and its validation.

use std::fmt;

use ptip_core::geometry::{Rect, Size, Viewport};
use serde::{Deserialize, Serialize};

use crate::side::Side;

/// Which tooltip element a size belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Connector,
    Bubble,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connector => f.write_str("connector"),
            Self::Bubble => f.write_str("bubble"),
        }
    }
}

/// Everything the resolver needs for one placement.
///
/// `bubble_left`/`bubble_right` are the bubble's current horizontal screen
/// span, before any placement has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub anchor: Rect,
    pub viewport: Viewport,
    pub side: Side,
    pub connector: Size,
    pub bubble: Size,
    pub bubble_left: i32,
    pub bubble_right: i32,
    /// Horizontal step unit between connector and bubble edge.
    pub connector_spacing: i32,
    /// Padding reserved around the tooltip for its drop shadow.
    pub shadow_padding: i32,
}

impl PlacementRequest {
    /// Create a request with zero-size elements and no spacing.
    ///
    /// The bubble span defaults to the full viewport width.
    #[must_use]
    pub fn new(anchor: Rect, viewport: Viewport) -> Self {
        Self {
            anchor,
            viewport,
            side: Side::Auto,
            connector: Size::ZERO,
            bubble: Size::ZERO,
            bubble_left: 0,
            bubble_right: viewport.width,
            connector_spacing: 0,
            shadow_padding: 0,
        }
    }

    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the measured connector size.
    #[must_use]
    pub fn connector(mut self, size: Size) -> Self {
        self.connector = size;
        self
    }

    /// Set the measured bubble size.
    #[must_use]
    pub fn bubble(mut self, size: Size) -> Self {
        self.bubble = size;
        self
    }

    /// Set the bubble's current left and right screen coordinates.
    #[must_use]
    pub fn bubble_span(mut self, left: i32, right: i32) -> Self {
        self.bubble_left = left;
        self.bubble_right = right;
        self
    }

    /// Set bubble size and center its span horizontally in the viewport.
    #[must_use]
    pub fn centered_bubble(self, size: Size) -> Self {
        let (left, right) = self.viewport.centered_span(size.width);
        self.bubble(size).bubble_span(left, right)
    }

    #[must_use]
    pub fn connector_spacing(mut self, spacing: i32) -> Self {
        self.connector_spacing = spacing;
        self
    }

    #[must_use]
    pub fn shadow_padding(mut self, padding: i32) -> Self {
        self.shadow_padding = padding;
        self
    }

    /// Check the caller contract: non-negative extents, non-negative spacing,
    /// and a viewport with usable area.
    ///
    /// Spacing is the step unit of the nudge; a negative step never reaches
    /// the screen edge. Top inset and shadow padding only shift the container
    /// margin and may take any value.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.viewport.is_empty() {
            return Err(PlacementError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.anchor.width < 0 || self.anchor.height < 0 {
            return Err(PlacementError::NegativeAnchorSize {
                width: self.anchor.width,
                height: self.anchor.height,
            });
        }
        for (element, size) in [
            (Element::Connector, self.connector),
            (Element::Bubble, self.bubble),
        ] {
            if size.is_negative() {
                return Err(PlacementError::NegativeElementSize { element, size });
            }
        }
        if self.connector_spacing < 0 {
            return Err(PlacementError::NegativeSpacing {
                spacing: self.connector_spacing,
            });
        }
        Ok(())
    }
}

/// Caller contract violations rejected by [`crate::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    EmptyViewport { width: i32, height: i32 },
    NegativeAnchorSize { width: i32, height: i32 },
    NegativeElementSize { element: Element, size: Size },
    NegativeSpacing { spacing: i32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport { width, height } => {
                write!(f, "viewport {width}x{height} has no usable area")
            }
            Self::NegativeAnchorSize { width, height } => {
                write!(f, "anchor size {width}x{height} has a negative extent")
            }
            Self::NegativeElementSize { element, size } => write!(
                f,
                "{element} size {}x{} has a negative extent",
                size.width, size.height
            ),
            Self::NegativeSpacing { spacing } => {
                write!(f, "connector spacing must be non-negative (got {spacing})")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
