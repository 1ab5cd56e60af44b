//! Resolver output.
//!
//! A [`Placement`] is a set of layout instructions rather than absolute
//! frames: which side to stack on, how far down the container starts, and
//! how the connector and bubble are anchored horizontally. Hosts apply it to
//! their own layout tree.

use serde::{Deserialize, Serialize};

use crate::side::{Edge, ResolvedSide};

/// Horizontal anchoring of the connector inside the full-width container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorHorizontal {
    /// Start and end both bound to the parent: centered.
    CenteredInParent,
    /// Start edge bound to the parent's start edge with this margin.
    StartOffset(i32),
    /// End edge bound to the parent's end edge with this margin.
    EndOffset(i32),
}

/// Horizontal anchoring of the bubble.
///
/// `StartMargin` and `EndMargin` replace the bubble's default binding on the
/// opposite edge; only one edge is bound afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleHorizontal {
    /// Keep the layout's own placement (centered).
    #[default]
    Default,
    /// Bound to the parent's start edge only, with this margin.
    StartMargin(i32),
    /// Bound to the parent's end edge only, with this margin.
    EndMargin(i32),
}

/// Result of one [`crate::resolve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub side: ResolvedSide,
    /// Offset of the tooltip container below the top inset. Negative when the
    /// tooltip would start above the window; not clamped.
    pub container_top_margin: i32,
    pub connector_horizontal: ConnectorHorizontal,
    /// Connector triangle flipped to point upward.
    pub connector_rotated: bool,
    pub bubble_horizontal: BubbleHorizontal,
}

impl Placement {
    /// Rotation to apply to the connector, in degrees.
    #[must_use]
    pub fn connector_rotation_degrees(&self) -> f32 {
        if self.connector_rotated { 180.0 } else { 0.0 }
    }

    /// Container edge the connector binds to.
    #[must_use]
    pub const fn connector_edge(&self) -> Edge {
        self.side.connector_edge()
    }

    /// Bubble edge bound to the connector's opposite edge.
    #[must_use]
    pub const fn bubble_edge(&self) -> Edge {
        self.side.bubble_edge()
    }

    /// True when the bubble had to be moved off its default position.
    #[must_use]
    pub fn bubble_shifted(&self) -> bool {
        self.bubble_horizontal != BubbleHorizontal::Default
    }
}
