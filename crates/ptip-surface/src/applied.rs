//! Applying a [`Placement`] to concrete element frames.
//!
//! The tooltip container spans the full viewport width and starts
//! `container_top_margin` below the top inset. Its content starts
//! `shadow_padding` further down. Connector and bubble are stacked inside it
//! according to the resolved side, and anchored horizontally from the
//! viewport edges.

use ptip_core::geometry::{Point, Rect};
use ptip_layout::{
    BubbleHorizontal, ConnectorHorizontal, Placement, PlacementRequest, ResolvedSide,
};
use serde::{Deserialize, Serialize};

/// Screen frames of the placed tooltip elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedLayout {
    pub placement: Placement,
    pub connector: Rect,
    pub bubble: Rect,
    /// Rotation applied to the connector, in degrees.
    pub connector_rotation: f32,
}

impl AppliedLayout {
    /// Resolve element frames for `placement`, computed from `request`.
    #[must_use]
    pub fn apply(placement: Placement, request: &PlacementRequest) -> Self {
        let viewport = request.viewport;
        let connector_size = request.connector;
        let bubble_size = request.bubble;

        let content_top = viewport
            .top_inset
            .saturating_add(placement.container_top_margin)
            .saturating_add(request.shadow_padding);
        let (connector_y, bubble_y) = match placement.side {
            ResolvedSide::Above => (
                content_top.saturating_add(bubble_size.height),
                content_top,
            ),
            ResolvedSide::Below => (
                content_top,
                content_top.saturating_add(connector_size.height),
            ),
        };

        let connector_x = match placement.connector_horizontal {
            ConnectorHorizontal::CenteredInParent => {
                viewport.width.saturating_sub(connector_size.width) / 2
            }
            ConnectorHorizontal::StartOffset(offset) => offset,
            ConnectorHorizontal::EndOffset(offset) => viewport
                .width
                .saturating_sub(offset)
                .saturating_sub(connector_size.width),
        };
        let bubble_x = match placement.bubble_horizontal {
            BubbleHorizontal::Default => request.bubble_left,
            BubbleHorizontal::StartMargin(margin) => margin,
            BubbleHorizontal::EndMargin(margin) => viewport
                .width
                .saturating_sub(margin)
                .saturating_sub(bubble_size.width),
        };

        Self {
            placement,
            connector: Rect::from_origin(Point::new(connector_x, connector_y), connector_size),
            bubble: Rect::from_origin(Point::new(bubble_x, bubble_y), bubble_size),
            connector_rotation: placement.connector_rotation_degrees(),
        }
    }

    /// Smallest rectangle covering connector and bubble.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.connector.union(&self.bubble)
    }

    /// Whether a point hits the connector or the bubble.
    #[must_use]
    pub fn hit(&self, point: Point) -> bool {
        self.connector.contains(point) || self.bubble.contains(point)
    }

    /// The connector's tip: the point that touches the anchor edge.
    #[must_use]
    pub fn connector_tip(&self) -> Point {
        let y = match self.placement.side {
            ResolvedSide::Above => self.connector.bottom(),
            ResolvedSide::Below => self.connector.y,
        };
        Point::new(self.connector.center_x(), y)
    }
}
