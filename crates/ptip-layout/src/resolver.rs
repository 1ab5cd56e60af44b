//! The placement resolver.
//!
//! # Vertical
//!
//! A fixed [`Side`](crate::Side) is used as given. `Auto` compares the
//! anchor's vertical midpoint (measured below the top inset) against half the
//! viewport height: anchors in the lower half get the tooltip above them,
//! ties go below. The container top margin stacks connector and bubble
//! against the anchor edge and is never clamped.
//!
//! # Horizontal
//!
//! The connector tracks the anchor's horizontal midpoint. The bubble keeps its
//! default (centered) position while the midpoint is at least one spacing unit
//! inside the bubble's near edge. Otherwise the bubble is pinned to the near
//! screen edge, either clamped flush against it or nudged toward it in whole
//! spacing steps while room remains and the bubble's center has not crossed
//! the anchor.
//!
//! The nudge is computed as a step count, not a loop, so zero spacing and
//! very large coordinates cost nothing.

use std::cmp::Ordering;

use ptip_core::{debug, debug_span, trace, warn};

use crate::placement::{BubbleHorizontal, ConnectorHorizontal, Placement};
use crate::request::{PlacementError, PlacementRequest};
use crate::side::ResolvedSide;

/// Resolve a tooltip placement.
///
/// Deterministic and free of side effects. Returns an error only when the
/// request breaks the caller contract (see [`PlacementRequest::validate`]).
pub fn resolve(request: &PlacementRequest) -> Result<Placement, PlacementError> {
    if let Err(err) = request.validate() {
        warn!(error = %err, "rejected placement request");
        return Err(err);
    }

    let span = debug_span!("ptip.resolve", requested = request.side.as_str());
    let _guard = span.enter();

    let side = resolve_side(request);
    let container_top_margin = container_top_margin(request, side);
    let (connector_horizontal, bubble_horizontal) = resolve_horizontal(request);

    debug!(
        side = side.as_str(),
        container_top_margin,
        connector = ?connector_horizontal,
        bubble = ?bubble_horizontal,
        "resolved placement"
    );

    Ok(Placement {
        side,
        container_top_margin,
        connector_horizontal,
        connector_rotated: side.rotates_connector(),
        bubble_horizontal,
    })
}

fn resolve_side(request: &PlacementRequest) -> ResolvedSide {
    if let Some(side) = request.side.fixed() {
        return side;
    }
    let mid_y = request
        .anchor
        .center_y()
        .saturating_sub(request.viewport.top_inset);
    if mid_y > request.viewport.half_height() {
        ResolvedSide::Above
    } else {
        ResolvedSide::Below
    }
}

fn container_top_margin(request: &PlacementRequest, side: ResolvedSide) -> i32 {
    let inset = request.viewport.top_inset;
    let shadow = request.shadow_padding;
    match side {
        ResolvedSide::Above => {
            let tooltip_height = request.connector.height.saturating_add(request.bubble.height);
            request
                .anchor
                .y
                .saturating_sub(tooltip_height)
                .saturating_sub(inset)
                .saturating_sub(shadow)
        }
        ResolvedSide::Below => request
            .anchor
            .bottom()
            .saturating_sub(inset)
            .saturating_sub(shadow),
    }
}

fn resolve_horizontal(request: &PlacementRequest) -> (ConnectorHorizontal, BubbleHorizontal) {
    // Widen once so intermediate sums cannot overflow.
    let width = i64::from(request.viewport.width);
    let half = i64::from(request.viewport.half_width());
    let mid = i64::from(request.anchor.x) + i64::from(request.anchor.width / 2);
    let spacing = i64::from(request.connector_spacing);
    let half_connector = i64::from(request.connector.width / 2);
    let half_bubble = i64::from(request.bubble.width / 2);

    match mid.cmp(&half) {
        Ordering::Equal => (
            ConnectorHorizontal::CenteredInParent,
            BubbleHorizontal::Default,
        ),
        Ordering::Less => {
            let connector_left = mid - half_connector;
            if mid >= i64::from(request.bubble_left) + spacing {
                return (
                    ConnectorHorizontal::StartOffset(narrow(connector_left)),
                    BubbleHorizontal::Default,
                );
            }

            let bubble_left = connector_left - spacing;
            if bubble_left < 0 {
                trace!("bubble clamped to start edge");
                return (
                    ConnectorHorizontal::StartOffset(narrow(spacing)),
                    BubbleHorizontal::StartMargin(0),
                );
            }

            // Each step keeps the bubble strictly right of the screen edge and
            // its center at or right of the anchor.
            let limit = (bubble_left - 1).min(bubble_left + half_bubble - mid);
            let bubble_left = bubble_left - nudge_distance(limit, spacing);
            trace!(bubble_left, "bubble nudged toward start edge");
            (
                ConnectorHorizontal::StartOffset(narrow(connector_left)),
                BubbleHorizontal::StartMargin(narrow(bubble_left)),
            )
        }
        Ordering::Greater => {
            let connector_right = mid + half_connector;
            if mid <= i64::from(request.bubble_right) - spacing {
                return (
                    ConnectorHorizontal::EndOffset(narrow(width - connector_right)),
                    BubbleHorizontal::Default,
                );
            }

            let bubble_right = connector_right + spacing;
            if bubble_right > width {
                trace!("bubble clamped to end edge");
                return (
                    ConnectorHorizontal::EndOffset(narrow(spacing)),
                    BubbleHorizontal::EndMargin(0),
                );
            }

            let limit = (width - bubble_right - 1).min(mid + half_bubble - bubble_right);
            let bubble_right = bubble_right + nudge_distance(limit, spacing);
            trace!(bubble_right, "bubble nudged toward end edge");
            (
                ConnectorHorizontal::EndOffset(narrow(width - connector_right)),
                BubbleHorizontal::EndMargin(narrow(width - bubble_right)),
            )
        }
    }
}

/// Largest multiple of `spacing` not exceeding `limit`.
///
/// Zero when `limit` is negative or `spacing` is zero (no step is possible
/// without overlapping the edge, or a step would not move anything).
#[inline]
fn nudge_distance(limit: i64, spacing: i64) -> i64 {
    if spacing <= 0 || limit < 0 {
        return 0;
    }
    (limit / spacing) * spacing
}

#[inline]
fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
