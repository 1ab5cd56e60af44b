//! End-to-end placement scenarios on a 400x800 portrait display.
//!
//! The bubble is 320x60 and centered (span [40, 360]), the connector is
//! 20x10, spacing is 8 and the shadow padding is 4 unless stated otherwise.

use ptip_layout::{
    BubbleHorizontal, ConnectorHorizontal, Placement, PlacementError, PlacementRequest, Rect,
    ResolvedSide, Side, Size, Viewport, resolve,
};

fn request(anchor: Rect) -> PlacementRequest {
    PlacementRequest::new(anchor, Viewport::new(400, 800))
        .connector(Size::new(20, 10))
        .centered_bubble(Size::new(320, 60))
        .connector_spacing(8)
        .shadow_padding(4)
}

fn place(request: PlacementRequest) -> Placement {
    resolve(&request).expect("valid request")
}

// ── Vertical ────────────────────────────────────────────────────────────

#[test]
fn scenario_a_upper_anchor_goes_below() {
    let p = place(request(Rect::new(100, 50, 40, 20)));
    assert_eq!(p.side, ResolvedSide::Below);
    assert!(p.connector_rotated);
    // anchor bottom 70 - inset 0 - shadow 4
    assert_eq!(p.container_top_margin, 66);
}

#[test]
fn scenario_b_lower_anchor_goes_above() {
    let p = place(request(Rect::new(180, 700, 40, 20)));
    assert_eq!(p.side, ResolvedSide::Above);
    assert!(!p.connector_rotated);
    // 700 - (10 + 60) - 0 - 4
    assert_eq!(p.container_top_margin, 626);
}

#[test]
fn explicit_side_overrides_auto_choice() {
    let p = place(request(Rect::new(100, 50, 40, 20)).side(Side::Above));
    assert_eq!(p.side, ResolvedSide::Above);
    assert_eq!(p.container_top_margin, 50 - 70 - 4);

    let p = place(request(Rect::new(180, 700, 40, 20)).side(Side::Below));
    assert_eq!(p.side, ResolvedSide::Below);
    assert_eq!(p.container_top_margin, 720 - 4);
}

#[test]
fn opaque_status_bar_is_subtracted() {
    let mut req = request(Rect::new(100, 50, 40, 20));
    req.viewport.top_inset = 24;
    let p = place(req);
    assert_eq!(p.side, ResolvedSide::Below);
    assert_eq!(p.container_top_margin, 70 - 24 - 4);
}

#[test]
fn negative_shadow_padding_lowers_container() {
    let anchor = Rect::new(100, 50, 40, 20);
    let p = place(request(anchor).shadow_padding(-2));
    assert_eq!(p.side, ResolvedSide::Below);
    assert_eq!(p.container_top_margin, anchor.bottom() + 2);

    let p = place(request(Rect::new(180, 700, 40, 20)).shadow_padding(-2));
    assert_eq!(p.side, ResolvedSide::Above);
    assert_eq!(p.container_top_margin, 700 - 70 + 2);
}

#[test]
fn negative_top_inset_is_plain_arithmetic() {
    let mut req = request(Rect::new(100, 50, 40, 20));
    req.viewport.top_inset = -5;
    let p = place(req);
    assert_eq!(p.side, ResolvedSide::Below);
    assert_eq!(p.container_top_margin, 70 + 5 - 4);

    // mid_y = 395 + 10 + 5 = 410 > 400
    let mut req = request(Rect::new(100, 395, 40, 20));
    req.viewport.top_inset = -5;
    assert_eq!(place(req).side, ResolvedSide::Above);
}

// ── Horizontal ──────────────────────────────────────────────────────────

#[test]
fn scenario_c_centered_anchor() {
    for side in [Side::Above, Side::Below, Side::Auto] {
        let p = place(request(Rect::new(180, 100, 40, 20)).side(side));
        assert_eq!(p.connector_horizontal, ConnectorHorizontal::CenteredInParent);
        assert_eq!(p.bubble_horizontal, BubbleHorizontal::Default);
    }
}

#[test]
fn scenario_d_left_edge_clamp() {
    // mid = 10, tentative connector left 0, bubble left -8
    let p = place(request(Rect::new(0, 100, 20, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::StartOffset(8));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::StartMargin(0));
}

#[test]
fn right_edge_clamp() {
    // mid = 395, connector right 405, bubble right 413 > 400
    let p = place(request(Rect::new(390, 100, 10, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::EndOffset(8));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::EndMargin(0));
}

#[test]
fn left_anchor_inside_bubble_moves_connector_only() {
    // mid = 120 >= 40 + 8
    let p = place(request(Rect::new(100, 50, 40, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::StartOffset(110));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::Default);
}

#[test]
fn right_anchor_inside_bubble_moves_connector_only() {
    // mid = 250 <= 360 - 8, end offset 400 - 250 - 10
    let p = place(request(Rect::new(240, 50, 20, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::EndOffset(140));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::Default);
}

#[test]
fn left_anchor_near_bubble_edge_nudges_bubble() {
    // mid = 30 < 48, connector left 20, bubble left 12 -> one step to 4
    let p = place(request(Rect::new(20, 50, 20, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::StartOffset(20));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::StartMargin(4));
}

#[test]
fn right_anchor_near_bubble_edge_nudges_bubble() {
    // mid = 370 > 352, connector right 380, bubble right 388 -> one step to 396
    let p = place(request(Rect::new(360, 50, 20, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::EndOffset(20));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::EndMargin(4));
}

#[test]
fn anchor_left_of_screen_still_clamps() {
    let p = place(request(Rect::new(-100, 50, 20, 20)));
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::StartOffset(8));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::StartMargin(0));
}

#[test]
fn zero_size_elements_are_placed() {
    let req = PlacementRequest::new(Rect::new(0, 0, 0, 0), Viewport::new(400, 800));
    let p = place(req);
    assert_eq!(p.side, ResolvedSide::Below);
    assert_eq!(p.container_top_margin, 0);
    // Default bubble span starts at 0 and spacing is 0, so the anchor
    // midpoint counts as inside the bubble.
    assert_eq!(p.connector_horizontal, ConnectorHorizontal::StartOffset(0));
    assert_eq!(p.bubble_horizontal, BubbleHorizontal::Default);
}

// ── Contract violations ─────────────────────────────────────────────────

#[test]
fn zero_area_viewport_is_rejected() {
    let req = PlacementRequest::new(Rect::new(0, 0, 10, 10), Viewport::new(400, 0));
    assert_eq!(
        resolve(&req),
        Err(PlacementError::EmptyViewport {
            width: 400,
            height: 0
        })
    );
}

#[test]
fn negative_anchor_is_rejected() {
    let req = request(Rect::new(0, 0, -5, 10));
    assert!(matches!(
        resolve(&req),
        Err(PlacementError::NegativeAnchorSize { .. })
    ));
}
