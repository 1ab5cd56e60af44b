#![forbid(unsafe_code)]

//! Placement resolver for pointer tooltips.
//!
//! A pointer tooltip is a message bubble plus a small triangular connector
//! that points at an anchor element. Given the anchor's screen rectangle, the
//! viewport, and the measured sizes of connector and bubble, [`resolve`]
//! decides:
//!
//! - whether the tooltip sits [`Above`](ResolvedSide::Above) or
//!   [`Below`](ResolvedSide::Below) the anchor, and how far down the tooltip
//!   container starts;
//! - how connector and bubble are anchored horizontally so the connector
//!   stays on the anchor's midpoint and the bubble stays on screen.
//!
//! The result is a [`Placement`]: layout instructions for a host to apply,
//! not absolute frames.
//!
//! ```
//! use ptip_layout::{
//!     BubbleHorizontal, ConnectorHorizontal, PlacementRequest, Rect, ResolvedSide, Size,
//!     Viewport, resolve,
//! };
//!
//! let request = PlacementRequest::new(Rect::new(0, 50, 20, 20), Viewport::new(400, 800))
//!     .connector(Size::new(20, 10))
//!     .centered_bubble(Size::new(320, 60))
//!     .connector_spacing(8);
//!
//! let placement = resolve(&request).unwrap();
//! assert_eq!(placement.side, ResolvedSide::Below);
//! assert_eq!(placement.connector_horizontal, ConnectorHorizontal::StartOffset(8));
//! assert_eq!(placement.bubble_horizontal, BubbleHorizontal::StartMargin(0));
//! ```

pub mod placement;
pub mod request;
pub mod resolver;
pub mod side;

pub use placement::{BubbleHorizontal, ConnectorHorizontal, Placement};
pub use ptip_core::geometry::{Point, Rect, Size, Viewport};
pub use request::{Element, PlacementError, PlacementRequest};
pub use resolver::resolve;
pub use side::{Edge, ResolvedSide, Side};
