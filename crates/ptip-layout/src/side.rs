//! Vertical side selection.

use serde::{Deserialize, Serialize};

/// Requested side of the anchor the tooltip should sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Tooltip above the anchor, connector pointing down.
    Above,
    /// Tooltip below the anchor, connector pointing up.
    Below,
    /// Let the resolver pick the side with more room.
    #[default]
    Auto,
}

impl Side {
    /// Parse a side name (`above`, `below`, `auto`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "above" | "top" => Some(Self::Above),
            "below" | "bottom" => Some(Self::Below),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::Auto => "auto",
        }
    }

    /// The concrete side, if the caller fixed one.
    #[must_use]
    pub const fn fixed(self) -> Option<ResolvedSide> {
        match self {
            Self::Above => Some(ResolvedSide::Above),
            Self::Below => Some(ResolvedSide::Below),
            Self::Auto => None,
        }
    }
}

impl From<ResolvedSide> for Side {
    fn from(side: ResolvedSide) -> Self {
        match side {
            ResolvedSide::Above => Self::Above,
            ResolvedSide::Below => Self::Below,
        }
    }
}

/// The side the resolver settled on. Never `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedSide {
    Above,
    Below,
}

impl ResolvedSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }

    /// Whether the connector triangle is flipped to point upward.
    #[must_use]
    pub const fn rotates_connector(self) -> bool {
        matches!(self, Self::Below)
    }

    /// Container edge the connector is bound to.
    ///
    /// The bubble binds its edge of the same name to the connector's opposite
    /// edge, stacking away from the anchor.
    #[must_use]
    pub const fn connector_edge(self) -> Edge {
        match self {
            Self::Above => Edge::Bottom,
            Self::Below => Edge::Top,
        }
    }

    /// Bubble edge bound to the connector (`Above`: bubble bottom to connector
    /// top, `Below`: bubble top to connector bottom).
    #[must_use]
    pub const fn bubble_edge(self) -> Edge {
        self.connector_edge()
    }
}

/// A horizontal edge of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}
