//! Tooltip configuration.
//!
//! Defaults match a typical phone density (8 px connector spacing, 4 px
//! shadow padding). Hosts can override them in code through the builder
//! setters, or from the environment:
//!
//! | variable | values |
//! |---|---|
//! | `PTIP_POSITION` | `above`, `below`, `auto` |
//! | `PTIP_CONNECTOR_SPACING` | non-negative pixels |
//! | `PTIP_SHADOW_PADDING` | non-negative pixels |

use std::fmt;

use ptip_layout::Side;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the requested side.
pub const ENV_POSITION: &str = "PTIP_POSITION";
/// Environment variable overriding the connector spacing.
pub const ENV_CONNECTOR_SPACING: &str = "PTIP_CONNECTOR_SPACING";
/// Environment variable overriding the shadow padding.
pub const ENV_SHADOW_PADDING: &str = "PTIP_SHADOW_PADDING";

/// Default horizontal step between connector and bubble edge, in pixels.
pub const DEFAULT_CONNECTOR_SPACING: i32 = 8;
/// Default drop-shadow padding around the tooltip, in pixels.
pub const DEFAULT_SHADOW_PADDING: i32 = 4;

/// Tooltip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Requested side (default: `Auto`).
    pub position: Side,
    /// Connector spacing in pixels.
    pub connector_spacing: i32,
    /// Shadow padding in pixels.
    pub shadow_padding: i32,
    /// Dismiss when a touch lands outside the tooltip (default: true).
    pub dismiss_on_outside_touch: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            position: Side::Auto,
            connector_spacing: DEFAULT_CONNECTOR_SPACING,
            shadow_padding: DEFAULT_SHADOW_PADDING,
            dismiss_on_outside_touch: true,
        }
    }
}

impl TooltipConfig {
    /// Set the requested side.
    #[must_use]
    pub fn position(mut self, position: Side) -> Self {
        self.position = position;
        self
    }

    /// Set connector spacing in pixels.
    #[must_use]
    pub fn connector_spacing(mut self, spacing: i32) -> Self {
        self.connector_spacing = spacing;
        self
    }

    /// Set shadow padding in pixels.
    #[must_use]
    pub fn shadow_padding(mut self, padding: i32) -> Self {
        self.shadow_padding = padding;
        self
    }

    /// Set outside-touch dismissal.
    #[must_use]
    pub fn dismiss_on_outside_touch(mut self, dismiss: bool) -> Self {
        self.dismiss_on_outside_touch = dismiss;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through a custom environment lookup (for tests).
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_POSITION) {
            config.position = Side::parse(&value).ok_or(ConfigError::InvalidPosition { value })?;
        }
        if let Some(spacing) = env_pixels(&get_env, ENV_CONNECTOR_SPACING)? {
            config.connector_spacing = spacing;
        }
        if let Some(padding) = env_pixels(&get_env, ENV_SHADOW_PADDING)? {
            config.shadow_padding = padding;
        }
        Ok(config)
    }
}

fn env_pixels<F>(get_env: &F, key: &'static str) -> Result<Option<i32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = get_env(key) else {
        return Ok(None);
    };
    match value.trim().parse::<i32>() {
        Ok(pixels) if pixels >= 0 => Ok(Some(pixels)),
        _ => Err(ConfigError::InvalidPixels { key, value }),
    }
}

/// Malformed configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPosition { value: String },
    InvalidPixels { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { value } => write!(
                f,
                "invalid {ENV_POSITION} value {value:?} (expected above, below or auto)"
            ),
            Self::InvalidPixels { key, value } => {
                write!(f, "invalid {key} value {value:?} (expected non-negative pixels)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
