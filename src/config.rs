//! Mount-time configuration for the two hosts.
//!
//! Both structs deserialize from the plain objects the page passes to
//! `mount`, using camelCase keys. Every field is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FolioError;
use crate::geom::Size;

/// Options accepted by the infinite canvas host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportConfig {
    /// Center on the anchor element (or a computed default) after first paint.
    pub center_on_mount: bool,
    /// Wrap the offset into one grid period so the content pans forever.
    pub infinite_scroll: bool,
    /// Width of one repeating tile of content, in pixels.
    pub grid_width: f64,
    /// Height of one repeating tile of content, in pixels.
    pub grid_height: f64,
}

impl ViewportConfig {
    /// Check that infinite mode has a usable period.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidGrid`] when `infinite_scroll` is set but
    /// either grid dimension is missing, non-positive, or not finite.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.infinite_scroll && self.grid_size().is_empty() {
            return Err(FolioError::InvalidGrid { width: self.grid_width, height: self.grid_height });
        }
        Ok(())
    }

    /// The wrap period, or `None` when wrapping is off.
    #[must_use]
    pub fn wrap_period(&self) -> Option<Size> {
        let size = self.grid_size();
        (self.infinite_scroll && !size.is_empty()).then_some(size)
    }

    #[must_use]
    pub fn grid_size(&self) -> Size {
        Size::new(self.grid_width, self.grid_height)
    }
}

/// Color scheme of the brain canvas. Only glyph and outline colors depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse exactly `"light"` / `"dark"`, the same names config objects accept.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Options accepted by the brain canvas host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    pub theme: Theme,
    /// Fixed RNG seed; a fresh random seed is used when absent.
    pub seed: Option<u64>,
}
