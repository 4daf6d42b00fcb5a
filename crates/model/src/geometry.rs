//! Viewport and layout geometry types.
//!
//! These types describe the terminal viewport, the layout category derived
//! from its aspect ratio, and the target geometry of the dashboard surface.
//! The dimension calculation itself lives in the TUI crate; this module only
//! holds the data carried between components.

use serde::{Deserialize, Serialize};

/// The terminal viewport in character cells.
///
/// Read fresh from the host on every layout pass and never cached beyond a
/// single redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Viewport {
    /// Creates a viewport from column and row counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_model::Viewport;
    ///
    /// let vp = Viewport::new(120, 40);
    /// assert_eq!(vp.width, 120);
    /// ```
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the width-to-height aspect ratio.
    ///
    /// A zero-height viewport yields an infinite ratio rather than a NaN so
    /// that category classification stays total.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            f64::INFINITY
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// Layout category derived from the viewport shape.
///
/// Recomputed on every resize; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCategory {
    /// Very wide terminals: width above 200 columns, or aspect ratio above 2.5.
    Ultrawide,
    /// Aspect ratio above 1.8.
    Widescreen,
    /// Aspect ratio below 1.2 (tall, narrow terminals).
    Vertical,
    /// Everything else.
    Standard,
}

/// Whether the dashboard occupies a centered overlay or the whole viewport.
///
/// Chosen by configuration, never inferred from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Centered overlay sized smaller than the viewport.
    #[default]
    Floating,
    /// The dashboard replaces the entire current surface's content.
    Full,
}

/// Target geometry for the dashboard surface.
///
/// Widths and heights are clamped to a per-category minimum floor by the
/// dimension calculator, and never exceed the viewport. Offsets center the
/// block within the viewport; both are zero in full mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Content width in columns.
    pub width: u16,
    /// Content height in rows.
    pub height: u16,
    /// Row offset of the top-left corner within the viewport.
    pub row: u16,
    /// Column offset of the top-left corner within the viewport.
    pub col: u16,
}

impl Dimensions {
    /// Creates a dimensions value.
    #[must_use]
    pub fn new(width: u16, height: u16, row: u16, col: u16) -> Self {
        Self {
            width,
            height,
            row,
            col,
        }
    }

    /// Returns `true` if `other` has the same width and height.
    ///
    /// Offsets are ignored; a surface only needs a host resize when its
    /// extent changes, not when it is merely re-centered.
    #[must_use]
    pub fn same_extent(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}
