//! Responsive dimension calculation.
//!
//! [`compute`] is the single source of truth for dashboard geometry: it
//! classifies the viewport into a [`LayoutCategory`] and derives the target
//! surface dimensions for the configured [`LayoutMode`]. Pure and
//! deterministic; safe to call on every frame.

use portico_model::{Dimensions, LayoutCategory, LayoutMode, Viewport};

/// Width above which a terminal is ultrawide regardless of aspect ratio.
const ULTRAWIDE_WIDTH: u16 = 200;

/// Aspect ratio above which a terminal is ultrawide.
const ULTRAWIDE_ASPECT: f64 = 2.5;

/// Aspect ratio above which a terminal is widescreen.
const WIDESCREEN_ASPECT: f64 = 1.8;

/// Aspect ratio below which a terminal is vertical.
const VERTICAL_ASPECT: f64 = 1.2;

/// Per-category sizing profile.
///
/// Fractions apply in floating mode; full mode always uses the whole
/// viewport. Minimums apply in both modes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Profile {
    width_fraction: f64,
    height_fraction: f64,
    min_width: u16,
    min_height: u16,
}

/// The computed layout for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The category the viewport classified into.
    pub category: LayoutCategory,
    /// Target geometry for the dashboard surface.
    pub dims: Dimensions,
}

fn profile(category: LayoutCategory) -> Profile {
    match category {
        LayoutCategory::Ultrawide => Profile {
            width_fraction: 0.4,
            height_fraction: 0.8,
            min_width: 80,
            min_height: 20,
        },
        LayoutCategory::Widescreen => Profile {
            width_fraction: 0.6,
            height_fraction: 0.8,
            min_width: 70,
            min_height: 18,
        },
        LayoutCategory::Vertical => Profile {
            width_fraction: 0.9,
            height_fraction: 0.6,
            min_width: 40,
            min_height: 12,
        },
        LayoutCategory::Standard => Profile {
            width_fraction: 0.7,
            height_fraction: 0.75,
            min_width: 60,
            min_height: 15,
        },
    }
}

/// The minimum width floor of a category.
#[must_use]
pub fn min_width(category: LayoutCategory) -> u16 {
    profile(category).min_width
}

/// The minimum height floor of a category.
#[must_use]
pub fn min_height(category: LayoutCategory) -> u16 {
    profile(category).min_height
}

/// Classifies a viewport into its layout category.
///
/// Rules are evaluated in order; the first match wins:
///
/// 1. width > 200 or aspect ratio > 2.5 → [`LayoutCategory::Ultrawide`]
/// 2. aspect ratio > 1.8 → [`LayoutCategory::Widescreen`]
/// 3. aspect ratio < 1.2 → [`LayoutCategory::Vertical`]
/// 4. otherwise → [`LayoutCategory::Standard`]
///
/// # Examples
///
/// ```
/// use portico_model::{LayoutCategory, Viewport};
/// use portico_tui::geometry::classify;
///
/// assert_eq!(classify(Viewport::new(300, 50)), LayoutCategory::Ultrawide);
/// assert_eq!(classify(Viewport::new(100, 60)), LayoutCategory::Standard);
/// ```
#[must_use]
pub fn classify(viewport: Viewport) -> LayoutCategory {
    let aspect = viewport.aspect_ratio();
    if viewport.width > ULTRAWIDE_WIDTH || aspect > ULTRAWIDE_ASPECT {
        LayoutCategory::Ultrawide
    } else if aspect > WIDESCREEN_ASPECT {
        LayoutCategory::Widescreen
    } else if aspect < VERTICAL_ASPECT {
        LayoutCategory::Vertical
    } else {
        LayoutCategory::Standard
    }
}

/// Computes the target dashboard geometry for a viewport.
///
/// In floating mode the content block takes the category's fraction of the
/// viewport, raised to the category floor, capped at the viewport, and
/// centered. In full mode it spans the whole viewport with zero offsets.
///
/// Viewports smaller than the floor clamp to the viewport: invalid geometry
/// is clamped, never an error.
///
/// # Examples
///
/// ```
/// use portico_model::{LayoutMode, Viewport};
/// use portico_tui::geometry::compute;
///
/// let layout = compute(Viewport::new(120, 40), LayoutMode::Floating);
/// assert!(layout.dims.width <= 120);
/// assert!(layout.dims.col > 0); // centered
///
/// let full = compute(Viewport::new(120, 40), LayoutMode::Full);
/// assert_eq!(full.dims.width, 120);
/// assert_eq!(full.dims.col, 0);
/// ```
#[must_use]
pub fn compute(viewport: Viewport, mode: LayoutMode) -> Layout {
    let category = classify(viewport);
    let profile = profile(category);

    let (width_fraction, height_fraction) = match mode {
        LayoutMode::Floating => (profile.width_fraction, profile.height_fraction),
        LayoutMode::Full => (1.0, 1.0),
    };

    let width = scaled(viewport.width, width_fraction, profile.min_width);
    let height = scaled(viewport.height, height_fraction, profile.min_height);

    let (row, col) = match mode {
        LayoutMode::Floating => (
            (viewport.height - height) / 2,
            (viewport.width - width) / 2,
        ),
        LayoutMode::Full => (0, 0),
    };

    Layout {
        category,
        dims: Dimensions::new(width, height, row, col),
    }
}

/// Applies a fraction to an extent, raised to the floor, capped at the extent.
fn scaled(extent: u16, fraction: f64, floor: u16) -> u16 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fractional = (f64::from(extent) * fraction).floor() as u16;
    fractional.max(floor).min(extent)
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Dimensions never exceed the viewport, in either mode.
        #[test]
        fn dims_bounded_by_viewport(
            width in 1u16..=500,
            height in 1u16..=200,
            full in any::<bool>(),
        ) {
            let mode = if full { LayoutMode::Full } else { LayoutMode::Floating };
            let layout = compute(Viewport::new(width, height), mode);
            prop_assert!(layout.dims.width <= width);
            prop_assert!(layout.dims.height <= height);
        }

        /// The floor holds whenever the viewport admits it.
        #[test]
        fn floor_holds_when_viewport_admits(
            width in 1u16..=500,
            height in 1u16..=200,
        ) {
            let viewport = Viewport::new(width, height);
            let layout = compute(viewport, LayoutMode::Floating);
            if width >= min_width(layout.category) {
                prop_assert!(layout.dims.width >= min_width(layout.category));
            }
            if height >= min_height(layout.category) {
                prop_assert!(layout.dims.height >= min_height(layout.category));
            }
        }

        /// The block plus its offsets stays inside the viewport.
        #[test]
        fn centered_block_stays_inside(
            width in 1u16..=500,
            height in 1u16..=200,
        ) {
            let layout = compute(Viewport::new(width, height), LayoutMode::Floating);
            prop_assert!(layout.dims.col + layout.dims.width <= width);
            prop_assert!(layout.dims.row + layout.dims.height <= height);
        }

        /// Classification is total and stable.
        #[test]
        fn classification_is_stable(
            width in 1u16..=500,
            height in 1u16..=200,
        ) {
            let viewport = Viewport::new(width, height);
            prop_assert_eq!(classify(viewport), classify(viewport));
        }
    }
}
