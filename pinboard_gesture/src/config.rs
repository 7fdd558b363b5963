// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tolerances and switches for gesture recognition.
///
/// Build one from [`GestureConfig::default`] and adjust it with the `with_*`
/// methods. Non-finite tolerances are ignored and negative ones use their
/// magnitude, so every tolerance stays a finite, non-negative distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    click_slop: f64,
    item_drag_slop: f64,
    center_snap_radius: f64,
    zoom_requires_modifier: bool,
}

impl GestureConfig {
    /// Default click slop, in pixels.
    pub const DEFAULT_CLICK_SLOP: f64 = 5.0;
    /// Default item drag slop, in canvas units.
    pub const DEFAULT_ITEM_DRAG_SLOP: f64 = 5.0;
    /// Default center snap radius, in pixels.
    pub const DEFAULT_CENTER_SNAP_RADIUS: f64 = 50.0;

    /// Returns a copy with a new click slop.
    #[must_use]
    pub fn with_click_slop(mut self, slop: f64) -> Self {
        if let Some(slop) = tolerance(slop) {
            self.click_slop = slop;
        }
        self
    }

    /// Returns a copy with a new item drag slop.
    #[must_use]
    pub fn with_item_drag_slop(mut self, slop: f64) -> Self {
        if let Some(slop) = tolerance(slop) {
            self.item_drag_slop = slop;
        }
        self
    }

    /// Returns a copy with a new center snap radius. Zero disables snapping.
    #[must_use]
    pub fn with_center_snap_radius(mut self, radius: f64) -> Self {
        if let Some(radius) = tolerance(radius) {
            self.center_snap_radius = radius;
        }
        self
    }

    /// Returns a copy that only zooms on wheel input while Ctrl or Meta is
    /// held, if `required` is set.
    #[must_use]
    pub fn with_zoom_requires_modifier(mut self, required: bool) -> Self {
        self.zoom_requires_modifier = required;
        self
    }

    /// Per-axis movement, in pixels, beyond which a background press is a
    /// drag rather than a click.
    #[must_use]
    pub fn click_slop(&self) -> f64 {
        self.click_slop
    }

    /// Per-axis displacement, in canvas units, beyond which an item drag
    /// counts as a move worth persisting.
    #[must_use]
    pub fn item_drag_slop(&self) -> f64 {
        self.item_drag_slop
    }

    /// Clicks within this many pixels of the viewport center are placed at
    /// canvas origin.
    #[must_use]
    pub fn center_snap_radius(&self) -> f64 {
        self.center_snap_radius
    }

    /// When set, the wheel only zooms while Ctrl or Meta is held.
    #[must_use]
    pub fn zoom_requires_modifier(&self) -> bool {
        self.zoom_requires_modifier
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_slop: Self::DEFAULT_CLICK_SLOP,
            item_drag_slop: Self::DEFAULT_ITEM_DRAG_SLOP,
            center_snap_radius: Self::DEFAULT_CENTER_SNAP_RADIUS,
            zoom_requires_modifier: false,
        }
    }
}

fn tolerance(value: f64) -> Option<f64> {
    value.is_finite().then_some(value.abs())
}
