// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where canvas-space origin sits relative to the viewport.
///
/// This enum is consulted by [`crate::CanvasViewport`] whenever it converts
/// between coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OriginMode {
    /// The visual center of the viewport is canvas origin `(0, 0)` when the
    /// transform is untranslated.
    ///
    /// Conversions need the viewport size; until one is known they behave
    /// like [`OriginMode::TopLeft`].
    #[default]
    Centered,
    /// Viewport pixel `(0, 0)` is canvas origin when the transform is
    /// untranslated. The viewport size never enters the conversion.
    TopLeft,
}

/// Direction of a discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase the scale by one step.
    In,
    /// Decrease the scale by one step.
    Out,
}

impl ZoomDirection {
    /// Maps a vertical wheel delta onto a zoom direction.
    ///
    /// Only the sign matters: scrolling up (negative delta) zooms in, scrolling
    /// down zooms out. A zero or non-finite delta yields `None`.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        Some(if delta_y < 0.0 { Self::In } else { Self::Out })
    }

    /// `1.0` for [`ZoomDirection::In`], `-1.0` for [`ZoomDirection::Out`].
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}
