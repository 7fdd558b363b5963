// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::OriginMode;

/// Static configuration for a [`crate::CanvasViewport`].
///
/// Build one from [`CanvasConfig::default`] and adjust it with the `with_*`
/// methods. The builders keep the configuration self-consistent: scale limits
/// are normalized so that `min_scale <= max_scale`, and non-positive steps or
/// sizes are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    min_scale: f64,
    max_scale: f64,
    default_scale: f64,
    zoom_step: f64,
    fit_margin: f64,
    reference_size: f64,
    origin_mode: OriginMode,
}

impl CanvasConfig {
    /// Default lower bound for the scale.
    pub const DEFAULT_MIN_SCALE: f64 = 0.3;
    /// Default upper bound for the scale.
    pub const DEFAULT_MAX_SCALE: f64 = 2.0;
    /// Scale used before the viewport has been fitted to a container.
    pub const DEFAULT_SCALE: f64 = 1.0;
    /// Scale change applied by one zoom step (wheel notch or button press).
    pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
    /// Margin, in viewport pixels, kept on each side when fitting the board.
    pub const DEFAULT_FIT_MARGIN: f64 = 20.0;
    /// Extent of the reference board, in canvas units, used when fitting.
    pub const DEFAULT_REFERENCE_SIZE: f64 = 2000.0;

    /// Returns a copy with new scale limits.
    ///
    /// Reversed limits are swapped. Non-finite or non-positive limits are
    /// ignored, since a zero scale would make the transform non-invertible.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        if !(min_scale.is_finite() && max_scale.is_finite())
            || min_scale <= 0.0
            || max_scale <= 0.0
        {
            return self;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with a new default scale.
    #[must_use]
    pub fn with_default_scale(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.default_scale = scale;
        }
        self
    }

    /// Returns a copy with a new zoom step. The sign of `step` is ignored.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        let step = step.abs();
        if step.is_finite() && step > 0.0 {
            self.zoom_step = step;
        }
        self
    }

    /// Returns a copy with new fit parameters for
    /// [`crate::CanvasViewport::initialize`].
    #[must_use]
    pub fn with_fit(mut self, margin: f64, reference_size: f64) -> Self {
        if margin.is_finite() && margin >= 0.0 {
            self.fit_margin = margin;
        }
        if reference_size.is_finite() && reference_size > 0.0 {
            self.reference_size = reference_size;
        }
        self
    }

    /// Returns a copy with a new origin mode.
    #[must_use]
    pub fn with_origin_mode(mut self, mode: OriginMode) -> Self {
        self.origin_mode = mode;
        self
    }

    /// Lower bound for the scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Global upper bound for the scale.
    ///
    /// A fitted viewport may use a smaller ceiling, see
    /// [`crate::CanvasViewport::effective_max_scale`].
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scale used before fitting and by resets of an unfitted viewport.
    #[must_use]
    pub fn default_scale(&self) -> f64 {
        self.default_scale
    }

    /// Scale change applied by a single zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Margin kept on each side of the container when fitting.
    #[must_use]
    pub fn fit_margin(&self) -> f64 {
        self.fit_margin
    }

    /// Extent of the reference board in canvas units.
    #[must_use]
    pub fn reference_size(&self) -> f64 {
        self.reference_size
    }

    /// Placement of canvas origin inside the viewport.
    #[must_use]
    pub fn origin_mode(&self) -> OriginMode {
        self.origin_mode
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            default_scale: Self::DEFAULT_SCALE,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            fit_margin: Self::DEFAULT_FIT_MARGIN,
            reference_size: Self::DEFAULT_REFERENCE_SIZE,
            origin_mode: OriginMode::default(),
        }
    }
}
