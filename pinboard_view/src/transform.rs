// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Uniform scale plus translation mapping canvas space into viewport space.
///
/// The mapping is parameterized by an optional viewport size:
/// - With a size, the viewport center is the reference point, so an
///   untranslated transform puts canvas origin in the middle of the view.
/// - Without a size, viewport pixel `(0, 0)` is the reference point.
///
/// ```text
/// viewport = center + canvas * scale + translate
/// canvas   = (viewport - center - translate) / scale
/// ```
///
/// `scale` must be non-zero for the inverse to exist; [`crate::CanvasViewport`]
/// keeps it inside positive limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Pixel offset applied after scaling.
    pub translate: Vec2,
}

impl CanvasTransform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Creates an untranslated transform with the given scale.
    #[must_use]
    pub const fn from_scale(scale: f64) -> Self {
        Self {
            scale,
            translate: Vec2::ZERO,
        }
    }

    /// Converts a viewport-space point into canvas space.
    #[must_use]
    pub fn viewport_to_canvas(&self, pt: Point, viewport_size: Option<Size>) -> Point {
        let rel = pt.to_vec2() - reference_offset(viewport_size) - self.translate;
        (rel / self.scale).to_point()
    }

    /// Converts a canvas-space point into viewport space.
    ///
    /// This is the exact inverse of [`CanvasTransform::viewport_to_canvas`]
    /// for the same `viewport_size`.
    #[must_use]
    pub fn canvas_to_viewport(&self, pt: Point, viewport_size: Option<Size>) -> Point {
        let offset = reference_offset(viewport_size) + pt.to_vec2() * self.scale;
        (offset + self.translate).to_point()
    }

    /// Translation that keeps `canvas_pt` under `viewport_pt` at `scale`.
    ///
    /// Solving `viewport_pt = center + canvas_pt * scale + t` for `t`.
    #[must_use]
    pub fn anchored_translate(
        viewport_pt: Point,
        canvas_pt: Point,
        scale: f64,
        viewport_size: Option<Size>,
    ) -> Vec2 {
        viewport_pt.to_vec2() - reference_offset(viewport_size) - canvas_pt.to_vec2() * scale
    }

    /// Returns the canvas → viewport mapping as an affine transform.
    ///
    /// Hosts apply this to the content layer (for example as a CSS
    /// `matrix(...)` or a renderer's root transform).
    #[must_use]
    pub fn to_affine(&self, viewport_size: Option<Size>) -> Affine {
        let offset = reference_offset(viewport_size) + self.translate;
        Affine::translate(offset) * Affine::scale(self.scale)
    }

    /// Returns `true` if every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.translate.is_finite()
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Offset from viewport pixel `(0, 0)` to the conversion reference point.
fn reference_offset(viewport_size: Option<Size>) -> Vec2 {
    match viewport_size {
        Some(size) => size.to_vec2() * 0.5,
        None => Vec2::ZERO,
    }
}
