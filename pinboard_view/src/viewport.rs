// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::CanvasConfig;
use crate::modes::{OriginMode, ZoomDirection};
use crate::transform::CanvasTransform;

/// Pan/zoom state of one rendered canvas view.
///
/// `CanvasViewport` owns a [`CanvasTransform`] together with the viewport size
/// and the scale limits. It can be used to:
/// - Convert points between viewport and canvas space.
/// - Fit a reference-sized board into a container.
/// - Zoom in discrete steps, either about the pointer or in place.
/// - Pan by moving the translation directly.
///
/// The scale always stays within
/// `[config.min_scale(), self.effective_max_scale()]`.
#[derive(Clone, Debug)]
pub struct CanvasViewport {
    config: CanvasConfig,
    transform: CanvasTransform,
    viewport_size: Option<Size>,
    fit_scale: Option<f64>,
}

impl CanvasViewport {
    /// Creates an unfitted viewport at the configured default scale.
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        let mut vp = Self {
            config,
            transform: CanvasTransform::IDENTITY,
            viewport_size: None,
            fit_scale: None,
        };
        vp.transform = CanvasTransform::from_scale(vp.clamp_scale(config.default_scale()));
        vp
    }

    /// Returns the configuration this viewport was built with.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> CanvasTransform {
        self.transform
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the current translation in viewport pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.transform.translate
    }

    /// Returns the last known viewport size, if any.
    #[must_use]
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport_size
    }

    /// Returns the scale computed by the last successful
    /// [`CanvasViewport::initialize`], if any.
    #[must_use]
    pub fn fit_scale(&self) -> Option<f64> {
        self.fit_scale
    }

    /// Returns the ceiling that zooming in may reach.
    ///
    /// Once fitted, the fit scale caps zooming in; before that the configured
    /// maximum applies.
    #[must_use]
    pub fn effective_max_scale(&self) -> f64 {
        self.fit_scale.unwrap_or(self.config.max_scale())
    }

    /// Records the viewport size without touching the transform.
    ///
    /// Sizes with a non-finite or non-positive dimension are ignored.
    pub fn set_viewport_size(&mut self, size: Size) {
        if !is_usable_size(size) {
            log::warn!("ignoring unusable viewport size {size:?}");
            return;
        }
        self.viewport_size = Some(size);
    }

    /// Replaces the transform, clamping its scale into the allowed range.
    ///
    /// Transforms with non-finite components are ignored.
    pub fn set_transform(&mut self, transform: CanvasTransform) {
        if !transform.is_valid() {
            log::warn!("ignoring invalid transform {transform:?}");
            return;
        }
        let scale = self.clamp_scale(transform.scale);
        self.transform = CanvasTransform::new(scale, transform.translate);
    }

    /// Fits the reference board into `container` and resets the translation.
    ///
    /// The board extent ([`CanvasConfig::reference_size`]) is fitted inside
    /// the container minus [`CanvasConfig::fit_margin`] on every side. The
    /// resulting scale becomes the zoom-in ceiling and the target of
    /// [`CanvasViewport::reset_zoom`]. Calling this twice with the same size
    /// yields the same transform.
    ///
    /// Returns `false`, leaving the viewport untouched, if the container has a
    /// non-finite or non-positive dimension or no room left inside the margin.
    pub fn initialize(&mut self, container: Size) -> bool {
        if !is_usable_size(container) {
            log::warn!("ignoring initialize with unusable container {container:?}");
            return false;
        }
        let margin = 2.0 * self.config.fit_margin();
        let inner = Size::new(container.width - margin, container.height - margin);
        if inner.width <= 0.0 || inner.height <= 0.0 {
            log::warn!("container {container:?} has no room inside the margin");
            return false;
        }

        let reference = self.config.reference_size();
        let scale_x = inner.width / reference;
        let scale_y = inner.height / reference;
        // The floor wins over the fit so the scale invariant keeps holding for
        // containers smaller than `min_scale * reference`.
        let fit = scale_x
            .min(scale_y)
            .min(self.config.max_scale())
            .max(self.config.min_scale());

        self.viewport_size = Some(container);
        self.fit_scale = Some(fit);
        self.transform = CanvasTransform::from_scale(fit);
        log::debug!(
            "initialized viewport {}x{} at scale {fit}",
            container.width,
            container.height
        );
        true
    }

    /// Converts a viewport-space point into canvas space.
    ///
    /// Uses the stored viewport size as reference frame in
    /// [`OriginMode::Centered`].
    #[must_use]
    pub fn viewport_to_canvas(&self, pt: Point) -> Point {
        self.transform.viewport_to_canvas(pt, self.reference_size())
    }

    /// Converts a canvas-space point into viewport space.
    #[must_use]
    pub fn canvas_to_viewport(&self, pt: Point) -> Point {
        self.transform.canvas_to_viewport(pt, self.reference_size())
    }

    /// Zooms one step about `pointer`, given in viewport coordinates.
    ///
    /// The canvas point under `pointer` before the zoom stays under it after
    /// the zoom. Returns `true` if the scale changed.
    pub fn zoom_at(&mut self, pointer: Point, direction: ZoomDirection) -> bool {
        let old = self.transform;
        let new_scale = self.stepped_scale(direction);
        if (new_scale - old.scale).abs() < f64::EPSILON {
            return false;
        }

        let frame = self.reference_size();
        let anchor = old.viewport_to_canvas(pointer, frame);
        let translate = CanvasTransform::anchored_translate(pointer, anchor, new_scale, frame);
        self.transform = CanvasTransform::new(new_scale, translate);
        log::trace!(
            "zoom {direction:?} at ({}, {}): scale {} -> {new_scale}",
            pointer.x,
            pointer.y,
            old.scale
        );
        true
    }

    /// Zooms about `pointer` in the direction given by a wheel delta.
    ///
    /// Only the sign of `delta_y` is used; each call moves one fixed step.
    /// Returns `true` if the scale changed.
    pub fn zoom_by_wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        match ZoomDirection::from_wheel_delta(delta_y) {
            Some(direction) => self.zoom_at(pointer, direction),
            None => false,
        }
    }

    /// Increases the scale by one step without moving the translation.
    pub fn zoom_in(&mut self) -> bool {
        self.step_in_place(ZoomDirection::In)
    }

    /// Decreases the scale by one step without moving the translation.
    pub fn zoom_out(&mut self) -> bool {
        self.step_in_place(ZoomDirection::Out)
    }

    /// Restores the fitted (or default) scale and clears the translation.
    pub fn reset_zoom(&mut self) {
        let scale = self
            .fit_scale
            .unwrap_or_else(|| self.clamp_scale(self.config.default_scale()));
        self.transform = CanvasTransform::from_scale(scale);
        log::debug!("reset viewport to scale {scale}");
    }

    /// Sets the translation, leaving the scale unchanged.
    pub fn pan_to(&mut self, translate: Vec2) {
        if !translate.is_finite() {
            return;
        }
        self.transform.translate = translate;
    }

    /// Moves the translation by `delta` viewport pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan_to(self.transform.translate + delta);
    }

    /// Returns the canvas-space rectangle currently visible, if the viewport
    /// size is known.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Option<Rect> {
        let size = self.viewport_size?;
        let p0 = self.viewport_to_canvas(Point::ZERO);
        let p1 = self.viewport_to_canvas(Point::new(size.width, size.height));
        Some(Rect::from_points(p0, p1))
    }

    /// Returns the canvas → viewport mapping as an affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.transform.to_affine(self.reference_size())
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CanvasViewportDebugInfo {
        CanvasViewportDebugInfo {
            transform: self.transform,
            viewport_size: self.viewport_size,
            fit_scale: self.fit_scale,
            min_scale: self.config.min_scale(),
            effective_max_scale: self.effective_max_scale(),
            origin_mode: self.config.origin_mode(),
            visible_canvas_rect: self.visible_canvas_rect(),
        }
    }

    fn reference_size(&self) -> Option<Size> {
        match self.config.origin_mode() {
            OriginMode::Centered => self.viewport_size,
            OriginMode::TopLeft => None,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        // Not `f64::clamp`, which panics when the bounds cross.
        scale
            .max(self.config.min_scale())
            .min(self.effective_max_scale())
    }

    fn stepped_scale(&self, direction: ZoomDirection) -> f64 {
        let step = direction.signum() * self.config.zoom_step();
        self.clamp_scale(self.transform.scale + step)
    }

    fn step_in_place(&mut self, direction: ZoomDirection) -> bool {
        let new_scale = self.stepped_scale(direction);
        if (new_scale - self.transform.scale).abs() < f64::EPSILON {
            return false;
        }
        log::trace!(
            "zoom {direction:?}: scale {} -> {new_scale}",
            self.transform.scale
        );
        self.transform.scale = new_scale;
        true
    }
}

impl Default for CanvasViewport {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

/// Debug snapshot of a [`CanvasViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct CanvasViewportDebugInfo {
    /// Current transform.
    pub transform: CanvasTransform,
    /// Last known viewport size.
    pub viewport_size: Option<Size>,
    /// Scale computed by the last fit, if any.
    pub fit_scale: Option<f64>,
    /// Minimum scale.
    pub min_scale: f64,
    /// Current zoom-in ceiling.
    pub effective_max_scale: f64,
    /// Placement of canvas origin.
    pub origin_mode: OriginMode,
    /// Canvas-space rectangle currently visible.
    pub visible_canvas_rect: Option<Rect>,
}

fn is_usable_size(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::CanvasViewport;
    use crate::{CanvasConfig, CanvasTransform, OriginMode, ZoomDirection};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn new_viewport_starts_at_default_scale() {
        let vp = CanvasViewport::default();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);
        assert_eq!(vp.effective_max_scale(), 2.0);
        assert!(vp.viewport_size().is_none());
    }

    #[test]
    fn default_scale_outside_limits_is_clamped() {
        let config = CanvasConfig::default()
            .with_scale_limits(0.5, 0.8)
            .with_default_scale(1.0);
        assert_eq!(CanvasViewport::new(config).scale(), 0.8);
    }

    #[test]
    fn initialize_fits_reference_board() {
        let mut vp = CanvasViewport::default();
        assert!(vp.initialize(Size::new(1000.0, 800.0)));
        assert!((vp.scale() - 0.38).abs() < 1e-12);
        assert_eq!(vp.translate(), Vec2::ZERO);
        assert_eq!(vp.effective_max_scale(), vp.scale());
    }

    #[test]
    fn initialize_is_capped_by_max_scale() {
        let mut vp = CanvasViewport::default();
        assert!(vp.initialize(Size::new(10_000.0, 9_000.0)));
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn initialize_small_container_uses_floor() {
        let mut vp = CanvasViewport::default();
        assert!(vp.initialize(Size::new(400.0, 300.0)));
        assert_eq!(vp.scale(), 0.3);
        assert_eq!(vp.effective_max_scale(), 0.3);
        assert!(!vp.zoom_in());
        assert!(!vp.zoom_out());
    }

    #[test]
    fn initialize_rejects_degenerate_containers() {
        let mut vp = CanvasViewport::default();
        vp.pan_to(Vec2::new(5.0, 5.0));
        assert!(!vp.initialize(Size::new(0.0, 800.0)));
        assert!(!vp.initialize(Size::new(f64::NAN, 800.0)));
        assert!(!vp.initialize(Size::new(30.0, 800.0)));
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Vec2::new(5.0, 5.0));
        assert!(vp.fit_scale().is_none());
    }

    #[test]
    fn initialize_resets_translation() {
        let mut vp = CanvasViewport::default();
        vp.initialize(Size::new(1000.0, 800.0));
        vp.pan_by(Vec2::new(100.0, -50.0));
        vp.initialize(Size::new(1000.0, 800.0));
        assert_eq!(vp.translate(), Vec2::ZERO);
    }

    #[test]
    fn zoom_at_keeps_pointer_anchor() {
        let mut vp = CanvasViewport::default();
        vp.set_viewport_size(Size::new(1000.0, 600.0));
        vp.pan_to(Vec2::new(-40.0, 25.0));
        let pointer = Point::new(120.0, 480.0);
        let before = vp.viewport_to_canvas(pointer);

        assert!(vp.zoom_at(pointer, ZoomDirection::In));
        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert_close(vp.viewport_to_canvas(pointer), before);

        assert!(vp.zoom_at(pointer, ZoomDirection::Out));
        assert_close(vp.viewport_to_canvas(pointer), before);
    }

    #[test]
    fn zoom_at_top_left_mode_keeps_pointer_anchor() {
        let config = CanvasConfig::default().with_origin_mode(OriginMode::TopLeft);
        let mut vp = CanvasViewport::new(config);
        vp.set_viewport_size(Size::new(1000.0, 600.0));
        let pointer = Point::new(300.0, 200.0);
        let before = vp.viewport_to_canvas(pointer);
        assert_close(before, pointer);

        assert!(vp.zoom_at(pointer, ZoomDirection::Out));
        assert_close(vp.viewport_to_canvas(pointer), before);
    }

    #[test]
    fn zoom_at_clamped_scale_is_a_no_op() {
        let mut vp = CanvasViewport::default();
        vp.set_transform(CanvasTransform::new(2.0, Vec2::new(7.0, 7.0)));
        assert!(!vp.zoom_at(Point::new(10.0, 10.0), ZoomDirection::In));
        assert_eq!(vp.translate(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn wheel_magnitude_is_ignored() {
        let mut a = CanvasViewport::default();
        let mut b = CanvasViewport::default();
        let pointer = Point::new(50.0, 60.0);
        a.zoom_by_wheel(pointer, -1.0);
        b.zoom_by_wheel(pointer, -400.0);
        assert_eq!(a.transform(), b.transform());
        assert!(!a.zoom_by_wheel(pointer, 0.0));
    }

    #[test]
    fn zoom_buttons_leave_translation_alone() {
        let mut vp = CanvasViewport::default();
        vp.pan_to(Vec2::new(12.0, 34.0));
        assert!(vp.zoom_in());
        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert!(vp.zoom_out());
        assert!(vp.zoom_out());
        assert!((vp.scale() - 0.9).abs() < 1e-12);
        assert_eq!(vp.translate(), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn reset_restores_fit_or_default() {
        let mut vp = CanvasViewport::default();
        vp.zoom_out();
        vp.pan_by(Vec2::new(3.0, 4.0));
        vp.reset_zoom();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);

        vp.initialize(Size::new(1000.0, 800.0));
        vp.zoom_out();
        vp.pan_by(Vec2::new(3.0, 4.0));
        vp.reset_zoom();
        assert!((vp.scale() - 0.38).abs() < 1e-12);
        assert_eq!(vp.translate(), Vec2::ZERO);
    }

    #[test]
    fn set_transform_clamps_and_rejects_invalid() {
        let mut vp = CanvasViewport::default();
        vp.set_transform(CanvasTransform::new(10.0, Vec2::new(1.0, 2.0)));
        assert_eq!(vp.scale(), 2.0);
        vp.set_transform(CanvasTransform::new(0.0, Vec2::ZERO));
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(vp.translate(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn visible_rect_and_debug_info() {
        let mut vp = CanvasViewport::default();
        assert!(vp.visible_canvas_rect().is_none());
        vp.set_viewport_size(Size::new(800.0, 600.0));
        assert_eq!(
            vp.visible_canvas_rect(),
            Some(Rect::new(-400.0, -300.0, 400.0, 300.0))
        );

        vp.zoom_in();
        let info = vp.debug_info();
        assert_eq!(info.transform, vp.transform());
        assert_eq!(info.origin_mode, OriginMode::Centered);
        assert!(info.min_scale <= info.effective_max_scale);
        let visible = info.visible_canvas_rect.unwrap();
        assert!(visible.width() < 800.0);
    }

    #[test]
    fn affine_places_content_like_canvas_to_viewport() {
        let mut vp = CanvasViewport::default();
        vp.set_viewport_size(Size::new(640.0, 480.0));
        vp.set_transform(CanvasTransform::new(1.5, Vec2::new(-20.0, 30.0)));
        let pt = Point::new(13.0, -8.0);
        assert_close(vp.to_affine() * pt, vp.canvas_to_viewport(pt));
    }
}
