// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use pinboard_view::{CanvasConfig, CanvasTransform, CanvasViewport};

use crate::config::GestureConfig;
use crate::input::{PointerInput, WheelInput};
use crate::item_drag::ItemDrag;
use crate::pan::{PanSession, PanState};
use crate::press::{PressOutcome, PressTracker};

/// What a wheel event did, and what the host should do with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    /// The scale changed.
    pub zoomed: bool,
    /// The host should suppress the native scroll/zoom for this event.
    pub prevent_default: bool,
}

/// Drives one [`CanvasViewport`] from pointer, touch and wheel input.
///
/// All positions passed in are client coordinates; the controller subtracts
/// the container origin it was last given. Positions it hands back
/// ([`PressOutcome::Click`]) are container-local.
#[derive(Clone, Debug)]
pub struct CanvasController {
    viewport: CanvasViewport,
    gestures: GestureConfig,
    container: Option<Rect>,
    pan: PanState,
    press: PressTracker,
    last_pointer: Option<Point>,
}

impl CanvasController {
    /// Creates a controller around a fresh viewport.
    #[must_use]
    pub fn new(canvas: CanvasConfig, gestures: GestureConfig) -> Self {
        Self::with_viewport(CanvasViewport::new(canvas), gestures)
    }

    /// Creates a controller around an existing viewport.
    #[must_use]
    pub fn with_viewport(viewport: CanvasViewport, gestures: GestureConfig) -> Self {
        Self {
            viewport,
            gestures,
            container: None,
            pan: PanState::default(),
            press: PressTracker::new(gestures.click_slop()),
            last_pointer: None,
        }
    }

    /// Returns the driven viewport.
    #[must_use]
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Returns the driven viewport for direct manipulation.
    pub fn viewport_mut(&mut self) -> &mut CanvasViewport {
        &mut self.viewport
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> CanvasTransform {
        self.viewport.transform()
    }

    /// Returns the gesture configuration.
    #[must_use]
    pub fn gestures(&self) -> &GestureConfig {
        &self.gestures
    }

    /// Returns the last container rectangle, in client coordinates.
    #[must_use]
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Records the container rectangle without refitting.
    pub fn set_container(&mut self, container: Rect) {
        if !is_usable_rect(container) {
            log::warn!("ignoring unusable container {container:?}");
            return;
        }
        self.container = Some(container);
        self.viewport.set_viewport_size(container.size());
    }

    /// Fits the board into `container` and records it.
    ///
    /// See [`CanvasViewport::initialize`]. Returns `false` for containers that
    /// cannot be fitted; the previous state is kept.
    pub fn initialize(&mut self, container: Rect) -> bool {
        if !is_usable_rect(container) || !self.viewport.initialize(container.size()) {
            return false;
        }
        self.container = Some(container);
        true
    }

    /// Converts a client position into container-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        client - self.origin()
    }

    /// Zooms one step about the wheel position.
    ///
    /// `container` is the current bounding box of the viewport element. The
    /// canvas point under the pointer stays put.
    pub fn handle_wheel(&mut self, input: &WheelInput, container: Rect) -> WheelOutcome {
        if !self.wheel_zooms(input) {
            return WheelOutcome::default();
        }
        self.set_container(container);
        self.zoom_by_wheel(input)
    }

    /// Zooms one step about the wheel position, measured against the
    /// container last recorded by [`CanvasController::set_container`] or
    /// [`CanvasController::initialize`].
    ///
    /// Before any container is known, positions are taken as viewport-local.
    pub fn handle_wheel_with_last_container(&mut self, input: &WheelInput) -> WheelOutcome {
        if !self.wheel_zooms(input) {
            return WheelOutcome::default();
        }
        self.zoom_by_wheel(input)
    }

    /// Handles pointer-down / touch-start.
    ///
    /// Presses over interactive children (`over_interactive`) are left to
    /// them. A press with more than one touch ends any pan in progress.
    /// Returns `true` if a pan session started.
    pub fn pointer_down(&mut self, input: &PointerInput, over_interactive: bool) -> bool {
        if over_interactive {
            return false;
        }
        let local = input.relative_to(self.origin());
        if !local.is_single_contact() {
            self.pan.end();
            self.press.cancel();
            return false;
        }
        let Some(pos) = local.primary_position() else {
            return false;
        };
        if !self.pan.start(&local, self.viewport.translate()) {
            return false;
        }
        self.last_pointer = Some(pos);
        self.press.press(pos);
        true
    }

    /// Handles pointer-move / touch-move. Returns `true` if the view panned.
    pub fn pointer_move(&mut self, input: &PointerInput) -> bool {
        let local = input.relative_to(self.origin());
        if !local.is_single_contact() {
            self.press.cancel();
        } else if let Some(pos) = local.primary_position() {
            self.last_pointer = Some(pos);
            self.press.motion(pos);
        }
        match self.pan.update(&local) {
            Some(translate) => {
                self.viewport.pan_to(translate);
                true
            }
            None => false,
        }
    }

    /// Handles pointer-up / touch-end, ending any pan session.
    ///
    /// Returns what the press turned out to be, if one was tracked.
    pub fn pointer_up(&mut self) -> Option<PressOutcome> {
        self.pan.end();
        match self.last_pointer.take() {
            Some(pos) => self.press.release(pos),
            None => {
                self.press.cancel();
                None
            }
        }
    }

    /// Handles pointer-cancel / touch-cancel: ends the pan, drops the press.
    pub fn pointer_cancel(&mut self) {
        self.pan.end();
        self.press.cancel();
        self.last_pointer = None;
    }

    /// Returns `true` while a pan session is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Returns the active pan session, if any.
    #[must_use]
    pub fn pan_session(&self) -> Option<&PanSession> {
        self.pan.session()
    }

    /// Zooms in one step without anchoring.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    /// Zooms out one step without anchoring.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    /// Restores the fitted scale and clears the translation.
    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Canvas position at which content created by a click at `local` goes.
    ///
    /// Clicks near the viewport center snap to canvas origin; anywhere else
    /// the click position is converted through the current transform.
    #[must_use]
    pub fn placement_for_click(&self, local: Point) -> Point {
        if let Some(size) = self.viewport.viewport_size() {
            let center = Point::new(size.width * 0.5, size.height * 0.5);
            let radius = self.gestures.center_snap_radius();
            if (local - center).hypot2() < radius * radius {
                return Point::ZERO;
            }
        }
        self.viewport.viewport_to_canvas(local)
    }

    /// Starts dragging an item at canvas `item_position`, grabbed at `client`.
    #[must_use]
    pub fn begin_item_drag<K>(&self, key: K, item_position: Point, client: Point) -> ItemDrag<K> {
        let pointer = self.viewport.viewport_to_canvas(self.to_local(client));
        ItemDrag::begin(key, item_position, pointer, self.gestures.item_drag_slop())
    }

    /// Moves an item drag to the pointer at `client`, returning the item's
    /// new canvas position.
    pub fn drag_item<K>(&self, drag: &mut ItemDrag<K>, client: Point) -> Point {
        drag.update(self.viewport.viewport_to_canvas(self.to_local(client)))
    }

    fn wheel_zooms(&self, input: &WheelInput) -> bool {
        !self.gestures.zoom_requires_modifier() || input.modifiers.is_zoom()
    }

    fn zoom_by_wheel(&mut self, input: &WheelInput) -> WheelOutcome {
        let pointer = self.to_local(input.position);
        WheelOutcome {
            zoomed: self.viewport.zoom_by_wheel(pointer, input.delta_y),
            prevent_default: input.cancelable,
        }
    }

    fn origin(&self) -> Vec2 {
        match self.container {
            Some(rect) => rect.origin().to_vec2(),
            None => Vec2::ZERO,
        }
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(CanvasConfig::default(), GestureConfig::default())
    }
}

fn is_usable_rect(rect: Rect) -> bool {
    rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0
}
