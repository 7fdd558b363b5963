// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for `ui-events` pointer events.
//!
//! ## Feature
//!
//! Enable with `ui_events_adapter`.
//!
//! ## Notes
//!
//! `ui-events` reports one pointer per event, while the canvas gestures want
//! the whole touch composition. [`UiEventsBridge`] keeps the active touch
//! contacts between events and rebuilds a [`PointerInput::Touch`] from them.
//! Pen input is treated like a mouse. Wheel events use the container last
//! given to the controller.

use ::ui_events::ScrollDelta;
use ::ui_events::pointer::{PointerButton, PointerEvent, PointerId, PointerType};
use kurbo::Point;
use smallvec::SmallVec;

use crate::controller::CanvasController;
use crate::input::{MouseButton, PointerInput, WheelInput, WheelModifiers};
use crate::press::PressOutcome;

/// What handling one event did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BridgeResponse {
    /// The transform changed (pan or zoom).
    pub changed: bool,
    /// The host should suppress the platform default for this event.
    pub prevent_default: bool,
    /// Outcome of a completed background press.
    pub press: Option<PressOutcome>,
}

/// Translates `ui-events` pointer events into controller calls.
#[derive(Clone, Debug, Default)]
pub struct UiEventsBridge {
    touches: SmallVec<[(Option<PointerId>, Point); 4]>,
}

impl UiEventsBridge {
    /// Creates a bridge with no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one event to `controller`.
    ///
    /// `over_interactive` reports whether the event target is an interactive
    /// child (an item, a toolbar); presses there never start a pan.
    pub fn handle(
        &mut self,
        controller: &mut CanvasController,
        event: &PointerEvent,
        over_interactive: bool,
    ) -> BridgeResponse {
        match event {
            PointerEvent::Down(e) => {
                let pos = e.state.logical_point();
                let input = if e.pointer.pointer_type == PointerType::Touch {
                    self.set_touch(e.pointer.pointer_id, pos);
                    self.touch_input()
                } else {
                    PointerInput::mouse(pos, mouse_button(e.button))
                };
                BridgeResponse {
                    prevent_default: controller.pointer_down(&input, over_interactive),
                    ..BridgeResponse::default()
                }
            }
            PointerEvent::Move(e) => {
                let pos = e.current.logical_point();
                let input = if e.pointer.pointer_type == PointerType::Touch {
                    if !self.set_existing_touch(e.pointer.pointer_id, pos) {
                        return BridgeResponse::default();
                    }
                    self.touch_input()
                } else {
                    PointerInput::mouse(pos, MouseButton::Primary)
                };
                let changed = controller.pointer_move(&input);
                BridgeResponse {
                    changed,
                    prevent_default: changed,
                    press: None,
                }
            }
            PointerEvent::Up(e) => {
                if e.pointer.pointer_type == PointerType::Touch {
                    self.remove_touch(e.pointer.pointer_id);
                }
                BridgeResponse {
                    press: controller.pointer_up(),
                    ..BridgeResponse::default()
                }
            }
            PointerEvent::Cancel(info) => {
                if info.pointer_type == PointerType::Touch {
                    self.remove_touch(info.pointer_id);
                }
                controller.pointer_cancel();
                BridgeResponse::default()
            }
            PointerEvent::Scroll(e) => {
                let delta_y = match &e.delta {
                    ScrollDelta::PixelDelta(pos) => pos.y,
                    ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
                };
                let input = WheelInput {
                    position: e.state.logical_point(),
                    delta_y,
                    modifiers: WheelModifiers {
                        ctrl: e.state.modifiers.ctrl(),
                        meta: e.state.modifiers.meta(),
                    },
                    cancelable: true,
                };
                let outcome = controller.handle_wheel_with_last_container(&input);
                BridgeResponse {
                    changed: outcome.zoomed,
                    prevent_default: outcome.prevent_default,
                    press: None,
                }
            }
            PointerEvent::Gesture(_) | PointerEvent::Enter(_) | PointerEvent::Leave(_) => {
                BridgeResponse::default()
            }
        }
    }

    /// Number of touch contacts currently tracked.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    fn set_touch(&mut self, id: Option<PointerId>, pos: Point) {
        if !self.set_existing_touch(id, pos) {
            self.touches.push((id, pos));
        }
    }

    fn set_existing_touch(&mut self, id: Option<PointerId>, pos: Point) -> bool {
        match self.touches.iter_mut().find(|(t, _)| *t == id) {
            Some(entry) => {
                entry.1 = pos;
                true
            }
            None => false,
        }
    }

    fn remove_touch(&mut self, id: Option<PointerId>) {
        self.touches.retain(|(t, _)| *t != id);
    }

    fn touch_input(&self) -> PointerInput {
        PointerInput::touch(self.touches.iter().map(|(_, p)| *p))
    }
}

fn mouse_button(button: Option<PointerButton>) -> MouseButton {
    match button {
        Some(PointerButton::Primary) => MouseButton::Primary,
        Some(PointerButton::Secondary) => MouseButton::Secondary,
        Some(PointerButton::Auxiliary) => MouseButton::Auxiliary,
        _ => MouseButton::Other,
    }
}
