// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input boundary: mouse and touch events resolved into one tagged union.
//!
//! Hosts translate their platform events once, at the edge, into
//! [`PointerInput`] and [`WheelInput`]. Everything downstream matches on the
//! variant instead of probing event shapes.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Mouse button that caused a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button or wheel press.
    Auxiliary,
    /// Any other button.
    Other,
}

/// A pointer event, reduced to what the canvas gestures need.
///
/// Positions are in the host's client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// A mouse (or pen acting as a mouse) event.
    Mouse {
        /// Pointer position.
        position: Point,
        /// Button involved. Ignored for moves.
        button: MouseButton,
    },
    /// A touch event carrying every contact currently on the surface.
    Touch {
        /// Active contact positions, in the order the host reports them.
        touches: SmallVec<[Point; 2]>,
    },
}

impl PointerInput {
    /// Creates a mouse input.
    #[must_use]
    pub fn mouse(position: Point, button: MouseButton) -> Self {
        Self::Mouse { position, button }
    }

    /// Creates a touch input from the active contact positions.
    #[must_use]
    pub fn touch(touches: impl IntoIterator<Item = Point>) -> Self {
        Self::Touch {
            touches: touches.into_iter().collect(),
        }
    }

    /// Position that drives gestures: the mouse position or the first contact.
    #[must_use]
    pub fn primary_position(&self) -> Option<Point> {
        match self {
            Self::Mouse { position, .. } => Some(*position),
            Self::Touch { touches } => touches.first().copied(),
        }
    }

    /// Returns `true` for a single contact: any mouse event or exactly one touch.
    #[must_use]
    pub fn is_single_contact(&self) -> bool {
        match self {
            Self::Mouse { .. } => true,
            Self::Touch { touches } => touches.len() == 1,
        }
    }

    /// Returns `true` if a press with this input may start a pan: the primary
    /// mouse button or exactly one touch.
    #[must_use]
    pub fn can_start_pan(&self) -> bool {
        match self {
            Self::Mouse { button, .. } => *button == MouseButton::Primary,
            Self::Touch { touches } => touches.len() == 1,
        }
    }

    /// Returns the same input with every position shifted by `-origin`.
    ///
    /// Used to turn client coordinates into container-local ones.
    #[must_use]
    pub fn relative_to(&self, origin: Vec2) -> Self {
        match self {
            Self::Mouse { position, button } => Self::Mouse {
                position: *position - origin,
                button: *button,
            },
            Self::Touch { touches } => Self::Touch {
                touches: touches.iter().map(|p| *p - origin).collect(),
            },
        }
    }
}

/// Modifier keys held during a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelModifiers {
    /// Control key.
    pub ctrl: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl WheelModifiers {
    /// Returns `true` if a zoom modifier (Ctrl or Meta) is held.
    #[must_use]
    pub fn is_zoom(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A wheel or trackpad scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position in client coordinates.
    pub position: Point,
    /// Vertical scroll delta; only its sign is used.
    pub delta_y: f64,
    /// Modifier keys held.
    pub modifiers: WheelModifiers,
    /// Whether the host may suppress the native scroll/zoom for this event.
    pub cancelable: bool,
}

impl WheelInput {
    /// Creates a cancelable wheel input without modifiers.
    #[must_use]
    pub fn new(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta_y,
            modifiers: WheelModifiers::default(),
            cancelable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{MouseButton, PointerInput, WheelModifiers};

    #[test]
    fn only_primary_button_or_single_touch_can_pan() {
        let p = Point::new(1.0, 2.0);
        let mouse = |button| PointerInput::mouse(p, button);
        assert!(mouse(MouseButton::Primary).can_start_pan());
        assert!(!mouse(MouseButton::Secondary).can_start_pan());
        assert!(!mouse(MouseButton::Auxiliary).can_start_pan());
        assert!(!mouse(MouseButton::Other).can_start_pan());
        assert!(PointerInput::touch([p]).can_start_pan());
        assert!(!PointerInput::touch([p, p]).can_start_pan());
        assert!(!PointerInput::touch([]).can_start_pan());
    }

    #[test]
    fn primary_position_is_first_contact() {
        let input = PointerInput::touch([Point::new(5.0, 6.0), Point::new(7.0, 8.0)]);
        assert_eq!(input.primary_position(), Some(Point::new(5.0, 6.0)));
        assert!(!input.is_single_contact());
        assert_eq!(PointerInput::touch([]).primary_position(), None);
    }

    #[test]
    fn relative_to_shifts_every_position() {
        let origin = Vec2::new(100.0, 50.0);
        let touch = PointerInput::touch([Point::new(110.0, 60.0), Point::new(200.0, 150.0)]);
        assert_eq!(
            touch.relative_to(origin),
            PointerInput::touch([Point::new(10.0, 10.0), Point::new(100.0, 100.0)])
        );
        let mouse = PointerInput::mouse(Point::new(100.0, 50.0), MouseButton::Primary);
        let local = mouse.relative_to(origin);
        assert_eq!(local.primary_position(), Some(Point::ZERO));
    }

    #[test]
    fn zoom_modifiers() {
        assert!(!WheelModifiers::default().is_zoom());
        let ctrl = WheelModifiers {
            ctrl: true,
            meta: false,
        };
        let meta = WheelModifiers {
            ctrl: false,
            meta: true,
        };
        assert!(ctrl.is_zoom());
        assert!(meta.is_zoom());
    }
}
