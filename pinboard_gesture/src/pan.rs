// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: drag the canvas translation with a single pointer.
//!
//! ## Usage
//!
//! 1) Call [`PanState::start`] on pointer-down/touch-start with the current translation.
//! 2) On each move, call [`PanState::update`] and apply the returned translation.
//! 3) End the session with [`PanState::end`] on pointer-up, touch-end or cancel.
//!
//! The translation follows the pointer exactly: there is no inertia, and the
//! scale is never touched.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pinboard_gesture::input::{MouseButton, PointerInput};
//! use pinboard_gesture::pan::PanState;
//!
//! let mut pan = PanState::default();
//!
//! let down = PointerInput::mouse(Point::new(10.0, 20.0), MouseButton::Primary);
//! assert!(pan.start(&down, Vec2::new(100.0, 0.0)));
//!
//! let moved = PointerInput::mouse(Point::new(15.0, 25.0), MouseButton::Primary);
//! assert_eq!(pan.update(&moved), Some(Vec2::new(105.0, 5.0)));
//!
//! pan.end();
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

use crate::input::PointerInput;

/// Anchors captured when a pan starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    /// Pointer position at pan start.
    pub anchor_pointer: Point,
    /// Canvas translation at pan start.
    pub anchor_translate: Vec2,
}

impl PanSession {
    /// Translation for a pointer now at `pointer`.
    #[must_use]
    pub fn translate_for(&self, pointer: Point) -> Vec2 {
        self.anchor_translate + (pointer - self.anchor_pointer)
    }
}

/// Tracks at most one pan session.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanState {
    session: Option<PanSession>,
}

impl PanState {
    /// Start a pan from `input`, anchored at the current `translate`.
    ///
    /// Only the primary mouse button or a single touch starts a pan, and only
    /// when no session is active. Returns `true` if a session started.
    pub fn start(&mut self, input: &PointerInput, translate: Vec2) -> bool {
        if self.session.is_some() || !input.can_start_pan() {
            return false;
        }
        let Some(anchor_pointer) = input.primary_position() else {
            return false;
        };
        self.session = Some(PanSession {
            anchor_pointer,
            anchor_translate: translate,
        });
        log::debug!(
            "pan started at ({}, {})",
            anchor_pointer.x,
            anchor_pointer.y
        );
        true
    }

    /// Update the pan with a move event, returning the new translation.
    ///
    /// A touch move that no longer has exactly one contact ends the session.
    pub fn update(&mut self, input: &PointerInput) -> Option<Vec2> {
        let session = self.session?;
        if !input.is_single_contact() {
            self.end();
            return None;
        }
        let pointer = input.primary_position()?;
        let translate = session.translate_for(pointer);
        log::trace!("pan to ({}, {})", translate.x, translate.y);
        Some(translate)
    }

    /// End the current session, returning it if one was active.
    pub fn end(&mut self) -> Option<PanSession> {
        let session = self.session.take();
        if session.is_some() {
            log::debug!("pan ended");
        }
        session
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&PanSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a pan session is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.session.is_some()
    }
}
