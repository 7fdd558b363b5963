// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-versus-drag recognition for presses on the canvas background.
//!
//! A press that travels further than the slop on either axis before release
//! is a drag (typically a pan) and must not be treated as a click.

use kurbo::Point;

/// What a completed press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressOutcome {
    /// The pointer stayed within the slop; carries the release position.
    Click(Point),
    /// The pointer moved beyond the slop at some point during the press.
    Drag,
}

/// Tracks one press from down to up.
#[derive(Clone, Copy, Debug)]
pub struct PressTracker {
    slop: f64,
    origin: Option<Point>,
    moved: bool,
}

impl PressTracker {
    /// Creates a tracker with the given per-axis slop in pixels.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.abs(),
            origin: None,
            moved: false,
        }
    }

    /// Record a press at `pos`, replacing any press in progress.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.moved = false;
    }

    /// Record pointer motion. Once the press has moved it stays moved.
    pub fn motion(&mut self, pos: Point) {
        let Some(origin) = self.origin else {
            return;
        };
        if (pos.x - origin.x).abs() > self.slop || (pos.y - origin.y).abs() > self.slop {
            self.moved = true;
        }
    }

    /// Finish the press at `pos`.
    ///
    /// Returns `None` if no press was in progress.
    pub fn release(&mut self, pos: Point) -> Option<PressOutcome> {
        self.motion(pos);
        self.origin.take()?;
        let moved = core::mem::take(&mut self.moved);
        let outcome = if moved {
            PressOutcome::Drag
        } else {
            PressOutcome::Click(pos)
        };
        Some(outcome)
    }

    /// Drop the press in progress without an outcome.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.moved = false;
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns `true` if the current press has moved beyond the slop.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
