// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard Gesture: input handling for infinite canvas boards.
//!
//! This crate sits between a host's raw input events and a
//! [`pinboard_view::CanvasViewport`]. Each module handles one interaction:
//!
//! - [`input`]: The input boundary. Mouse and touch events become one tagged
//!   union, [`PointerInput`]; wheel events become [`WheelInput`].
//! - [`pan`]: Drag-to-pan sessions anchored at the press position.
//! - [`press`]: Telling a click on the background apart from a drag.
//! - [`item_drag`]: Moving a board item while keeping its grab offset in
//!   canvas units.
//!
//! [`CanvasController`] ties them together for one view: it owns the viewport,
//! tracks the container rectangle, and turns client-space input into zoom,
//! pan and click decisions.
//!
//! ## Driving a board
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pinboard_gesture::{CanvasController, MouseButton, PointerInput, PressOutcome, WheelInput};
//!
//! let mut board = CanvasController::default();
//! // The board element sits at (0, 64) and is 1000x800.
//! let container = Rect::new(0.0, 64.0, 1000.0, 864.0);
//! board.initialize(container);
//!
//! // Wheel down over the board: one zoom-out step anchored at the pointer.
//! let outcome = board.handle_wheel(&WheelInput::new(Point::new(250.0, 300.0), 120.0), container);
//! assert!(outcome.zoomed && outcome.prevent_default);
//!
//! // Drag the background to pan.
//! let down = PointerInput::mouse(Point::new(500.0, 500.0), MouseButton::Primary);
//! assert!(board.pointer_down(&down, false));
//! board.pointer_move(&PointerInput::mouse(Point::new(560.0, 520.0), MouseButton::Primary));
//! assert_eq!(board.pointer_up(), Some(PressOutcome::Drag));
//!
//! // A still press is a click; place new content where it landed.
//! board.pointer_down(&PointerInput::mouse(Point::new(100.0, 164.0), MouseButton::Primary), false);
//! if let Some(PressOutcome::Click(local)) = board.pointer_up() {
//!     let _canvas_pos = board.placement_for_click(local);
//! }
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: `adapters::ui_events` feeds `ui-events` pointer
//!   events into a controller.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;
mod config;
mod controller;
pub mod input;
pub mod item_drag;
pub mod pan;
pub mod press;

pub use config::GestureConfig;
pub use controller::{CanvasController, WheelOutcome};
pub use input::{MouseButton, PointerInput, WheelInput, WheelModifiers};
pub use item_drag::{ItemDrag, ItemDragEnd};
pub use pan::{PanSession, PanState};
pub use press::{PressOutcome, PressTracker};
