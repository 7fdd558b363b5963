// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard View: the pan/zoom viewport behind an infinite canvas board.
//!
//! This crate provides a small, headless model of a board view where content
//! lives in an abstract *canvas space* and is shown through a window measured
//! in viewport pixels. It focuses on:
//! - The canvas transform (uniform scale + translation).
//! - Coordinate conversion between viewport and canvas space.
//! - Fitting a reference-sized board into a container.
//! - Discrete, pointer-anchored zoom steps and scale limits.
//!
//! It does **not** interpret input events. Callers (or `pinboard_gesture`)
//! are expected to:
//! - Measure their container and call [`CanvasViewport::initialize`] on mount
//!   and after (debounced) resizes.
//! - Resolve wheel and pointer input into viewport-space points before calling
//!   [`CanvasViewport::zoom_by_wheel`] or [`CanvasViewport::pan_to`].
//! - Apply [`CanvasViewport::to_affine`] to their content layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinboard_view::CanvasViewport;
//!
//! // A 1000x800 container fits the 2000-unit board at 0.38.
//! let mut view = CanvasViewport::default();
//! view.initialize(Size::new(1000.0, 800.0));
//! assert!((view.scale() - 0.38).abs() < 1e-9);
//!
//! // The middle of the container is canvas origin.
//! let origin = view.viewport_to_canvas(Point::new(500.0, 400.0));
//! assert!(origin.x.abs() < 1e-9 && origin.y.abs() < 1e-9);
//!
//! // Scrolling down over a point zooms out one step while keeping that
//! // canvas point under the pointer.
//! let pointer = Point::new(820.0, 130.0);
//! let before = view.viewport_to_canvas(pointer);
//! view.zoom_by_wheel(pointer, 120.0);
//! let after = view.viewport_to_canvas(pointer);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Converting with an explicit frame
//!
//! [`CanvasTransform`] carries the same conversions for callers that keep the
//! transform themselves and pass the viewport size per call:
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use pinboard_view::CanvasTransform;
//!
//! let t = CanvasTransform::new(2.0, Vec2::new(10.0, 0.0));
//! let size = Some(Size::new(200.0, 100.0));
//! let canvas = t.viewport_to_canvas(Point::new(130.0, 50.0), size);
//! assert_eq!(canvas, Point::new(10.0, 0.0));
//! assert_eq!(t.canvas_to_viewport(canvas, size), Point::new(130.0, 50.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; no rotation.
//! - Zoom moves in fixed steps; wheel magnitude is ignored.
//! - Once fitted, the fit scale is also the zoom-in ceiling.
//! - Degenerate input (zero or non-finite sizes, zero wheel deltas) is a
//!   no-op rather than an error.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod modes;
mod transform;
mod viewport;

pub use config::CanvasConfig;
pub use modes::{OriginMode, ZoomDirection};
pub use transform::CanvasTransform;
pub use viewport::{CanvasViewport, CanvasViewportDebugInfo};
