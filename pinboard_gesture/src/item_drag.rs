// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging a board item in canvas space.
//!
//! The grab offset is kept in canvas units, so the item stays attached to the
//! same spot under the pointer whatever the current zoom. Feed it canvas-space
//! pointer positions, for example from
//! [`CanvasController::begin_item_drag`](crate::CanvasController::begin_item_drag).
//!
//! ```
//! use kurbo::Point;
//! use pinboard_gesture::item_drag::ItemDrag;
//!
//! // Item at (100, 100), grabbed 10 units right of its origin.
//! let mut drag = ItemDrag::begin(7_u32, Point::new(100.0, 100.0), Point::new(110.0, 100.0), 5.0);
//! assert_eq!(drag.update(Point::new(150.0, 120.0)), Point::new(140.0, 120.0));
//!
//! let end = drag.finish();
//! assert_eq!(end.key, 7);
//! assert!(end.moved);
//! ```

use kurbo::{Point, Vec2};

/// An item drag in progress.
#[derive(Clone, Copy, Debug)]
pub struct ItemDrag<K> {
    key: K,
    grab_offset: Vec2,
    initial: Point,
    position: Point,
    slop: f64,
    moved: bool,
}

impl<K> ItemDrag<K> {
    /// Start dragging the item `key` currently at `item_position`, grabbed at
    /// `pointer_canvas`. Both are in canvas space.
    ///
    /// `slop` is the per-axis displacement, in canvas units, an item must
    /// exceed before the drag counts as a move.
    #[must_use]
    pub fn begin(key: K, item_position: Point, pointer_canvas: Point, slop: f64) -> Self {
        Self {
            key,
            grab_offset: pointer_canvas - item_position,
            initial: item_position,
            position: item_position,
            slop: slop.abs(),
            moved: false,
        }
    }

    /// Move the pointer to `pointer_canvas`, returning the item's new position.
    pub fn update(&mut self, pointer_canvas: Point) -> Point {
        self.position = pointer_canvas - self.grab_offset;
        if (self.position.x - self.initial.x).abs() > self.slop
            || (self.position.y - self.initial.y).abs() > self.slop
        {
            self.moved = true;
        }
        self.position
    }

    /// Key of the dragged item.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current item position in canvas space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Item position when the drag began.
    #[must_use]
    pub fn initial_position(&self) -> Point {
        self.initial
    }

    /// Offset from the item origin to the grab point, in canvas units.
    #[must_use]
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Returns `true` once the item has been displaced beyond the slop.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// End the drag.
    ///
    /// Hosts should persist [`ItemDragEnd::position`] only when
    /// [`ItemDragEnd::moved`] is set; otherwise the press was a click.
    #[must_use]
    pub fn finish(self) -> ItemDragEnd<K> {
        let position = if self.moved {
            self.position
        } else {
            self.initial
        };
        ItemDragEnd {
            key: self.key,
            position,
            moved: self.moved,
        }
    }
}

/// Result of a finished item drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemDragEnd<K> {
    /// Key of the dragged item.
    pub key: K,
    /// Final position, or the initial one when the item did not really move.
    pub position: Point,
    /// Whether the item moved beyond the slop.
    pub moved: bool,
}
