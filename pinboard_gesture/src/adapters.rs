// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from event crates into [`crate::CanvasController`] calls.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
