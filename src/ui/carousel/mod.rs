// SPDX-License-Identifier: MPL-2.0
//! Per-platform screenshot carousel.

pub mod animator;
pub mod state;
pub mod view;

pub use state::{
    Controls, Effect, FrameOutcome, KeyOutcome, Message, NavKey, RenderOptions, State,
};
pub use view::{view, ViewContext};
