//! Action and reducer factories.
//!
//! This module provides the pure building blocks for store plumbing:
//! - Actions: tagged payloads describing a requested state transition
//! - Reducers: pure `(state, action) -> state` functions
//! - Handler maps: per-action-kind merge/append transition logic

mod action;
mod handler;
mod reducer;

pub use action::{create_action, Action, ActionBuilder};
pub use handler::{array_handler, object_handler, Handler, HandlerMap};
pub use reducer::{create_reducer, Reducer};
