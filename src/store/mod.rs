//! Centralized state container.
//!
//! The store holds the current value of every registered slice, routes
//! dispatched actions through the compiled reducer map, and notifies
//! subscribers after each dispatch.

mod store;

pub use store::{SliceMap, Store};
