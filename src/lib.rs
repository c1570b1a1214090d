//! # Slicekit
//!
//! Boilerplate-free slice registration for centralized state stores.
//!
//! Slicekit provides three cooperating layers for managing application
//! state as named slices:
//!
//! ## Factories (Low-level primitives)
//!
//! Pure builders for store plumbing:
//! - `create_action` - Curried action constructors with named payload keys
//! - `create_reducer` - Reducers with initial-state defaulting and
//!   pass-through for unknown action kinds
//! - `object_handler` / `array_handler` - Shallow-merge and append
//!   transition logic
//!
//! ## Models (Per-slice access)
//!
//! Convenient read/update access for UI code:
//! - `SliceModel` - Binds a state key to a derived update action and
//!   initial value
//! - `ModelBinding` - Current value plus bound dispatchers, rebuilt per
//!   render
//!
//! ## Registry and Store (Assembly)
//!
//! - `Registry` - Collects slice descriptors at start-up, validates them
//!   and compiles the reducer map
//! - `Store` - Thread-safe slice container with dispatch routing and
//!   change notification

pub mod action;
pub mod error;
pub mod model;
pub mod registry;
pub mod remote;
pub mod store;

// Re-export main types for convenience
pub use action::{
    array_handler, create_action, create_reducer, object_handler, Action, ActionBuilder, Handler,
    HandlerMap, Reducer,
};
pub use error::SliceError;
pub use model::{ModelBinding, SliceDescriptor, SliceModel};
pub use registry::Registry;
pub use remote::{ApiError, RemoteData};
pub use store::{SliceMap, Store};
