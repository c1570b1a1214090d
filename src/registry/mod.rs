//! Slice registry and reducer-map compilation.
//!
//! The registry collects slice descriptors once at application start-up,
//! validates them, and compiles the `state_key -> reducer` map consumed by
//! store assembly.

mod registry;

pub use registry::Registry;
