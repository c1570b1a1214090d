//! Per-slice data access models.
//!
//! A [`SliceModel`] binds one store key to a derived update action and an
//! initial value, and packages read/update access for UI code:
//! - Update/reset action builders
//! - A binding adapter returning the current value plus bound dispatchers
//! - Render-prop style `with_value`/`with_updates` wrappers

mod binding;
mod descriptor;
mod model;

pub use binding::ModelBinding;
pub use descriptor::SliceDescriptor;
pub use model::SliceModel;
