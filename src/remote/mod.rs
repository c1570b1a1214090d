//! Async-load state tracking for slice values.

mod remote;

pub use remote::{ApiError, RemoteData};
