use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::warn;

use super::action::Action;

/// A single state transition: `(state, action) -> state`.
pub type Handler = Arc<dyn Fn(&Value, &Action) -> Value + Send + Sync>;

/// Mapping of action kind to handler, consumed by
/// [`create_reducer`](super::create_reducer).
///
/// Maps merge, so one reducer can serve several action kinds:
///
/// ```
/// use slicekit::{array_handler, object_handler};
///
/// let handlers = object_handler("UPDATE_USER", "user")
///     .merge(array_handler("APPEND_LOG", "entries"));
/// assert_eq!(handlers.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct HandlerMap {
    entries: HashMap<String, Handler>,
}

impl HandlerMap {
    /// Create an empty handler map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `kind`. A later registration for the same
    /// kind replaces the earlier one.
    pub fn on<F>(mut self, kind: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value, &Action) -> Value + Send + Sync + 'static,
    {
        self.entries.insert(kind.into(), Arc::new(handler));
        self
    }

    /// Absorb all entries of `other`, with `other` winning on conflicts.
    pub fn merge(mut self, other: HandlerMap) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Look up the handler registered for `kind`.
    pub fn get(&self, kind: &str) -> Option<&Handler> {
        self.entries.get(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handler map with a single entry that shallow-merges the payload object
/// under `payload_key` over the existing object state.
///
/// Keys present only in the prior state survive; keys present in both take
/// the payload's value. A non-object payload merges nothing and the state
/// is returned unchanged.
pub fn object_handler(kind: impl Into<String>, payload_key: impl Into<String>) -> HandlerMap {
    let payload_key = payload_key.into();
    HandlerMap::new().on(kind, move |state, action| {
        let Some(Value::Object(patch)) = action.get(&payload_key) else {
            warn!(key = %payload_key, "object handler received non-object payload");
            return state.clone();
        };
        let mut merged = match state {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }
        Value::Object(merged)
    })
}

/// Handler map with a single entry that appends the payload array under
/// `payload_key` to the end of the existing array state.
///
/// Order is preserved and nothing is deduplicated. A non-array payload
/// appends nothing and the state is returned unchanged.
pub fn array_handler(kind: impl Into<String>, payload_key: impl Into<String>) -> HandlerMap {
    let payload_key = payload_key.into();
    HandlerMap::new().on(kind, move |state, action| {
        let Some(Value::Array(tail)) = action.get(&payload_key) else {
            warn!(key = %payload_key, "array handler received non-array payload");
            return state.clone();
        };
        let mut items = match state {
            Value::Array(items) => items.clone(),
            _ => Vec::new(),
        };
        items.extend(tail.iter().cloned());
        Value::Array(items)
    })
}
