use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::debug;

use crate::action::{create_action, create_reducer, object_handler, Action, Reducer};
use crate::error::SliceError;
use crate::model::SliceDescriptor;

/// Collects slice descriptors at start-up and compiles the reducer map
/// consumed by store assembly.
///
/// A registry is an explicitly constructed, owned value: build one where
/// the application assembles its store and pass it by reference. It starts
/// uninitialized; the only transition is a single successful [`Registry::init`]
/// call, after which the registered set is frozen for the registry's
/// lifetime. There is no way to add slices incrementally and no way back.
///
/// # Example
///
/// ```
/// use slicekit::{Registry, Store};
/// use serde_json::json;
///
/// let mut registry = Registry::new();
/// registry
///     .init(vec![
///         Registry::create_model("UPDATE_USER", "user", json!({ "id": null })).unwrap(),
///     ])
///     .unwrap();
///
/// let store = Store::from_registry(&registry).unwrap();
/// let action = registry.update_action("user", json!({ "id": 7 })).unwrap();
/// store.dispatch(&action);
/// assert_eq!(store.select("user"), Some(json!({ "id": 7 })));
/// ```
#[derive(Default)]
pub struct Registry {
    models: Vec<SliceDescriptor>,
    initialized: bool,
}

impl Registry {
    /// Create an uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a descriptor, validating its fields.
    pub fn create_model(
        update_action: impl Into<String>,
        state_key: impl Into<String>,
        initial_state: Value,
    ) -> Result<SliceDescriptor, SliceError> {
        SliceDescriptor::new(update_action, state_key, initial_state)
    }

    /// Register the full descriptor list.
    ///
    /// Fails with [`SliceError::NoModels`] on an empty list, with
    /// [`SliceError::AlreadyInitialized`] on any second call (identical
    /// input included) and with [`SliceError::DuplicateStateKey`] when two
    /// descriptors share a state key. Not idempotent and not mergeable.
    pub fn init(&mut self, models: Vec<SliceDescriptor>) -> Result<(), SliceError> {
        if models.is_empty() {
            return Err(SliceError::NoModels);
        }
        if self.initialized {
            return Err(SliceError::AlreadyInitialized);
        }
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.state_key()) {
                return Err(SliceError::DuplicateStateKey {
                    state_key: model.state_key().to_string(),
                });
            }
        }

        debug!(slices = models.len(), "slice registry initialized");
        self.models = models;
        self.initialized = true;
        Ok(())
    }

    /// Whether [`Registry::init`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The registered descriptors, in registration order.
    pub fn models(&self) -> &[SliceDescriptor] {
        &self.models
    }

    /// Compile one reducer per registered slice.
    ///
    /// Every reducer pairs the slice's initial state with an object-merge
    /// handler for its update action; array-style slices are not served by
    /// this path. Fails with [`SliceError::NotInitialized`] before `init`.
    pub fn reducers(&self) -> Result<HashMap<String, Reducer>, SliceError> {
        if !self.initialized {
            return Err(SliceError::NotInitialized);
        }
        let mut reducers = HashMap::new();
        for model in &self.models {
            let reducer = create_reducer(
                model.initial_state().clone(),
                object_handler(model.update_action(), model.state_key()),
            );
            reducers.insert(model.state_key().to_string(), reducer);
        }
        debug!(slices = reducers.len(), "compiled reducer map");
        Ok(reducers)
    }

    /// Build the update action for a registered slice by key.
    ///
    /// Linear scan over the registered descriptors; slice counts are small
    /// and static. Fails with [`SliceError::UnknownStateKey`] when no
    /// descriptor matches.
    pub fn update_action(&self, state_key: &str, new_data: Value) -> Result<Action, SliceError> {
        for model in &self.models {
            if model.state_key() == state_key {
                let builder = create_action(model.update_action(), &[state_key]);
                return Ok(builder.build([new_data]));
            }
        }
        Err(SliceError::UnknownStateKey {
            state_key: state_key.to_string(),
        })
    }
}
