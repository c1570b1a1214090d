use std::sync::Arc;

use serde_json::Value;

use super::binding::ModelBinding;
use super::descriptor::SliceDescriptor;
use crate::action::{create_action, Action, ActionBuilder};
use crate::error::SliceError;
use crate::store::Store;

pub(super) type UpdateFn = Arc<dyn Fn(&[Value]) -> Action + Send + Sync>;

#[derive(Clone)]
pub(super) struct NamedUpdate {
    pub(super) name: String,
    pub(super) func: UpdateFn,
}

/// Base data access object for one slice of store state.
///
/// Binds a `state_key` to the derived update action `UPDATE_<STATE_KEY>`
/// and the slice's initial value. Two named update functions are registered
/// at construction: `"update"` (full-merge update from its first parameter)
/// and `"reset"` (update carrying the original initial value). Further
/// named functions can be added with [`SliceModel::add_update_fn`].
///
/// # Example
///
/// ```
/// use slicekit::SliceModel;
/// use serde_json::json;
///
/// let model = SliceModel::new("session", json!({ "user": null })).unwrap();
/// assert_eq!(model.update_action(), "UPDATE_SESSION");
///
/// let action = model.action(json!({ "user": "ada" }));
/// assert_eq!(action.kind, "UPDATE_SESSION");
/// assert_eq!(action.get("session"), Some(&json!({ "user": "ada" })));
/// ```
#[derive(Clone)]
pub struct SliceModel {
    state_key: String,
    update_action: String,
    initial_state: Value,
    builder: ActionBuilder,
    update_fns: Vec<NamedUpdate>,
}

impl SliceModel {
    /// Create a model for `state_key`, deriving its update action name.
    pub fn new(state_key: impl Into<String>, initial_state: Value) -> Result<Self, SliceError> {
        let state_key = state_key.into();
        if state_key.is_empty() {
            return Err(SliceError::InvalidDescriptor { field: "state_key" });
        }
        let update_action = format!("UPDATE_{}", state_key.to_uppercase());
        let builder = create_action(update_action.as_str(), &[state_key.as_str()]);

        let mut model = Self {
            state_key,
            update_action,
            initial_state,
            builder,
            update_fns: Vec::new(),
        };

        let update = {
            let builder = model.builder.clone();
            move |params: &[Value]| builder.build([params.first().cloned().unwrap_or(Value::Null)])
        };
        model.add_update_fn("update", update)?;

        let reset = {
            let builder = model.builder.clone();
            let initial = model.initial_state.clone();
            move |_params: &[Value]| builder.build([initial.clone()])
        };
        model.add_update_fn("reset", reset)?;

        Ok(model)
    }

    /// The key this model's slice is stored under.
    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    /// The derived update action name, `UPDATE_<STATE_KEY>`.
    pub fn update_action(&self) -> &str {
        &self.update_action
    }

    /// The value the slice starts from.
    pub fn initial_state(&self) -> &Value {
        &self.initial_state
    }

    /// Build the canonical update action carrying `new_data` under this
    /// model's state key.
    pub fn action(&self, new_data: Value) -> Action {
        self.builder.build([new_data])
    }

    /// Build the update action that restores the original initial state.
    pub fn reset_action(&self) -> Action {
        self.action(self.initial_state.clone())
    }

    /// The registry-facing descriptor for this model.
    pub fn descriptor(&self) -> SliceDescriptor {
        SliceDescriptor::from_parts(
            self.update_action.clone(),
            self.state_key.clone(),
            self.initial_state.clone(),
        )
    }

    /// Register a named update function.
    ///
    /// The function receives the caller's parameters and answers a
    /// dispatchable action. Names are unique per model; registering an
    /// existing name fails with [`SliceError::DuplicateUpdateFn`].
    pub fn add_update_fn<F>(&mut self, name: impl Into<String>, func: F) -> Result<(), SliceError>
    where
        F: Fn(&[Value]) -> Action + Send + Sync + 'static,
    {
        let name = name.into();
        if self.update_fns.iter().any(|entry| entry.name == name) {
            return Err(SliceError::DuplicateUpdateFn { name });
        }
        self.update_fns.push(NamedUpdate {
            name,
            func: Arc::new(func),
        });
        Ok(())
    }

    /// Names of all registered update functions, in registration order.
    pub fn update_fn_names(&self) -> Vec<&str> {
        self.update_fns
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub(super) fn update_fn(&self, name: &str) -> Option<&UpdateFn> {
        self.update_fns
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.func)
    }

    /// Package the current slice value and bound dispatchers for UI code.
    ///
    /// The binding is rebuilt on every call; there is no memoization, which
    /// is acceptable at UI re-render volume.
    pub fn bind(&self, store: &Store) -> ModelBinding {
        ModelBinding::new(self.clone(), store.clone())
    }

    /// Invoke `f` with the current slice value (render-prop consumer).
    pub fn with_value<R>(&self, store: &Store, f: impl FnOnce(&Value) -> R) -> R {
        let value = store.select(&self.state_key).unwrap_or(Value::Null);
        f(&value)
    }

    /// Invoke `f` with the bound update dispatchers (render-prop producer).
    pub fn with_updates<R>(&self, store: &Store, f: impl FnOnce(&ModelBinding) -> R) -> R {
        f(&self.bind(store))
    }
}
