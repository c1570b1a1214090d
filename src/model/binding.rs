use serde_json::Value;

use super::model::SliceModel;
use crate::action::Action;
use crate::store::Store;

/// A per-render package of slice value, bound dispatchers and raw dispatch.
///
/// Produced by [`SliceModel::bind`]. Every named update function of the
/// model is exposed in bound form: invoking one builds the action and
/// dispatches it to the store in a single step, answering the action that
/// was dispatched.
///
/// Bindings hold a cheap clone of the store handle; [`ModelBinding::value`]
/// re-reads the slice on every call, so a binding held across dispatches
/// always observes the latest value.
pub struct ModelBinding {
    model: SliceModel,
    store: Store,
}

impl ModelBinding {
    pub(super) fn new(model: SliceModel, store: Store) -> Self {
        Self { model, store }
    }

    /// The current value of the slice, `Null` when the slice is absent
    /// from the store.
    pub fn value(&self) -> Value {
        self.store
            .select(self.model.state_key())
            .unwrap_or(Value::Null)
    }

    /// Dispatch the built-in full-merge update with `new_data`.
    pub fn update(&self, new_data: Value) -> Action {
        let action = self.model.action(new_data);
        self.store.dispatch(&action);
        action
    }

    /// Dispatch the built-in reset, restoring the slice's initial state.
    pub fn reset(&self) -> Action {
        let action = self.model.reset_action();
        self.store.dispatch(&action);
        action
    }

    /// Invoke a named update function in bound form.
    ///
    /// Builds the action with `params` and dispatches it, answering the
    /// action. `None` when no function with that name is registered.
    pub fn call(&self, name: &str, params: &[Value]) -> Option<Action> {
        let func = self.model.update_fn(name)?;
        let action = func(params);
        self.store.dispatch(&action);
        Some(action)
    }

    /// Names of the bound update functions, in registration order.
    pub fn update_names(&self) -> Vec<&str> {
        self.model.update_fn_names()
    }

    /// Raw dispatch capability, for actions outside this model.
    pub fn dispatch(&self, action: &Action) {
        self.store.dispatch(action);
    }
}
