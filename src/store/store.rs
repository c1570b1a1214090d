use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::trace;

use crate::action::{Action, Reducer};
use crate::error::SliceError;
use crate::registry::Registry;

/// The full store state: one value per registered slice.
pub type SliceMap = HashMap<String, Value>;

type Subscriber = Box<dyn Fn(&SliceMap) + Send + Sync>;

// Private seeding action; the reducers' pass-through answers each slice's
// initial state for it.
const INIT_KIND: &str = "@@slicekit/INIT";

/// A thread-safe store holding the current value of every slice.
///
/// Assembled from a compiled reducer map, usually via
/// [`Store::from_registry`]. Dispatched actions are routed through every
/// slice's reducer; subscribers are notified with the post-dispatch state.
pub struct Store {
    state: Arc<RwLock<SliceMap>>,
    reducers: Arc<HashMap<String, Reducer>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
}

impl Store {
    /// Create a store from a `state_key -> reducer` map, seeding every
    /// slice with its reducer's initial state.
    pub fn new(reducers: HashMap<String, Reducer>) -> Self {
        let init = Action::new(INIT_KIND);
        let state = reducers
            .iter()
            .map(|(key, reducer)| (key.clone(), reducer(None, &init)))
            .collect();
        Self {
            state: Arc::new(RwLock::new(state)),
            reducers: Arc::new(reducers),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Assemble a store from an initialized registry.
    pub fn from_registry(registry: &Registry) -> Result<Self, SliceError> {
        Ok(Self::new(registry.reducers()?))
    }

    /// Route an action through every slice's reducer and notify
    /// subscribers with the resulting state.
    pub fn dispatch(&self, action: &Action) {
        {
            let mut state = self.state.write().unwrap();
            for (key, reducer) in self.reducers.iter() {
                let next = reducer(state.get(key), action);
                state.insert(key.clone(), next);
            }
        }
        trace!(kind = %action.kind, "dispatched action");
        self.notify();
    }

    /// Get a clone of one slice's current value.
    pub fn select(&self, state_key: &str) -> Option<Value> {
        self.state.read().unwrap().get(state_key).cloned()
    }

    /// Get a clone of the full state map.
    pub fn get(&self) -> SliceMap {
        self.state.read().unwrap().clone()
    }

    /// Read the state map without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SliceMap) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every dispatch with the post-dispatch state.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&SliceMap) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Box::new(callback));
    }

    /// Notify all subscribers of a state change.
    fn notify(&self) {
        let state = self.state.read().unwrap();
        let subscribers = self.subscribers.read().unwrap();
        for subscriber in subscribers.iter() {
            subscriber(&state);
        }
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducers: Arc::clone(&self.reducers),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SliceModel;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn two_slice_store() -> (Registry, Store) {
        let mut registry = Registry::new();
        registry
            .init(vec![
                Registry::create_model("UPDATE_USER", "user", json!({ "id": null })).unwrap(),
                Registry::create_model("UPDATE_LOG", "log", json!({ "lines": [] })).unwrap(),
            ])
            .unwrap();
        let store = Store::from_registry(&registry).unwrap();
        (registry, store)
    }

    #[test]
    fn seeds_initial_state() {
        let (_, store) = two_slice_store();

        assert_eq!(store.select("user"), Some(json!({ "id": null })));
        assert_eq!(store.select("log"), Some(json!({ "lines": [] })));
        assert_eq!(store.select("absent"), None);
    }

    #[test]
    fn dispatch_updates_matching_slice_only() {
        let (registry, store) = two_slice_store();
        let action = registry.update_action("user", json!({ "id": 7 })).unwrap();

        store.dispatch(&action);

        assert_eq!(store.select("user"), Some(json!({ "id": 7 })));
        assert_eq!(store.select("log"), Some(json!({ "lines": [] })));
    }

    #[test]
    fn unknown_action_kind_leaves_state_untouched() {
        let (_, store) = two_slice_store();
        let before = store.get();

        store.dispatch(&Action::new("SOMETHING_ELSE"));

        assert_eq!(store.get(), before);
    }

    #[test]
    fn subscribers_fire_once_per_dispatch() {
        let (registry, store) = two_slice_store();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        store.subscribe(move |_state| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let action = registry.update_action("user", json!({ "id": 1 })).unwrap();
        store.dispatch(&action);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.dispatch(&action);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscribers_observe_post_dispatch_state() {
        let (registry, store) = two_slice_store();
        let seen = Arc::new(RwLock::new(Value::Null));
        let seen_clone = seen.clone();

        store.subscribe(move |state| {
            *seen_clone.write().unwrap() = state["user"].clone();
        });

        let action = registry.update_action("user", json!({ "id": 9 })).unwrap();
        store.dispatch(&action);

        assert_eq!(*seen.read().unwrap(), json!({ "id": 9 }));
    }

    #[test]
    fn clones_share_state() {
        let (registry, store) = two_slice_store();
        let other = store.clone();

        let action = registry.update_action("user", json!({ "id": 3 })).unwrap();
        other.dispatch(&action);

        assert_eq!(store.select("user"), Some(json!({ "id": 3 })));
    }

    #[test]
    fn model_actions_flow_through_store() {
        let model = SliceModel::new("user", json!({ "id": null })).unwrap();
        let mut registry = Registry::new();
        registry.init(vec![model.descriptor()]).unwrap();
        let store = Store::from_registry(&registry).unwrap();

        store.dispatch(&model.action(json!({ "id": 5 })));
        assert_eq!(store.select("user"), Some(json!({ "id": 5 })));

        store.dispatch(&model.reset_action());
        assert_eq!(store.select("user"), Some(json!({ "id": null })));
    }
}
