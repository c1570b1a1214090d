use std::sync::Arc;

use serde_json::Value;

use super::action::Action;
use super::handler::HandlerMap;

/// A pure state transition function for one slice.
///
/// `None` state means the slice has not been initialized yet; the reducer
/// answers the initial state in that case.
pub type Reducer = Arc<dyn Fn(Option<&Value>, &Action) -> Value + Send + Sync>;

/// Build a reducer from an initial state and a handler map.
///
/// The returned function defaults absent state to `initial_state`,
/// dispatches to the handler registered for the action's kind when there is
/// one, and otherwise returns the state unchanged. Unknown action kinds are
/// a deliberate pass-through, not an error.
///
/// # Example
///
/// ```
/// use slicekit::{create_action, create_reducer, object_handler};
/// use serde_json::json;
///
/// let reducer = create_reducer(json!({ "count": 0 }), object_handler("BUMP", "patch"));
///
/// // Absent state answers the initial state.
/// let seeded = reducer(None, &slicekit::Action::new("@@INIT"));
/// assert_eq!(seeded, json!({ "count": 0 }));
///
/// let bump = create_action("BUMP", &["patch"]).build([json!({ "count": 1 })]);
/// assert_eq!(reducer(Some(&seeded), &bump), json!({ "count": 1 }));
/// ```
pub fn create_reducer(initial_state: Value, handlers: HandlerMap) -> Reducer {
    Arc::new(move |state, action| {
        let current = match state {
            Some(value) => value.clone(),
            None => initial_state.clone(),
        };
        match handlers.get(&action.kind) {
            Some(handler) => handler(&current, action),
            None => current,
        }
    })
}
