use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An immutable, tagged payload describing a requested state transition.
///
/// Serializes to the conventional flat shape `{"type": …, "<key>": …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action kind, e.g. `UPDATE_SESSION`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload entries keyed by the names declared on the builder.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Action {
    /// Create an action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Look up one payload entry by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

/// A curried action constructor produced by [`create_action`].
///
/// The builder carries the action kind and the declared payload key names;
/// [`ActionBuilder::build`] zips the provided values to those names.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    kind: String,
    payload_keys: Vec<String>,
}

impl ActionBuilder {
    /// Build an action by zipping `values` to the declared payload keys.
    ///
    /// Count mismatches are not errors: a key with no matching value is
    /// filled with `Value::Null`, and excess values are dropped.
    pub fn build<I>(&self, values: I) -> Action
    where
        I: IntoIterator<Item = Value>,
    {
        let mut values = values.into_iter();
        let mut payload = Map::new();
        for key in &self.payload_keys {
            payload.insert(key.clone(), values.next().unwrap_or(Value::Null));
        }
        Action {
            kind: self.kind.clone(),
            payload,
        }
    }

    /// The action kind this builder produces.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Create a curried action constructor for `kind` with named payload keys.
///
/// # Example
///
/// ```
/// use slicekit::create_action;
/// use serde_json::json;
///
/// let builder = create_action("UPDATE_SESSION", &["session"]);
/// let action = builder.build([json!({ "user": "ada" })]);
/// assert_eq!(action.kind, "UPDATE_SESSION");
/// assert_eq!(action.get("session"), Some(&json!({ "user": "ada" })));
/// ```
pub fn create_action(kind: impl Into<String>, payload_keys: &[&str]) -> ActionBuilder {
    ActionBuilder {
        kind: kind.into(),
        payload_keys: payload_keys.iter().map(|k| (*k).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zips_keys_to_values() {
        let builder = create_action("PAIR", &["left", "right"]);
        let action = builder.build([json!(1), json!(2)]);

        assert_eq!(action.get("left"), Some(&json!(1)));
        assert_eq!(action.get("right"), Some(&json!(2)));
    }

    #[test]
    fn missing_values_become_null() {
        let builder = create_action("PAIR", &["left", "right"]);
        let action = builder.build([json!(1)]);

        assert_eq!(action.get("left"), Some(&json!(1)));
        assert_eq!(action.get("right"), Some(&Value::Null));
    }

    #[test]
    fn excess_values_are_dropped() {
        let builder = create_action("ONE", &["only"]);
        let action = builder.build([json!(1), json!(2), json!(3)]);

        assert_eq!(action.payload.len(), 1);
        assert_eq!(action.get("only"), Some(&json!(1)));
    }

    #[test]
    fn serializes_flat() {
        let action = create_action("UPDATE_USER", &["user"]).build([json!({ "id": 7 })]);
        let wire = serde_json::to_value(&action).unwrap();

        assert_eq!(wire, json!({ "type": "UPDATE_USER", "user": { "id": 7 } }));
    }
}
