use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// A failed remote call, storable inside slice state.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The lifecycle of one remotely loaded value: idle, loading, loaded or
/// failed.
///
/// `data` keeps loose JS-style semantics: any falsy value (`null`, `false`,
/// `0`, `""`) counts as "nothing loaded". The error constructor marks
/// `data` as `false` so a failed load never reads as loaded.
///
/// # Example
///
/// ```
/// use slicekit::RemoteData;
/// use serde_json::json;
///
/// let idle = RemoteData::default();
/// assert!(idle.can_fetch());
///
/// let loading = RemoteData::loading();
/// assert!(!loading.can_fetch());
///
/// let loaded = RemoteData::new(json!({ "rows": [1, 2] }));
/// assert!(!loaded.can_fetch());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteData {
    pub data: Value,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl RemoteData {
    /// Wrap a loaded value.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// The in-flight state.
    pub fn loading() -> Self {
        Self {
            data: Value::Null,
            loading: true,
            error: None,
        }
    }

    /// The failed state.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            data: Value::Bool(false),
            loading: false,
            error: Some(ApiError::new(code, message)),
        }
    }

    /// Idle-state detector: true only when nothing is loaded, nothing is
    /// in flight and no error is recorded. Callers use this to decide
    /// whether to issue a fetch.
    pub fn can_fetch(&self) -> bool {
        is_falsy(&self.data) && !self.loading && self.error.is_none()
    }
}

impl Default for RemoteData {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl From<RemoteData> for Value {
    fn from(remote: RemoteData) -> Self {
        json!({
            "data": remote.data,
            "loading": remote.loading,
            "error": remote.error,
        })
    }
}

impl TryFrom<Value> for RemoteData {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_fetch_truth_table() {
        assert!(RemoteData::default().can_fetch());
        assert!(RemoteData::new(Value::Null).can_fetch());
        assert!(RemoteData::new(json!(0)).can_fetch());
        assert!(RemoteData::new(json!("")).can_fetch());
        assert!(RemoteData::new(json!(false)).can_fetch());

        assert!(!RemoteData::new(json!({ "rows": [] })).can_fetch());
        assert!(!RemoteData::new(json!([1])).can_fetch());
        assert!(!RemoteData::new(json!(1)).can_fetch());
        assert!(!RemoteData::loading().can_fetch());
        assert!(!RemoteData::error(500, "boom").can_fetch());
    }

    #[test]
    fn error_state_marks_data_false() {
        let failed = RemoteData::error(404, "not found");

        assert_eq!(failed.data, Value::Bool(false));
        assert!(!failed.loading);
        assert_eq!(failed.error, Some(ApiError::new(404, "not found")));
        assert_eq!(
            failed.error.unwrap().to_string(),
            "not found (code 404)"
        );
    }

    #[test]
    fn slice_value_round_trip() {
        let loaded = RemoteData::new(json!({ "rows": [1, 2] }));
        let as_value = Value::from(loaded.clone());

        assert_eq!(
            as_value,
            json!({ "data": { "rows": [1, 2] }, "loading": false, "error": null })
        );
        assert_eq!(RemoteData::try_from(as_value).unwrap(), loaded);
    }
}
