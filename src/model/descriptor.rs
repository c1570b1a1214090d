use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SliceError;

/// The registry-facing shape of one slice: update action name, state key
/// and initial value.
///
/// Descriptors are constructed once at application start-up and are
/// immutable thereafter. Both names must be non-empty; this is enforced at
/// construction so downstream code never has to probe fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceDescriptor {
    update_action: String,
    state_key: String,
    initial_state: Value,
}

impl SliceDescriptor {
    /// Create a descriptor, rejecting empty `update_action` or `state_key`.
    pub fn new(
        update_action: impl Into<String>,
        state_key: impl Into<String>,
        initial_state: Value,
    ) -> Result<Self, SliceError> {
        let update_action = update_action.into();
        let state_key = state_key.into();
        if update_action.is_empty() {
            return Err(SliceError::InvalidDescriptor {
                field: "update_action",
            });
        }
        if state_key.is_empty() {
            return Err(SliceError::InvalidDescriptor { field: "state_key" });
        }
        Ok(Self {
            update_action,
            state_key,
            initial_state,
        })
    }

    // Internal constructor for callers whose fields are already validated.
    pub(crate) fn from_parts(update_action: String, state_key: String, initial_state: Value) -> Self {
        Self {
            update_action,
            state_key,
            initial_state,
        }
    }

    /// The action kind that updates this slice.
    pub fn update_action(&self) -> &str {
        &self.update_action
    }

    /// The key this slice is stored under.
    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    /// The value the slice starts from.
    pub fn initial_state(&self) -> &Value {
        &self.initial_state
    }
}
