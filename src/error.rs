//! Error types for registry and model configuration.

use thiserror::Error;

/// Errors raised by registry, model and store assembly code.
///
/// Every variant is a synchronous contract violation: the caller fixed
/// call order or arguments are wrong, and retrying without a code change
/// cannot succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// `init` was called on a registry that is already initialized.
    #[error("registry already initialized")]
    AlreadyInitialized,

    /// A registry was queried before `init` succeeded.
    #[error("registry not initialized")]
    NotInitialized,

    /// `init` was called with an empty descriptor list.
    #[error("must provide models on initialization")]
    NoModels,

    /// A descriptor or model was constructed with an empty field.
    #[error("invalid slice descriptor: `{field}` must be non-empty")]
    InvalidDescriptor { field: &'static str },

    /// Two descriptors in one `init` call share a state key.
    #[error("duplicate state key `{state_key}`")]
    DuplicateStateKey { state_key: String },

    /// A lookup referenced a state key no descriptor was registered for.
    #[error("unknown state key `{state_key}`")]
    UnknownStateKey { state_key: String },

    /// An update function name was registered twice on the same model.
    #[error("update function named `{name}` already exists")]
    DuplicateUpdateFn { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SliceError::UnknownStateKey {
                state_key: "session".into()
            }
            .to_string(),
            "unknown state key `session`"
        );
        assert_eq!(
            SliceError::InvalidDescriptor { field: "state_key" }.to_string(),
            "invalid slice descriptor: `state_key` must be non-empty"
        );
    }
}
