use crate::error::ErrorClass;
use thiserror::Error as ThisError;

///
/// CollectionError
///
/// Construction and lookup failures. All are programmer errors surfaced
/// immediately; a failed call leaves every collection untouched.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum CollectionError {
    #[error("class '{name}' supplied more than once")]
    DuplicateKey { name: String },

    #[error("class collection description must not be empty")]
    EmptyDescription,

    #[error("class keyed as '{key}' is named '{name}'")]
    KeyMismatch { key: String, name: String },

    #[error("class '{name}' not found in collection")]
    NotFound { name: String },
}

impl CollectionError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::DuplicateKey { .. } => ErrorClass::Conflict,
            Self::EmptyDescription | Self::KeyMismatch { .. } => ErrorClass::InvariantViolation,
            Self::NotFound { .. } => ErrorClass::NotFound,
        }
    }
}
