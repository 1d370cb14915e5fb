use crate::traits::ClassKind;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// ClassToken
///
/// Runtime handle for one compiled class. Tokens compare by fully-qualified
/// name only; they carry no other information.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct ClassToken(String);

impl ClassToken {
    /// Build a token from a fully-qualified class name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build the token for a Rust marker type standing in for a class.
    #[must_use]
    pub fn of<T: ClassKind>() -> Self {
        Self(T::PATH.to_string())
    }

    /// Fully-qualified class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassToken {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ClassToken {
    fn from(name: String) -> Self {
        Self(name)
    }
}
