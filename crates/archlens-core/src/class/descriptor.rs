use crate::{class::ClassToken, traits::ClassKind};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ClassDescriptor
///
/// Record about one compiled class, as handed over by the bytecode reader.
/// Identity is the fully-qualified name; two descriptors with the same name
/// are equal.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ClassDescriptor {
    name: String,
}

impl ClassDescriptor {
    /// Describe the class with the given fully-qualified name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Describe the class a Rust marker type stands for.
    #[must_use]
    pub fn of<T: ClassKind>() -> Self {
        Self::new(T::PATH)
    }

    /// Fully-qualified name, e.g. `com.example.Outer$Inner`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runtime token of the described class.
    #[must_use]
    pub fn reflect(&self) -> ClassToken {
        ClassToken::named(self.name.as_str())
    }

    /// Name without package and without enclosing classes.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let local = self.local_name();

        local.rsplit_once('$').map_or(local, |(_, simple)| simple)
    }

    /// Dotted package name; empty for the default package.
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.name.rsplit_once('.').map_or("", |(package, _)| package)
    }

    /// Whether the class is declared inside another class.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.local_name().contains('$')
    }

    // name after the package
    fn local_name(&self) -> &str {
        self.name.rsplit_once('.').map_or(self.name.as_str(), |(_, local)| local)
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
