///
/// PackagePattern
///
/// Package selector used by package predicates.
///
/// - `com.example` matches exactly that package
/// - `com.example..` matches `com.example` and every sub-package
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PackagePattern {
    Exact(String),
    Subtree(String),
}

impl PackagePattern {
    pub(crate) fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("..") {
            Some(root) => Self::Subtree(root.trim_end_matches('.').to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    pub(crate) fn matches(&self, package: &str) -> bool {
        match self {
            Self::Exact(expected) => package == expected,
            Self::Subtree(root) if root.is_empty() => true,
            Self::Subtree(root) => package
                .strip_prefix(root.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.')),
        }
    }
}
