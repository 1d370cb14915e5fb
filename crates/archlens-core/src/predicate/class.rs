//! Library-provided predicates over class descriptors.
//!
//! Each fragment reads as the tail of a sentence starting with
//! "classes that ...".

use crate::{
    class::{ClassDescriptor, ClassToken, package::PackagePattern},
    predicate::DescribedPredicate,
    traits::ClassKind,
};

/// Match the class a marker type stands for, described by its simple name.
#[must_use]
pub fn have_name_of<T: ClassKind>() -> DescribedPredicate<ClassDescriptor> {
    let target = ClassDescriptor::of::<T>();
    let description = format!("have the name {}", target.simple_name());
    let token = ClassToken::of::<T>();

    DescribedPredicate::described(description, move |class: &ClassDescriptor| {
        class.reflect() == token
    })
}

#[must_use]
pub fn have_fully_qualified_name(name: impl Into<String>) -> DescribedPredicate<ClassDescriptor> {
    let name = name.into();

    DescribedPredicate::described(
        format!("have fully qualified name '{name}'"),
        move |class: &ClassDescriptor| class.name() == name,
    )
}

#[must_use]
pub fn have_simple_name(name: impl Into<String>) -> DescribedPredicate<ClassDescriptor> {
    let name = name.into();

    DescribedPredicate::described(
        format!("have simple name '{name}'"),
        move |class: &ClassDescriptor| class.simple_name() == name,
    )
}

/// Match classes whose package fits `pattern`; a trailing `..` also
/// admits sub-packages.
#[must_use]
pub fn reside_in_package(pattern: impl Into<String>) -> DescribedPredicate<ClassDescriptor> {
    let pattern = pattern.into();
    let matcher = PackagePattern::parse(&pattern);

    DescribedPredicate::described(
        format!("reside in a package '{pattern}'"),
        move |class: &ClassDescriptor| matcher.matches(class.package_name()),
    )
}

#[must_use]
pub fn reside_in_any_package<I, S>(patterns: I) -> DescribedPredicate<ClassDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
    let quoted = patterns
        .iter()
        .map(|pattern| format!("'{pattern}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let matchers: Vec<PackagePattern> = patterns
        .iter()
        .map(|pattern| PackagePattern::parse(pattern))
        .collect();

    DescribedPredicate::described(
        format!("reside in any package [{quoted}]"),
        move |class: &ClassDescriptor| {
            matchers
                .iter()
                .any(|matcher| matcher.matches(class.package_name()))
        },
    )
}
