//! The self-describing class collection.
//!
//! A collection pairs an immutable name-keyed snapshot of descriptors with
//! the sentence describing how it was derived. Two strings track that
//! sentence:
//!
//! - `prefix`: the root phrase `that` clauses hang from; only construction
//!   and `as_` change it
//! - `description`: what callers see; `that` with a described predicate sets
//!   it to `prefix + " that " + fragment`
//!
//! Chained described filters therefore never nest:
//! `of(..).that(a).that(b)` reads `"classes that b"`.

mod error;
#[cfg(test)]
mod tests;

pub use error::CollectionError;

use crate::{
    DEFAULT_DESCRIPTION, THAT_CONNECTOR,
    class::{ClassDescriptor, ClassToken},
    obs::{
        CollectionReport,
        sink::{self, BuildSource, MetricsEvent},
    },
    predicate::DescribedPredicate,
};
use std::{
    collections::{BTreeMap, btree_map::Entry},
    iter::FusedIterator,
    sync::Arc,
};

type ClassMap = BTreeMap<String, Arc<ClassDescriptor>>;

///
/// ClassCollection
///
/// Immutable snapshot of class descriptors keyed by fully-qualified name.
/// Derived collections share descriptors with their parent.
///

#[derive(Clone, Debug)]
pub struct ClassCollection {
    classes: Arc<ClassMap>,
    description: String,
    prefix: String,
}

impl ClassCollection {
    /// Build a collection from a name-keyed mapping.
    ///
    /// Every key must equal its descriptor's name and the description must
    /// not be empty. The description doubles as the root prefix.
    pub fn from_mapping<I, K, D>(
        by_name: I,
        description: impl Into<String>,
    ) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<Arc<ClassDescriptor>>,
    {
        let description = description.into();
        let result = Self::index_mapping(by_name).and_then(|classes| {
            if description.is_empty() {
                Err(CollectionError::EmptyDescription)
            } else {
                Ok(classes)
            }
        });

        Self::finish_build(result, description, BuildSource::Mapping)
    }

    /// Build a collection from unkeyed descriptors, described as `"classes"`.
    pub fn of<I, D>(classes: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<ClassDescriptor>>,
    {
        let result = Self::index_iterable(classes);

        Self::finish_build(result, DEFAULT_DESCRIPTION.to_string(), BuildSource::Iterable)
    }

    /// Keep the classes accepted by `predicate`.
    ///
    /// A described predicate rewrites the description to
    /// `"<prefix> that <fragment>"`; an undescribed one keeps it.
    #[must_use]
    pub fn that(&self, predicate: &DescribedPredicate<ClassDescriptor>) -> Self {
        let classes: ClassMap = self
            .classes
            .iter()
            .filter(|(_, class)| predicate.apply(class))
            .map(|(name, class)| (name.clone(), Arc::clone(class)))
            .collect();

        let description = if predicate.has_description() {
            format!("{}{THAT_CONNECTOR}{}", self.prefix, predicate.description())
        } else {
            self.description.clone()
        };

        let scanned = self.classes.len();
        let retained = classes.len();
        sink::record(MetricsEvent::Filtered {
            described: predicate.has_description(),
            scanned: scanned as u64,
            retained: retained as u64,
        });
        tracing::trace!(scanned, retained, description = %description, "class collection filtered");

        Self {
            classes: Arc::new(classes),
            description,
            prefix: self.prefix.clone(),
        }
    }

    /// Same classes, new description. The argument also becomes the root
    /// prefix for later `that` calls.
    #[must_use]
    pub fn as_(&self, description: impl Into<String>) -> Self {
        let description = description.into();
        sink::record(MetricsEvent::Redescribed);

        Self {
            classes: Arc::clone(&self.classes),
            prefix: description.clone(),
            description,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Root phrase the next described `that` will hang from.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn contain(&self, token: &ClassToken) -> bool {
        self.contain_name(token.name())
    }

    #[must_use]
    pub fn contain_name(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Look up the descriptor for `token`.
    pub fn get(&self, token: &ClassToken) -> Result<&ClassDescriptor, CollectionError> {
        self.get_by_name(token.name())
    }

    pub fn get_by_name(&self, name: &str) -> Result<&ClassDescriptor, CollectionError> {
        let found = self.classes.get(name);
        sink::record(MetricsEvent::Lookup {
            hit: found.is_some(),
        });

        found
            .map(AsRef::as_ref)
            .ok_or_else(|| CollectionError::NotFound {
                name: name.to_string(),
            })
    }

    /// Iterate descriptors in name order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.classes.values(),
        }
    }

    /// Iterate the shared descriptor handles, for callers that outlive the
    /// collection.
    pub fn shared(&self) -> impl ExactSizeIterator<Item = &Arc<ClassDescriptor>> {
        self.classes.values()
    }

    /// Iterate fully-qualified names in order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Serializable snapshot for reporting.
    #[must_use]
    pub fn report(&self) -> CollectionReport {
        CollectionReport {
            description: self.description.clone(),
            prefix: self.prefix.clone(),
            classes: self.names().map(str::to_string).collect(),
        }
    }

    // index_mapping
    // keys must match names; repeated keys in the input are rejected
    fn index_mapping<I, K, D>(by_name: I) -> Result<ClassMap, CollectionError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<Arc<ClassDescriptor>>,
    {
        let mut classes = ClassMap::new();

        for (key, class) in by_name {
            let key = key.into();
            let class = class.into();

            if key != class.name() {
                return Err(CollectionError::KeyMismatch {
                    key,
                    name: class.name().to_string(),
                });
            }
            Self::insert_unique(&mut classes, key, class)?;
        }

        Ok(classes)
    }

    fn index_iterable<I, D>(classes: I) -> Result<ClassMap, CollectionError>
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<ClassDescriptor>>,
    {
        let mut indexed = ClassMap::new();

        for class in classes {
            let class = class.into();
            Self::insert_unique(&mut indexed, class.name().to_string(), class)?;
        }

        Ok(indexed)
    }

    fn insert_unique(
        classes: &mut ClassMap,
        key: String,
        class: Arc<ClassDescriptor>,
    ) -> Result<(), CollectionError> {
        match classes.entry(key) {
            Entry::Occupied(entry) => Err(CollectionError::DuplicateKey {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(class);
                Ok(())
            }
        }
    }

    fn finish_build(
        result: Result<ClassMap, CollectionError>,
        description: String,
        source: BuildSource,
    ) -> Result<Self, CollectionError> {
        match result {
            Ok(classes) => {
                sink::record(MetricsEvent::CollectionBuilt {
                    source,
                    classes: classes.len() as u64,
                });
                tracing::debug!(
                    classes = classes.len(),
                    description = %description,
                    ?source,
                    "class collection built"
                );

                Ok(Self {
                    classes: Arc::new(classes),
                    prefix: description.clone(),
                    description,
                })
            }
            Err(err) => {
                sink::record(MetricsEvent::BuildRejected { source });
                tracing::debug!(error = %err, ?source, "class collection rejected");

                Err(err)
            }
        }
    }
}

impl PartialEq for ClassCollection {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.classes == other.classes
    }
}

impl Eq for ClassCollection {}

impl<'a> IntoIterator for &'a ClassCollection {
    type Item = &'a ClassDescriptor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// Iter
/// Borrowing iterator over a collection's descriptors.
///

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::collections::btree_map::Values<'a, String, Arc<ClassDescriptor>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ClassDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(AsRef::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(AsRef::as_ref)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
