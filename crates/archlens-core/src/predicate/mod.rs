//! Described predicates: boolean tests paired with a natural-language
//! fragment that collections splice into their own description.

pub mod class;

use crate::UNDESCRIBED;
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

type TestFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

///
/// DescribedPredicate
///
/// A pure test over `T` plus the fragment describing what it accepts,
/// e.g. `"have the name Foo"` or `"exist"`. Cloning shares the test.
///
/// Undescribed predicates carry the `UNDESCRIBED` sentinel and leave the
/// description of a filtered collection untouched.
///

pub struct DescribedPredicate<T: ?Sized> {
    description: String,
    has_description: bool,
    test: TestFn<T>,
}

impl<T: ?Sized + 'static> DescribedPredicate<T> {
    /// Build a predicate with an explicit description fragment.
    #[must_use]
    pub fn described(
        description: impl Into<String>,
        test: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            has_description: true,
            test: Arc::new(test),
        }
    }

    /// Build a predicate whose description a collection should ignore.
    #[must_use]
    pub fn undescribed(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            description: UNDESCRIBED.to_string(),
            has_description: false,
            test: Arc::new(test),
        }
    }

    #[must_use]
    pub fn always_true() -> Self {
        Self::described("always true", |_| true)
    }

    #[must_use]
    pub fn always_false() -> Self {
        Self::described("always false", |_| false)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn has_description(&self) -> bool {
        self.has_description
    }

    /// Evaluate the test against one value.
    #[must_use]
    pub fn apply(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Same test, new description. The result counts as described.
    #[must_use]
    pub fn as_(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            has_description: true,
            test: self.test,
        }
    }

    /// Accept values accepted by both predicates.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let (left, right) = (self.test, other.test);

        Self {
            description: format!("({}) and ({})", self.description, other.description),
            has_description: self.has_description || other.has_description,
            test: Arc::new(move |value: &T| left(value) && right(value)),
        }
    }

    /// Accept values accepted by either predicate.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let (left, right) = (self.test, other.test);

        Self {
            description: format!("({}) or ({})", self.description, other.description),
            has_description: self.has_description || other.has_description,
            test: Arc::new(move |value: &T| left(value) || right(value)),
        }
    }

    /// Accept exactly the values this predicate rejects.
    #[must_use]
    pub fn negate(self) -> Self {
        let inner = self.test;

        Self {
            description: format!("not ({})", self.description),
            has_description: self.has_description,
            test: Arc::new(move |value: &T| !inner(value)),
        }
    }

    /// Test a projection of the input instead of the input itself.
    ///
    /// Description and described-ness carry over unchanged.
    #[must_use]
    pub fn on_result_of<S, F>(self, project: F) -> DescribedPredicate<S>
    where
        S: ?Sized + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
        T: Sized,
    {
        let inner = self.test;

        DescribedPredicate {
            description: self.description,
            has_description: self.has_description,
            test: Arc::new(move |value: &S| inner(&project(value))),
        }
    }
}

impl<T: ?Sized> Clone for DescribedPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            has_description: self.has_description,
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for DescribedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribedPredicate")
            .field("description", &self.description)
            .field("has_description", &self.has_description)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> fmt::Display for DescribedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl<T: ?Sized + 'static> BitAnd for DescribedPredicate<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> BitOr for DescribedPredicate<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: ?Sized + 'static> Not for DescribedPredicate<T> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}
