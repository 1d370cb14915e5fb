
use crate::{
    class::{ClassDescriptor, ClassToken},
    collection::{ClassCollection, CollectionError},
    predicate::{DescribedPredicate, class::have_name_of},
    traits::Path,
};
use std::{collections::BTreeSet, sync::Arc};

struct SomeClass;

impl Path for SomeClass {
    const PATH: &'static str = "com.example.core.ClassCollectionTest$SomeClass";
}

struct SomeOtherClass;

impl Path for SomeOtherClass {
    const PATH: &'static str = "com.example.core.ClassCollectionTest$SomeOtherClass";
}

struct UnrelatedClass;

impl Path for UnrelatedClass {
    const PATH: &'static str = "com.example.other.Unrelated";
}

fn all_classes() -> ClassCollection {
    ClassCollection::from_mapping(
        [
            (SomeClass::PATH, ClassDescriptor::of::<SomeClass>()),
            (SomeOtherClass::PATH, ClassDescriptor::of::<SomeOtherClass>()),
        ],
        "classes",
    )
    .expect("fixture mapping should build")
}

fn exist() -> DescribedPredicate<ClassDescriptor> {
    DescribedPredicate::described("exist", |_| true)
}

#[test]
fn that_filters_the_elements() {
    let only_some_class = all_classes().that(&have_name_of::<SomeClass>());

    let classes: Vec<&ClassDescriptor> = only_some_class.iter().collect();
    assert_eq!(classes, vec![&ClassDescriptor::of::<SomeClass>()]);
}

#[test]
fn that_sets_description_from_predicate() {
    let only_some_class = all_classes().that(&have_name_of::<SomeClass>());

    assert_eq!(
        only_some_class.description(),
        "classes that have the name SomeClass"
    );
}

#[test]
fn described_filter_then_redescribe() {
    let existing = all_classes().that(&exist());
    assert_eq!(existing.description(), "classes that exist");

    let customized = all_classes().that(&exist()).as_("customized");
    assert_eq!(customized.description(), "customized");
    assert_eq!(customized.len(), 2);
}

#[test]
fn undescribed_filter_keeps_description() {
    let renamed = all_classes().as_("renamed");
    let filtered = renamed.that(&DescribedPredicate::undescribed(|class: &ClassDescriptor| {
        class.simple_name() == "SomeOtherClass"
    }));

    assert_eq!(filtered.description(), "renamed");
    assert_eq!(filtered.prefix(), "renamed");
    assert_eq!(filtered.len(), 1);
}

#[test]
fn chained_described_filters_hang_from_root_prefix() {
    let chained = all_classes()
        .that(&exist())
        .that(&have_name_of::<SomeOtherClass>());

    assert_eq!(chained.description(), "classes that have the name SomeOtherClass");
    assert_eq!(chained.prefix(), "classes");
}

#[test]
fn redescribed_collection_becomes_new_root() {
    let chained = all_classes()
        .that(&exist())
        .as_("core classes")
        .that(&have_name_of::<SomeClass>());

    assert_eq!(chained.description(), "core classes that have the name SomeClass");
}

#[test]
fn empty_filter_result_is_a_valid_collection() {
    let none = all_classes().that(&DescribedPredicate::always_false());

    assert!(none.is_empty());
    assert_eq!(none.iter().count(), 0);
    assert_eq!(none.description(), "classes that always false");
}

#[test]
fn contain_type() {
    let all = all_classes();

    assert!(!all.contain(&ClassToken::of::<UnrelatedClass>()));
    assert!(all.contain(&ClassToken::of::<SomeOtherClass>()));
    assert!(all.contain_name(SomeClass::PATH));
}

#[test]
fn get_type_returns_matching_descriptor() {
    let all = all_classes();

    let found = all
        .get(&ClassToken::of::<SomeOtherClass>())
        .expect("registered class should resolve");
    assert_eq!(found, &ClassDescriptor::of::<SomeOtherClass>());
}

#[test]
fn get_missing_type_fails_with_name() {
    let err = all_classes()
        .get(&ClassToken::of::<UnrelatedClass>())
        .expect_err("unknown class should not resolve");

    assert_eq!(
        err,
        CollectionError::NotFound {
            name: UnrelatedClass::PATH.to_string()
        }
    );
    assert!(err.to_string().contains("com.example.other.Unrelated"));
}

#[test]
fn of_iterable_yields_exactly_the_input() {
    let input: BTreeSet<ClassDescriptor> = [
        ClassDescriptor::new("com.example.core.ClassCollectionTest"),
        ClassDescriptor::new("com.example.core.ClassDescriptor"),
    ]
    .into_iter()
    .collect();

    let classes = ClassCollection::of(input.clone()).expect("unique names should build");

    assert_eq!(classes.description(), "classes");
    let output: BTreeSet<ClassDescriptor> = classes.iter().cloned().collect();
    assert_eq!(output, input);
}

#[test]
fn of_rejects_duplicate_names() {
    let err = ClassCollection::of([
        ClassDescriptor::new("a.Twice"),
        ClassDescriptor::new("a.Once"),
        ClassDescriptor::new("a.Twice"),
    ])
    .expect_err("duplicate names should be rejected");

    assert_eq!(
        err,
        CollectionError::DuplicateKey {
            name: "a.Twice".to_string()
        }
    );
}

#[test]
fn from_mapping_rejects_key_name_mismatch() {
    let err = ClassCollection::from_mapping([("a.Key", ClassDescriptor::new("a.Name"))], "classes")
        .expect_err("mismatched key should be rejected");

    assert_eq!(
        err,
        CollectionError::KeyMismatch {
            key: "a.Key".to_string(),
            name: "a.Name".to_string(),
        }
    );
}

#[test]
fn from_mapping_rejects_empty_description() {
    let err = ClassCollection::from_mapping([("a.B", ClassDescriptor::new("a.B"))], "")
        .expect_err("empty description should be rejected");

    assert_eq!(err, CollectionError::EmptyDescription);
}

#[test]
fn derived_collections_share_descriptors() {
    let all = all_classes();
    let filtered = all.that(&have_name_of::<SomeClass>());
    let renamed = all.as_("renamed");

    let parent = all.shared().next().expect("fixture is not empty");
    let child = filtered.shared().next().expect("filter kept SomeClass");
    assert!(Arc::ptr_eq(parent, child));
    assert!(
        all.shared()
            .zip(renamed.shared())
            .all(|(a, b)| Arc::ptr_eq(a, b))
    );
}

#[test]
fn equality_ignores_prefix_but_not_description() {
    let all = all_classes();

    assert_eq!(all, all_classes());
    assert_eq!(all.that(&exist()).as_("x"), all.as_("x"));
    assert_ne!(all, all.as_("renamed"));
}

#[test]
fn report_lists_description_and_names() {
    let report = all_classes().that(&exist()).report();

    assert_eq!(report.description, "classes that exist");
    assert_eq!(report.prefix, "classes");
    assert_eq!(
        report.classes,
        vec![SomeClass::PATH.to_string(), SomeOtherClass::PATH.to_string()]
    );

    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["description"], "classes that exist");
}

#[cfg(feature = "metrics")]
#[test]
fn operations_are_counted() {
    use crate::obs::{metrics_report, metrics_reset_all};

    metrics_reset_all();

    let all = all_classes();
    let filtered = all.that(&have_name_of::<SomeClass>());
    let _ = filtered.as_("renamed");
    let _ = all.get(&ClassToken::of::<UnrelatedClass>());
    let _ = ClassCollection::of([ClassDescriptor::new("a.B"), ClassDescriptor::new("a.B")]);

    let counters = metrics_report().counters;
    assert_eq!(counters.built_from_mapping, 1);
    assert_eq!(counters.build_rejections, 1);
    assert_eq!(counters.classes_indexed, 2);
    assert_eq!(counters.filters_applied, 1);
    assert_eq!(counters.filters_described, 1);
    assert_eq!(counters.classes_scanned, 2);
    assert_eq!(counters.classes_retained, 1);
    assert_eq!(counters.redescriptions, 1);
    assert_eq!(counters.lookups, 1);
    assert_eq!(counters.lookup_misses, 1);
    assert_eq!(counters.collections_built(), 1);
}
