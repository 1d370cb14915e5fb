use archlens::{Error, ErrorKind, ErrorOrigin, prelude::*};

struct Controller;

impl Path for Controller {
    const PATH: &'static str = "com.shop.api.OrderController";
}

struct Repository;

impl Path for Repository {
    const PATH: &'static str = "com.shop.persistence.OrderRepository";
}

fn imported() -> Result<ClassCollection, Error> {
    Ok(ClassCollection::of([
        ClassDescriptor::of::<Controller>(),
        ClassDescriptor::of::<Repository>(),
    ])?)
}

#[test]
fn prelude_supports_a_full_rule_chain() {
    let classes = imported().expect("fixture should build");

    let controllers = classes
        .that(&reside_in_any_package(["com.shop.api..", "com.shop.web.."]))
        .as_("controllers")
        .that(&have_name_of::<Controller>());

    assert_eq!(controllers.description(), "controllers that have the name OrderController");
    assert!(controllers.contain(&ClassToken::of::<Controller>()));
    assert!(!controllers.contain(&ClassToken::of::<Repository>()));
}

#[test]
fn lookup_failure_surfaces_as_public_error() {
    let classes = imported().expect("fixture should build");

    let err: Error = classes
        .that(&have_fully_qualified_name(Controller::PATH))
        .get(&ClassToken::of::<Repository>())
        .map_err(Error::from)
        .expect_err("filtered out class should not resolve");

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.origin, ErrorOrigin::Lookup);
    assert!(err.message.contains(Repository::PATH));
}

#[test]
fn duplicate_import_surfaces_as_public_error() {
    let err: Error = ClassCollection::of([
        ClassDescriptor::of::<Controller>(),
        ClassDescriptor::of::<Controller>(),
    ])
    .map_err(Error::from)
    .expect_err("duplicate import should fail");

    assert_eq!(err.kind, ErrorKind::DuplicateKey);
    assert_eq!(err.origin, ErrorOrigin::Build);
}

#[test]
fn version_is_exported() {
    assert!(!archlens::VERSION.is_empty());
    assert_eq!(archlens::DEFAULT_DESCRIPTION, "classes");
}
