use crate::{TemplateType, Type, TypeError, TypeIdentifier, TypeNode, WrappingType};

#[test]
fn base_type_comes_from_bound() {
    let bound = Type::class("Traversable").unwrap();
    let t = Type::template("T", bound.clone()).unwrap();

    assert_eq!(t.base_type().unwrap(), bound);
}

#[test]
fn base_type_of_nullable_bound_drops_null() {
    let t = Type::template("T", Type::nullable(Type::int())).unwrap();
    assert_eq!(t.base_type().unwrap(), Type::int());
}

#[test]
fn never_matches_an_identifier() {
    let t = Type::template("T", Type::int()).unwrap();

    assert!(!t.is_a(TypeIdentifier::Int));
    assert!(!t.is_a("T"));
    assert!(!t.is_identified_by([TypeIdentifier::Int, TypeIdentifier::Mixed]));
}

#[test]
fn renders_name() {
    let t = Type::template("TValue", Type::mixed()).unwrap();
    assert_eq!(t.to_string(), "TValue");
}

#[test]
fn wraps_its_bound() {
    let t = TemplateType::new("T", Type::string()).unwrap();

    assert_eq!(t.wrapped_type(), &Type::string());
    assert!(t.wrapped_type_is_satisfied_by(&|ty: &Type| ty.is_a(TypeIdentifier::String)));
    assert!(!t.is_nullable());
    assert_eq!(t.as_non_nullable().unwrap(), Type::Template(t.clone()));
}

#[test]
fn empty_name_rejected() {
    assert_eq!(
        TemplateType::new("", Type::int()).unwrap_err(),
        TypeError::EmptyTemplateName
    );
}
