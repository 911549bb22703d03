use crate::{
    BackedEnumType, BuiltinType, EnumType, ErrorKind, Type, TypeError, TypeIdentifier, TypeNode,
};

#[test]
fn backed_by_int_or_string() {
    let suit = BackedEnumType::new("Suit", BuiltinType::new(TypeIdentifier::String)).unwrap();
    let level = BackedEnumType::new("Level", BuiltinType::new(TypeIdentifier::Int)).unwrap();

    assert_eq!(suit.backing_type().identifier(), TypeIdentifier::String);
    assert_eq!(level.backing_type().identifier(), TypeIdentifier::Int);
    assert_eq!(suit.class_name(), "Suit");
}

#[test]
fn other_backing_types_rejected() {
    let err = BackedEnumType::new("Suit", BuiltinType::new(TypeIdentifier::Float)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    insta::assert_snapshot!(err, @r#"backed enum "Suit" must be backed by "int" or "string", "float" given"#);
}

#[test]
fn empty_name_rejected_before_backing() {
    let err = BackedEnumType::new("", BuiltinType::new(TypeIdentifier::Bool)).unwrap_err();
    assert_eq!(err, TypeError::EmptyClassName);

    assert_eq!(EnumType::new("").unwrap_err(), TypeError::EmptyClassName);
}

#[test]
fn enums_behave_as_objects() {
    let pure = Type::enum_("Status").unwrap();
    let backed = Type::backed_enum("Suit", TypeIdentifier::String).unwrap();

    for ty in [&pure, &backed] {
        assert!(!ty.is_nullable());
        assert!(ty.is_a(TypeIdentifier::Object));
        assert_eq!(ty.base_type().unwrap(), *ty);
    }
    assert!(pure.is_a("Status"));
    assert!(backed.is_a("Suit"));
    assert!(!backed.is_a(TypeIdentifier::String));
}

#[test]
fn renders_class_name() {
    let backed = Type::backed_enum("Suit", TypeIdentifier::Int).unwrap();
    assert_eq!(backed.to_string(), "Suit");
}
