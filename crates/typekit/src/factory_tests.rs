use crate::{Type, TypeError, TypeIdentifier, TypeNode};

#[test]
fn list_of_values() {
    let ty = Type::list(Type::string()).unwrap();
    let collection = ty.as_collection().unwrap();

    assert!(collection.is_list());
    assert_eq!(collection.collection_key_type(), Type::int());
    assert_eq!(collection.collection_value_type(), Type::string());
    assert_eq!(ty.to_string(), "array<int,string>");
}

#[test]
fn dict_of_values() {
    let ty = Type::dict(Type::float()).unwrap();
    let collection = ty.as_collection().unwrap();

    assert!(!collection.is_list());
    assert_eq!(collection.collection_key_type(), Type::string());
    assert_eq!(ty.to_string(), "array<string,float>");
}

#[test]
fn array_defaults() {
    let cases = [
        (Type::array(None, None, false), "array"),
        (Type::array(None, None, true), "array<int,mixed>"),
        (Type::array(Some(Type::bool()), None, false), "array<int|string,bool>"),
        (
            Type::array(None, Some(Type::string()), false),
            "array<string,mixed>",
        ),
        (
            Type::iterable(Some(Type::int()), None, false),
            "iterable<int|string,int>",
        ),
        (Type::iterable(None, None, false), "iterable"),
    ];

    for (ty, expected) in cases {
        assert_eq!(ty.unwrap().to_string(), expected);
    }
}

#[test]
fn bare_array_is_a_collection() {
    let ty = Type::array(None, None, false).unwrap();
    let collection = ty.as_collection().unwrap();

    assert_eq!(collection.subject(), &Type::builtin(TypeIdentifier::Array));
    assert_eq!(collection.collection_key_type(), Type::array_key());
    assert_eq!(collection.collection_value_type(), Type::mixed());
}

#[test]
fn list_with_string_key_rejected() {
    let err = Type::array(Some(Type::int()), Some(Type::string()), true).unwrap_err();
    assert!(matches!(err, TypeError::ListKeyNotInt { .. }));
}

#[test]
fn array_key_is_int_or_string() {
    let key = Type::array_key();

    assert_eq!(key.to_string(), "int|string");
    assert!(key.is_a(TypeIdentifier::Int));
    assert!(key.is_a(TypeIdentifier::String));
}

#[test]
fn builtin_shorthands() {
    let cases = [
        (Type::int(), TypeIdentifier::Int),
        (Type::float(), TypeIdentifier::Float),
        (Type::string(), TypeIdentifier::String),
        (Type::bool(), TypeIdentifier::Bool),
        (Type::true_(), TypeIdentifier::True),
        (Type::false_(), TypeIdentifier::False),
        (Type::null(), TypeIdentifier::Null),
        (Type::mixed(), TypeIdentifier::Mixed),
        (Type::void(), TypeIdentifier::Void),
        (Type::never(), TypeIdentifier::Never),
        (Type::callable(), TypeIdentifier::Callable),
        (Type::resource(), TypeIdentifier::Resource),
        (Type::object(), TypeIdentifier::Object),
    ];

    for (ty, id) in cases {
        assert_eq!(ty, Type::from(id));
        assert_eq!(ty.as_builtin().unwrap().identifier(), id);
    }
}

#[test]
fn nullable_shorthand() {
    let ty = Type::nullable(Type::string());
    assert!(ty.is_nullable());
    assert_eq!(ty.to_string(), "null|string");

    assert_eq!(Type::nullable(Type::null()), Type::null());
}

#[test]
fn class_shorthands_validate_names() {
    assert_eq!(Type::class("").unwrap_err(), TypeError::EmptyClassName);
    assert_eq!(Type::enum_("").unwrap_err(), TypeError::EmptyClassName);
    assert!(
        Type::backed_enum("Suit", TypeIdentifier::Bool)
            .unwrap_err()
            .is_invalid_argument()
    );
}

#[test]
fn generic_collection_shorthand() {
    let subject = Type::generic(Type::class("Collection").unwrap(), [Type::int()]).unwrap();
    let ty = Type::collection(subject, true).unwrap();

    assert_eq!(ty.to_string(), "Collection<int>");
    assert_eq!(ty.as_collection().unwrap().collection_value_type(), Type::int());
}
