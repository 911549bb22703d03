use indoc::indoc;

use crate::{RawType, Type, TypeError, TypeIdentifier};

#[test]
fn builtin_to_json() {
    insta::assert_snapshot!(Type::int().to_json().unwrap(), @r#"{"kind":"builtin","identifier":"int"}"#);
}

#[test]
fn backed_enum_to_json() {
    let ty = Type::backed_enum("Suit", TypeIdentifier::String).unwrap();
    insta::assert_snapshot!(ty.to_json().unwrap(), @r#"{"kind":"backed_enum","class":"Suit","backing":"string"}"#);
}

#[test]
fn nullable_list_to_pretty_json() {
    let ty = Type::nullable(Type::list(Type::string()).unwrap());

    let json = serde_json::to_string_pretty(&ty).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "kind": "nullable",
      "wrapped": {
        "kind": "collection",
        "subject": {
          "kind": "generic",
          "subject": {
            "kind": "builtin",
            "identifier": "array"
          },
          "variable_types": [
            {
              "kind": "builtin",
              "identifier": "int"
            },
            {
              "kind": "builtin",
              "identifier": "string"
            }
          ]
        },
        "is_list": true
      }
    }
    "#);
}

#[test]
fn nullable_serializes_its_operand() {
    let operand = Type::union([Type::int(), Type::string()]).unwrap();
    let raw = RawType::from(&Type::nullable(operand.clone()));

    assert_eq!(
        raw,
        RawType::Nullable {
            wrapped: Box::new(RawType::from(&operand))
        }
    );
}

#[test]
fn from_json_builds_tree() {
    let json = indoc! {r#"
        {
          "kind": "union",
          "types": [
            { "kind": "object", "class": "Foo" },
            {
              "kind": "intersection",
              "types": [
                { "kind": "object", "class": "A" },
                { "kind": "object", "class": "B" }
              ]
            }
          ]
        }
    "#};

    let ty = Type::from_json(json).unwrap();

    assert_eq!(ty.to_string(), "Foo|(A&B)");
}

#[test]
fn optional_fields_default() {
    let json = indoc! {r#"
        {
          "kind": "collection",
          "subject": { "kind": "generic", "subject": { "kind": "builtin", "identifier": "iterable" } }
        }
    "#};

    let ty = Type::from_json(json).unwrap();
    let collection = ty.as_collection().unwrap();

    assert!(!collection.is_list());
    assert_eq!(ty.to_string(), "iterable<>");
}

#[test]
fn from_json_validates_nodes() {
    let json = indoc! {r#"
        {
          "kind": "collection",
          "is_list": true,
          "subject": {
            "kind": "generic",
            "subject": { "kind": "builtin", "identifier": "array" },
            "variable_types": [
              { "kind": "builtin", "identifier": "string" },
              { "kind": "builtin", "identifier": "int" }
            ]
          }
        }
    "#};

    let err = Type::from_json(json).unwrap_err();

    assert_eq!(
        err,
        TypeError::ListKeyNotInt {
            key: "string".to_string()
        }
    );
}

#[test]
fn from_json_rejects_double_nullable() {
    let json = r#"{"kind":"nullable","wrapped":{"kind":"builtin","identifier":"mixed"}}"#;

    let err = Type::from_json(json).unwrap_err();

    assert!(matches!(err, TypeError::AlreadyNullable { .. }));
}

#[test]
fn malformed_json_rejected() {
    for json in [
        "{",
        r#"{"kind":"tuple","types":[]}"#,
        r#"{"kind":"builtin","identifier":"integer"}"#,
    ] {
        let err = Type::from_json(json).unwrap_err();
        assert!(matches!(err, TypeError::Json(_)), "{json}: {err}");
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn serde_reports_constructor_errors() {
    let json = r#"{"kind":"object","class":""}"#;

    let err = serde_json::from_str::<Type>(json).unwrap_err();

    insta::assert_snapshot!(err, @"class name cannot be empty");
}

#[test]
fn trees_survive_json() {
    let cases = [
        Type::nullable(Type::class("Foo").unwrap()),
        Type::template("T", Type::dict(Type::mixed()).unwrap()).unwrap(),
        Type::intersection([
            Type::class("Countable").unwrap(),
            Type::union([Type::enum_("Suit").unwrap(), Type::false_()]).unwrap(),
        ])
        .unwrap(),
    ];

    for ty in cases {
        let json = ty.to_json().unwrap();
        assert_eq!(Type::from_json(&json).unwrap(), ty);
    }
}
