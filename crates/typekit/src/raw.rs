//! Serialized form of type trees.
//!
//! [`RawType`] is a 1:1, unvalidated mirror of [`Type`] tagged by `kind`.
//! Deserialized trees go through the regular constructors when converted,
//! so a JSON document cannot smuggle in a type violating an invariant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TypeError};
use crate::identifier::TypeIdentifier;
use crate::types::{
    BackedEnumType, BuiltinType, CollectionType, CompositeType, EnumType, GenericType,
    IntersectionType, NullableType, ObjectType, TemplateType, Type, UnionType, WrappingType,
};

/// Raw type node as found in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawType {
    Builtin {
        identifier: TypeIdentifier,
    },
    Object {
        class: String,
    },
    Enum {
        class: String,
    },
    BackedEnum {
        class: String,
        backing: TypeIdentifier,
    },
    Template {
        name: String,
        bound: Box<RawType>,
    },
    Generic {
        subject: Box<RawType>,
        #[serde(default)]
        variable_types: Vec<RawType>,
    },
    Collection {
        subject: Box<RawType>,
        #[serde(default)]
        is_list: bool,
    },
    Union {
        types: Vec<RawType>,
    },
    Intersection {
        types: Vec<RawType>,
    },
    Nullable {
        wrapped: Box<RawType>,
    },
}

impl TryFrom<RawType> for Type {
    type Error = TypeError;

    fn try_from(raw: RawType) -> Result<Self> {
        Ok(match raw {
            RawType::Builtin { identifier } => Type::builtin(identifier),
            RawType::Object { class } => Type::Object(ObjectType::new(class)?),
            RawType::Enum { class } => Type::Enum(EnumType::new(class)?),
            RawType::BackedEnum { class, backing } => {
                Type::BackedEnum(BackedEnumType::new(class, BuiltinType::new(backing))?)
            }
            RawType::Template { name, bound } => {
                Type::Template(TemplateType::new(name, Type::try_from(*bound)?)?)
            }
            RawType::Generic {
                subject,
                variable_types,
            } => Type::Generic(GenericType::new(
                Type::try_from(*subject)?,
                convert_all(variable_types)?,
            )?),
            RawType::Collection { subject, is_list } => {
                Type::Collection(CollectionType::new(Type::try_from(*subject)?, is_list)?)
            }
            RawType::Union { types } => Type::Union(UnionType::new(convert_all(types)?)?),
            RawType::Intersection { types } => {
                Type::Intersection(IntersectionType::new(convert_all(types)?)?)
            }
            RawType::Nullable { wrapped } => {
                Type::Nullable(NullableType::new(Type::try_from(*wrapped)?)?)
            }
        })
    }
}

fn convert_all(raw: Vec<RawType>) -> Result<Vec<Type>> {
    raw.into_iter().map(Type::try_from).collect()
}

impl From<&Type> for RawType {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Builtin(t) => Self::Builtin {
                identifier: t.identifier(),
            },
            Type::Object(t) => Self::Object {
                class: t.class_name().to_owned(),
            },
            Type::Enum(t) => Self::Enum {
                class: t.class_name().to_owned(),
            },
            Type::BackedEnum(t) => Self::BackedEnum {
                class: t.class_name().to_owned(),
                backing: t.backing_type().identifier(),
            },
            Type::Template(t) => Self::Template {
                name: t.name().to_owned(),
                bound: Box::new(t.bound().into()),
            },
            Type::Generic(t) => Self::Generic {
                subject: Box::new(t.subject().into()),
                variable_types: t.variable_types().iter().map(Into::into).collect(),
            },
            Type::Collection(t) => Self::Collection {
                subject: Box::new(t.subject().into()),
                is_list: t.is_list(),
            },
            Type::Union(t) => Self::Union {
                types: t.types().iter().map(Into::into).collect(),
            },
            Type::Intersection(t) => Self::Intersection {
                types: t.type_list().iter().map(Into::into).collect(),
            },
            Type::Nullable(t) => Self::Nullable {
                wrapped: Box::new(t.wrapped_type().into()),
            },
        }
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawType::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawType::deserialize(deserializer)?;
        Type::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Type {
    /// Parse a JSON-encoded type tree, validating every node.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawType =
            serde_json::from_str(json).map_err(|e| TypeError::Json(e.to_string()))?;
        Type::try_from(raw)
    }

    /// Encode this tree as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&RawType::from(self)).map_err(|e| TypeError::Json(e.to_string()))
    }
}
