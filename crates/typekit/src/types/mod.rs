//! The type tree.
//!
//! Every node is a variant of the closed [`Type`] enum. Each variant struct
//! implements [`TypeNode`], the query surface shared by all shapes, so
//! consumers can stay agnostic of the variant and match only when they need
//! shape-specific data (collection key/value, composite members, wrapped
//! type).
//!
//! Trees are immutable. Children live behind `Arc`, so cloning a type or
//! sharing a subtree between parents is cheap, and every tree is
//! `Send + Sync`.

mod builtin;
mod collection;
mod composite;
mod enums;
mod generic;
mod intersection;
mod nullable;
mod object;
mod template;
mod union;
mod wrapping;

#[cfg(test)]
mod enums_tests;
#[cfg(test)]
mod template_tests;

use std::fmt;

pub use builtin::BuiltinType;
pub use collection::CollectionType;
pub use composite::{CompositeType, Quantifier, TypeList};
pub use enums::{BackedEnumType, EnumType};
pub use generic::GenericType;
pub use intersection::IntersectionType;
pub use nullable::NullableType;
pub use object::ObjectType;
pub use template::TemplateType;
pub use union::UnionType;
pub use wrapping::WrappingType;

use crate::error::Result;
use crate::hierarchy::{ClassHierarchy, NoHierarchy};
use crate::identifier::{Identifier, TypeIdentifier};

/// Query surface shared by every type shape.
///
/// Wrapper shapes (generic, collection) implement it by forwarding each
/// method to their subject explicitly.
pub trait TypeNode: fmt::Display {
    /// Whether `null` is an accepted value.
    fn is_nullable(&self) -> bool;

    /// The same type with `null` removed.
    fn as_non_nullable(&self) -> Result<Type>;

    /// The single builtin or object type this type reduces to.
    fn base_type(&self) -> Result<Type>;

    /// Whether any of `identifiers` designates this type, consulting
    /// `hierarchy` for class relationships.
    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool;
}

/// A node of a type tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Type {
    Builtin(BuiltinType),
    Object(ObjectType),
    Enum(EnumType),
    BackedEnum(BackedEnumType),
    Template(TemplateType),
    Generic(GenericType),
    Collection(CollectionType),
    Union(UnionType),
    Intersection(IntersectionType),
    Nullable(NullableType),
}

impl Type {
    fn node(&self) -> &dyn TypeNode {
        match self {
            Self::Builtin(t) => t,
            Self::Object(t) => t,
            Self::Enum(t) => t,
            Self::BackedEnum(t) => t,
            Self::Template(t) => t,
            Self::Generic(t) => t,
            Self::Collection(t) => t,
            Self::Union(t) => t,
            Self::Intersection(t) => t,
            Self::Nullable(t) => t,
        }
    }

    /// Whether `predicate` holds for this type.
    ///
    /// Unions hold if any member does, intersections if every member does.
    /// Any other shape is handed to `predicate` as a whole.
    pub fn is_satisfied_by(&self, predicate: impl Fn(&Type) -> bool) -> bool {
        self.satisfies(&predicate)
    }

    fn satisfies(&self, predicate: &dyn Fn(&Type) -> bool) -> bool {
        match self {
            Self::Union(union) => union.at_least_one_type_is(|t| t.satisfies(predicate)),
            Self::Nullable(nullable) => {
                nullable.at_least_one_type_is(|t| t.satisfies(predicate))
            }
            Self::Intersection(intersection) => {
                intersection.every_type_is(|t| t.satisfies(predicate))
            }
            _ => predicate(self),
        }
    }

    /// Whether any of `identifiers` designates this type, matching class
    /// names exactly.
    pub fn is_identified_by<'a, I>(&self, identifiers: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Identifier<'a>>,
    {
        self.is_identified_by_with(&NoHierarchy, identifiers)
    }

    /// Like [`Type::is_identified_by`], with class relationships answered by
    /// `hierarchy`.
    pub fn is_identified_by_with<'a, I>(&self, hierarchy: &dyn ClassHierarchy, identifiers: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Identifier<'a>>,
    {
        let identifiers: Vec<Identifier<'a>> = identifiers.into_iter().map(Into::into).collect();
        self.is_identified_by_in(hierarchy, &identifiers)
    }

    /// Shorthand for an identity test against a single identifier.
    pub fn is_a<'a>(&self, identifier: impl Into<Identifier<'a>>) -> bool {
        self.is_identified_by([identifier.into()])
    }

    /// Whether this is exactly the `null` builtin.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Builtin(b) if b.identifier() == TypeIdentifier::Null)
    }

    pub fn as_builtin(&self) -> Option<&BuiltinType> {
        match self {
            Self::Builtin(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_backed_enum(&self) -> Option<&BackedEnumType> {
        match self {
            Self::BackedEnum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateType> {
        match self {
            Self::Template(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericType> {
        match self {
            Self::Generic(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionType> {
        match self {
            Self::Collection(t) => Some(t),
            _ => None,
        }
    }

    /// The union behind this type, including the one a nullable type is.
    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(t) => Some(t),
            Self::Nullable(t) => Some(t.as_union()),
            _ => None,
        }
    }

    pub fn as_intersection(&self) -> Option<&IntersectionType> {
        match self {
            Self::Intersection(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_nullable(&self) -> Option<&NullableType> {
        match self {
            Self::Nullable(t) => Some(t),
            _ => None,
        }
    }

    /// The wrapping view of nullable, collection, generic and template types.
    pub fn as_wrapping(&self) -> Option<&dyn WrappingType> {
        match self {
            Self::Nullable(t) => Some(t),
            Self::Collection(t) => Some(t),
            Self::Generic(t) => Some(t),
            Self::Template(t) => Some(t),
            _ => None,
        }
    }
}

impl TypeNode for Type {
    fn is_nullable(&self) -> bool {
        self.node().is_nullable()
    }

    fn as_non_nullable(&self) -> Result<Type> {
        self.node().as_non_nullable()
    }

    fn base_type(&self) -> Result<Type> {
        self.node().base_type()
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        self.node().is_identified_by_in(hierarchy, identifiers)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.node(), f)
    }
}

impl From<TypeIdentifier> for Type {
    fn from(identifier: TypeIdentifier) -> Self {
        Self::Builtin(BuiltinType::new(identifier))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Type {
                fn from(ty: $ty) -> Self {
                    Self::$variant(ty)
                }
            }
        )*
    };
}

impl_from_variant!(
    Builtin(BuiltinType),
    Object(ObjectType),
    Enum(EnumType),
    BackedEnum(BackedEnumType),
    Template(TemplateType),
    Generic(GenericType),
    Collection(CollectionType),
    Union(UnionType),
    Intersection(IntersectionType),
    Nullable(NullableType),
);
