#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime representation of static type expressions.
//!
//! A [`Type`] is an immutable tree describing something like
//! `null|array<int,Foo&Bar>`:
//! - **Leaves**: builtin types (`int`, `null`, ...), object and enum types
//! - **Wrappers**: nullable, collection, generic and template types
//! - **Composites**: unions and intersections
//!
//! Every shape answers the same queries (see [`TypeNode`]): nullability,
//! stripping `null`, base-type extraction, identity tests and
//! precedence-correct rendering through `Display`.
//!
//! Building types from source text is left to the caller; this crate only
//! validates and composes already-identified pieces.

pub mod error;
mod factory;
pub mod hierarchy;
pub mod identifier;
pub mod raw;
pub mod types;

#[cfg(test)]
mod factory_tests;
#[cfg(test)]
mod hierarchy_tests;
#[cfg(test)]
mod raw_tests;

pub use error::{ErrorKind, Result, TypeError};
pub use hierarchy::{ClassHierarchy, NoHierarchy, StaticHierarchy};
pub use identifier::{Identifier, TypeIdentifier};
pub use raw::RawType;
pub use types::{
    BackedEnumType, BuiltinType, CollectionType, CompositeType, EnumType, GenericType,
    IntersectionType, NullableType, ObjectType, Quantifier, TemplateType, Type, TypeList,
    TypeNode, UnionType, WrappingType,
};
