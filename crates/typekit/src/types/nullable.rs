//! Nullable types: `null` united with a non-nullable type.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{CompositeType, Quantifier, Type, TypeList, TypeNode, UnionType, WrappingType};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// A union of `null` and a wrapped, non-nullable type.
///
/// If the wrapped type is itself a union, its members are spliced after
/// `null` rather than nested. [`NullableType::wrapped_type`] still returns
/// the operand exactly as given.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NullableType {
    union: UnionType,
    wrapped: Arc<Type>,
}

impl NullableType {
    /// Fails if `ty` already accepts `null`.
    pub fn new(ty: Type) -> Result<Self> {
        if ty.is_nullable() {
            debug!(ty = %ty, "refusing to wrap a nullable type");
            return Err(TypeError::AlreadyNullable { ty: ty.to_string() });
        }
        Ok(Self::wrap(ty))
    }

    /// Caller guarantees `ty` is not nullable.
    pub(crate) fn wrap(ty: Type) -> Self {
        let union = UnionType::flattened(vec![Type::from(TypeIdentifier::Null), ty.clone()]);
        Self {
            union,
            wrapped: Arc::new(ty),
        }
    }

    /// The union this nullable type is.
    #[inline]
    pub fn as_union(&self) -> &UnionType {
        &self.union
    }

    #[inline]
    pub fn types(&self) -> &[Type] {
        self.union.types()
    }
}

impl CompositeType for NullableType {
    fn type_list(&self) -> &TypeList {
        self.union.type_list()
    }

    fn quantifier(&self) -> Quantifier {
        Quantifier::AtLeastOne
    }
}

impl TypeNode for NullableType {
    fn is_nullable(&self) -> bool {
        true
    }

    fn as_non_nullable(&self) -> Result<Type> {
        self.union.as_non_nullable()
    }

    fn base_type(&self) -> Result<Type> {
        self.union.base_type()
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        self.union.is_identified_by_in(hierarchy, identifiers)
    }
}

impl WrappingType for NullableType {
    fn wrapped_type(&self) -> &Type {
        &self.wrapped
    }
}

impl fmt::Display for NullableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.union, f)
    }
}
