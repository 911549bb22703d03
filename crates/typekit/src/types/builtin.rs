//! Builtin (primitive) types.

use std::fmt;

use tracing::debug;

use super::{Type, TypeNode, UnionType};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// Members of `mixed` once `null` is removed.
const MIXED_NON_NULLABLE: [TypeIdentifier; 7] = [
    TypeIdentifier::Object,
    TypeIdentifier::Resource,
    TypeIdentifier::Array,
    TypeIdentifier::String,
    TypeIdentifier::Float,
    TypeIdentifier::Int,
    TypeIdentifier::Bool,
];

/// A primitive type, e.g. `int` or `null`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BuiltinType {
    identifier: TypeIdentifier,
}

impl BuiltinType {
    pub const fn new(identifier: TypeIdentifier) -> Self {
        Self { identifier }
    }

    #[inline]
    pub const fn identifier(self) -> TypeIdentifier {
        self.identifier
    }
}

impl TypeNode for BuiltinType {
    fn is_nullable(&self) -> bool {
        matches!(self.identifier, TypeIdentifier::Null | TypeIdentifier::Mixed)
    }

    fn as_non_nullable(&self) -> Result<Type> {
        match self.identifier {
            TypeIdentifier::Null => {
                debug!("refusing to strip null from \"null\"");
                Err(TypeError::NotNonNullable {
                    ty: self.to_string(),
                })
            }
            TypeIdentifier::Mixed => Ok(Type::Union(UnionType::flattened(
                MIXED_NON_NULLABLE.into_iter().map(Type::from).collect(),
            ))),
            _ => Ok(Type::Builtin(*self)),
        }
    }

    fn base_type(&self) -> Result<Type> {
        Ok(Type::Builtin(*self))
    }

    fn is_identified_by_in(
        &self,
        _hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        identifiers.iter().any(|id| id.is_builtin(self.identifier))
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier.as_str())
    }
}

impl From<TypeIdentifier> for BuiltinType {
    fn from(identifier: TypeIdentifier) -> Self {
        Self::new(identifier)
    }
}
