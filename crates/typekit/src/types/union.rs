//! Union types: satisfied by any member.

use std::fmt;

use tracing::{debug, trace};

use super::composite::flatten_into;
use super::{CompositeType, Quantifier, Type, TypeList, TypeNode};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::Identifier;

/// `A|B|...`
///
/// Members that are themselves unions (nullable types included) are spliced
/// in at construction, so a union never directly contains another union.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UnionType {
    types: TypeList,
}

impl UnionType {
    /// Fails if `types` is empty.
    pub fn new(types: impl IntoIterator<Item = Type>) -> Result<Self> {
        let union = Self::flattened(types.into_iter().collect());
        if union.types.is_empty() {
            debug!("rejecting empty union");
            return Err(TypeError::EmptyComposite {
                composite: "union",
            });
        }
        Ok(union)
    }

    /// Build from members known to be non-empty.
    pub(crate) fn flattened(types: Vec<Type>) -> Self {
        let mut members = Vec::with_capacity(types.len());
        for ty in types {
            flatten_into(&mut members, ty, |t| t.as_union().map(UnionType::types));
        }
        Self {
            types: TypeList::new(members),
        }
    }

    #[inline]
    pub fn types(&self) -> &[Type] {
        self.types.types()
    }
}

impl CompositeType for UnionType {
    fn type_list(&self) -> &TypeList {
        &self.types
    }

    fn quantifier(&self) -> Quantifier {
        Quantifier::AtLeastOne
    }
}

impl TypeNode for UnionType {
    fn is_nullable(&self) -> bool {
        self.at_least_one_type_is(|t| t.is_nullable())
    }

    fn as_non_nullable(&self) -> Result<Type> {
        let mut members = Vec::with_capacity(self.types.len());
        for ty in self.types.iter() {
            if ty.is_null() {
                continue;
            }
            match ty.as_non_nullable()? {
                Type::Union(inner) => members.extend(inner.types().iter().cloned()),
                other => members.push(other),
            }
        }
        trace!(union = %self, remaining = members.len(), "stripped null from union");

        match members.len() {
            0 => Err(TypeError::NotNonNullable {
                ty: self.to_string(),
            }),
            1 => Ok(members.swap_remove(0)),
            _ => Ok(Type::Union(Self {
                types: TypeList::new(members),
            })),
        }
    }

    fn base_type(&self) -> Result<Type> {
        match self.as_non_nullable()? {
            Type::Union(_) => Err(TypeError::AmbiguousBaseType {
                ty: self.to_string(),
            }),
            single => single.base_type(),
        }
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        self.members_match(|t| t.is_identified_by_in(hierarchy, identifiers))
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.types
            .render(f, '|', |t| matches!(t, Type::Intersection(_)))
    }
}
