//! Intersection types: satisfied by every member.

use std::fmt;

use tracing::debug;

use super::composite::flatten_into;
use super::{CompositeType, Quantifier, Type, TypeList, TypeNode};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::Identifier;

/// `A&B&...`
///
/// Nested intersections are spliced in at construction.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct IntersectionType {
    types: TypeList,
}

impl IntersectionType {
    /// Fails if `types` is empty.
    pub fn new(types: impl IntoIterator<Item = Type>) -> Result<Self> {
        let mut members = Vec::new();
        for ty in types {
            flatten_into(&mut members, ty, |t| {
                t.as_intersection().map(IntersectionType::types)
            });
        }
        if members.is_empty() {
            debug!("rejecting empty intersection");
            return Err(TypeError::EmptyComposite {
                composite: "intersection",
            });
        }
        Ok(Self {
            types: TypeList::new(members),
        })
    }

    #[inline]
    pub fn types(&self) -> &[Type] {
        self.types.types()
    }
}

impl CompositeType for IntersectionType {
    fn type_list(&self) -> &TypeList {
        &self.types
    }

    fn quantifier(&self) -> Quantifier {
        Quantifier::Every
    }
}

impl TypeNode for IntersectionType {
    /// Nullable only when every member is.
    fn is_nullable(&self) -> bool {
        self.every_type_is(|t| t.is_nullable())
    }

    fn as_non_nullable(&self) -> Result<Type> {
        if self.is_nullable() {
            return Err(TypeError::NotNonNullable {
                ty: self.to_string(),
            });
        }
        Ok(Type::Intersection(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        Err(TypeError::IntersectionBaseType {
            ty: self.to_string(),
        })
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        self.members_match(|t| t.is_identified_by_in(hierarchy, identifiers))
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.types.render(f, '&', |t| t.as_union().is_some())
    }
}
