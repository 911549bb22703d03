//! Member storage and quantifiers shared by unions and intersections.

use std::fmt;
use std::sync::Arc;

use super::Type;

/// How a composite combines the answers of its members.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quantifier {
    /// Union semantics: any member.
    AtLeastOne,
    /// Intersection semantics: every member.
    Every,
}

/// Immutable, ordered list of member types.
///
/// Order carries no meaning beyond deterministic rendering.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeList {
    types: Arc<[Type]>,
}

impl TypeList {
    pub(crate) fn new(types: Vec<Type>) -> Self {
        Self {
            types: types.into(),
        }
    }

    #[inline]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Type> {
        self.types.iter()
    }

    /// Stops at the first member satisfying `predicate`.
    pub fn at_least_one_type_is(&self, predicate: impl Fn(&Type) -> bool) -> bool {
        self.types.iter().any(predicate)
    }

    /// Stops at the first member not satisfying `predicate`.
    pub fn every_type_is(&self, predicate: impl Fn(&Type) -> bool) -> bool {
        self.types.iter().all(predicate)
    }

    /// Members satisfying `predicate`, in order.
    pub fn filter(&self, predicate: impl Fn(&Type) -> bool) -> Vec<Type> {
        self.types
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    pub fn quantify(&self, quantifier: Quantifier, predicate: impl Fn(&Type) -> bool) -> bool {
        match quantifier {
            Quantifier::AtLeastOne => self.at_least_one_type_is(predicate),
            Quantifier::Every => self.every_type_is(predicate),
        }
    }

    /// Write members joined by `separator`, parenthesizing those for which
    /// `needs_parens` holds.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        separator: char,
        needs_parens: impl Fn(&Type) -> bool,
    ) -> fmt::Result {
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                write!(f, "{separator}")?;
            }
            if needs_parens(ty) {
                write!(f, "({ty})")?;
            } else {
                write!(f, "{ty}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TypeList {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

/// Behavior shared by the composite shapes.
///
/// Implementors only expose their embedded [`TypeList`] and quantifier; the
/// helpers come for free.
pub trait CompositeType {
    fn type_list(&self) -> &TypeList;

    fn quantifier(&self) -> Quantifier;

    fn types(&self) -> &[Type] {
        self.type_list().types()
    }

    fn at_least_one_type_is(&self, predicate: impl Fn(&Type) -> bool) -> bool
    where
        Self: Sized,
    {
        self.type_list().at_least_one_type_is(predicate)
    }

    fn every_type_is(&self, predicate: impl Fn(&Type) -> bool) -> bool
    where
        Self: Sized,
    {
        self.type_list().every_type_is(predicate)
    }

    fn filter(&self, predicate: impl Fn(&Type) -> bool) -> Vec<Type>
    where
        Self: Sized,
    {
        self.type_list().filter(predicate)
    }

    /// Combine per-member answers with this composite's quantifier.
    fn members_match(&self, predicate: impl Fn(&Type) -> bool) -> bool
    where
        Self: Sized,
    {
        self.type_list().quantify(self.quantifier(), predicate)
    }
}

/// Push `ty` onto `members`, splicing its own members instead when
/// `splice` returns them.
pub(crate) fn flatten_into(
    members: &mut Vec<Type>,
    ty: Type,
    splice: impl Fn(&Type) -> Option<&[Type]>,
) {
    if let Some(inner) = splice(&ty) {
        members.extend(inner.iter().cloned());
        return;
    }
    members.push(ty);
}
