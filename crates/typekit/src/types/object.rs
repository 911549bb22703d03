//! Object types: instances of a named class or interface.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Type, TypeNode};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// An instance of a class or interface.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ObjectType {
    class_name: Arc<str>,
}

impl ObjectType {
    /// Fails if `class_name` is empty.
    pub fn new(class_name: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            class_name: class_name_of(class_name.as_ref())?,
        })
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl TypeNode for ObjectType {
    fn is_nullable(&self) -> bool {
        false
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::Object(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        Ok(Type::Object(self.clone()))
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        class_is_identified_by(&self.class_name, hierarchy, identifiers)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

pub(crate) fn class_name_of(class_name: &str) -> Result<Arc<str>> {
    if class_name.is_empty() {
        debug!("rejecting empty class name");
        return Err(TypeError::EmptyClassName);
    }
    Ok(Arc::from(class_name))
}

/// Identity test for anything backed by a class name.
///
/// The `object` identifier matches every class; a name matches when it is
/// the class itself or one of its ancestors according to `hierarchy`.
pub(crate) fn class_is_identified_by(
    class_name: &str,
    hierarchy: &dyn ClassHierarchy,
    identifiers: &[Identifier<'_>],
) -> bool {
    identifiers.iter().any(|id| {
        if id.is_builtin(TypeIdentifier::Object) {
            return true;
        }
        match *id {
            Identifier::Builtin(_) => false,
            Identifier::Name(name) => {
                name == class_name || hierarchy.is_subclass_of(class_name, name)
            }
        }
    })
}
