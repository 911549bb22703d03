//! Template placeholders, e.g. `T` in `Collection<T>`.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Type, TypeNode, WrappingType};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::Identifier;

/// A named slot bound to another type.
///
/// A template is not a concrete type: it never matches an identifier. Its
/// base type is the one of its bound.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TemplateType {
    name: Arc<str>,
    bound: Arc<Type>,
}

impl TemplateType {
    pub fn new(name: impl AsRef<str>, bound: Type) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            debug!(bound = %bound, "rejecting unnamed template");
            return Err(TypeError::EmptyTemplateName);
        }
        Ok(Self {
            name: Arc::from(name),
            bound: Arc::new(bound),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn bound(&self) -> &Type {
        &self.bound
    }
}

impl TypeNode for TemplateType {
    fn is_nullable(&self) -> bool {
        false
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::Template(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        self.bound.base_type()
    }

    fn is_identified_by_in(
        &self,
        _hierarchy: &dyn ClassHierarchy,
        _identifiers: &[Identifier<'_>],
    ) -> bool {
        false
    }
}

impl WrappingType for TemplateType {
    fn wrapped_type(&self) -> &Type {
        &self.bound
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
