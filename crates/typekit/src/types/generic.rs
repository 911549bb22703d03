//! Generic types: a subject parameterized by variable types.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Type, TypeNode, WrappingType};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// `subject<T1,T2,...>`
///
/// The subject is `array`, `iterable` or an object type. The number of
/// variable types is not checked against the subject.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GenericType {
    subject: Arc<Type>,
    variable_types: Arc<[Type]>,
}

impl GenericType {
    pub fn new(subject: Type, variable_types: impl IntoIterator<Item = Type>) -> Result<Self> {
        let valid = match &subject {
            Type::Builtin(b) => matches!(
                b.identifier(),
                TypeIdentifier::Array | TypeIdentifier::Iterable
            ),
            Type::Object(_) => true,
            _ => false,
        };
        if !valid {
            debug!(subject = %subject, "invalid generic subject");
            return Err(TypeError::InvalidGenericSubject {
                subject: subject.to_string(),
            });
        }
        Ok(Self {
            subject: Arc::new(subject),
            variable_types: variable_types.into_iter().collect(),
        })
    }

    #[inline]
    pub fn subject(&self) -> &Type {
        &self.subject
    }

    #[inline]
    pub fn variable_types(&self) -> &[Type] {
        &self.variable_types
    }
}

// Structural queries go to the subject; the parameters only add rendering.
impl TypeNode for GenericType {
    fn is_nullable(&self) -> bool {
        self.subject.is_nullable()
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::Generic(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        self.subject.base_type()
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        self.subject.is_identified_by_in(hierarchy, identifiers)
    }
}

impl WrappingType for GenericType {
    fn wrapped_type(&self) -> &Type {
        &self.subject
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.subject)?;
        for (i, ty) in self.variable_types.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(">")
    }
}
