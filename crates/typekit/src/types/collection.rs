//! Collection types: key/value projection over an iterable subject.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Type, TypeNode, UnionType, WrappingType};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// A collection over `array`, `iterable`, an object type, or a generic type
/// built on one of those.
///
/// Key and value types are derived from the generic parameters of the
/// subject, never stored:
/// - `S<K,V>`: key `K`, value `V`;
/// - `S<V>`: key `int`, value `V`;
/// - anything else: key `int|string`, value `mixed`.
///
/// A list collection must derive an `int` key.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CollectionType {
    subject: Arc<Type>,
    is_list: bool,
}

impl CollectionType {
    /// Fails if the subject cannot be iterated, or if `is_list` is set and
    /// the derived key type is not exactly `int`.
    pub fn new(subject: Type, is_list: bool) -> Result<Self> {
        let valid = match &subject {
            Type::Builtin(b) => matches!(
                b.identifier(),
                TypeIdentifier::Array | TypeIdentifier::Iterable
            ),
            Type::Object(_) | Type::Generic(_) => true,
            _ => false,
        };
        if !valid {
            debug!(subject = %subject, "invalid collection subject");
            return Err(TypeError::InvalidCollectionSubject {
                subject: subject.to_string(),
            });
        }

        let collection = Self {
            subject: Arc::new(subject),
            is_list,
        };

        if is_list {
            let key = collection.collection_key_type();
            let is_int = matches!(&key, Type::Builtin(b) if b.identifier() == TypeIdentifier::Int);
            if !is_int {
                debug!(collection = %collection, key = %key, "list with non-int key");
                return Err(TypeError::ListKeyNotInt {
                    key: key.to_string(),
                });
            }
        }

        Ok(collection)
    }

    #[inline]
    pub fn subject(&self) -> &Type {
        &self.subject
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        self.is_list
    }

    pub fn collection_key_type(&self) -> Type {
        match self.variable_types() {
            [key, _] => key.clone(),
            [_] => Type::from(TypeIdentifier::Int),
            _ => Type::Union(UnionType::flattened(vec![
                TypeIdentifier::Int.into(),
                TypeIdentifier::String.into(),
            ])),
        }
    }

    pub fn collection_value_type(&self) -> Type {
        match self.variable_types() {
            [_, value] | [value] => value.clone(),
            _ => Type::from(TypeIdentifier::Mixed),
        }
    }

    fn variable_types(&self) -> &[Type] {
        match &*self.subject {
            Type::Generic(generic) => generic.variable_types(),
            _ => &[],
        }
    }
}

// Every query except key/value projection is the subject's.
impl TypeNode for CollectionType {
    fn is_nullable(&self) -> bool {
        self.subject.is_nullable()
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::Collection(self.clone()))
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

impl WrappingType for CollectionType {
    fn wrapped_type(&self) -> &Type {
        &self.subject
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.subject, f)
    }
}
