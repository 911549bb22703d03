//! Enum types. Both flavors are object types identified by their class name.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::object::{class_is_identified_by, class_name_of};
use super::{BuiltinType, Type, TypeNode};
use crate::error::{Result, TypeError};
use crate::hierarchy::ClassHierarchy;
use crate::identifier::{Identifier, TypeIdentifier};

/// A pure (non-backed) enum.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct EnumType {
    class_name: Arc<str>,
}

impl EnumType {
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

impl TypeNode for EnumType {
    fn is_nullable(&self) -> bool {
        false
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::Enum(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        Ok(Type::Enum(self.clone()))
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        class_is_identified_by(&self.class_name, hierarchy, identifiers)
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

/// An enum whose cases are backed by `int` or `string` scalars.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BackedEnumType {
    class_name: Arc<str>,
    backing_type: BuiltinType,
}

impl BackedEnumType {
    /// Fails if `class_name` is empty or `backing_type` is neither `int`
    /// nor `string`.
    pub fn new(class_name: impl AsRef<str>, backing_type: BuiltinType) -> Result<Self> {
        let class_name = class_name_of(class_name.as_ref())?;
        if !matches!(
            backing_type.identifier(),
            TypeIdentifier::Int | TypeIdentifier::String
        ) {
            debug!(class = %class_name, backing = %backing_type, "invalid enum backing type");
            return Err(TypeError::InvalidBackingType {
                class: class_name.to_string(),
                backing: backing_type.to_string(),
            });
        }
        Ok(Self {
            class_name,
            backing_type,
        })
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[inline]
    pub fn backing_type(&self) -> BuiltinType {
        self.backing_type
    }
}

impl TypeNode for BackedEnumType {
    fn is_nullable(&self) -> bool {
        false
    }

    fn as_non_nullable(&self) -> Result<Type> {
        Ok(Type::BackedEnum(self.clone()))
    }

    fn base_type(&self) -> Result<Type> {
        Ok(Type::BackedEnum(self.clone()))
    }

    fn is_identified_by_in(
        &self,
        hierarchy: &dyn ClassHierarchy,
        identifiers: &[Identifier<'_>],
    ) -> bool {
        class_is_identified_by(&self.class_name, hierarchy, identifiers)
    }
}

impl fmt::Display for BackedEnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}
