//! Primitive type identifiers and the identifiers used for identity tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Closed set of primitive type categories.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeIdentifier {
    Array,
    Bool,
    Callable,
    False,
    Float,
    Int,
    Iterable,
    Mixed,
    Never,
    Null,
    Object,
    Resource,
    String,
    True,
    Void,
}

impl TypeIdentifier {
    /// Every identifier, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Array,
        Self::Bool,
        Self::Callable,
        Self::False,
        Self::Float,
        Self::Int,
        Self::Iterable,
        Self::Mixed,
        Self::Never,
        Self::Null,
        Self::Object,
        Self::Resource,
        Self::String,
        Self::True,
        Self::Void,
    ];

    /// Name as written in a type expression.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Callable => "callable",
            Self::False => "false",
            Self::Float => "float",
            Self::Int => "int",
            Self::Iterable => "iterable",
            Self::Mixed => "mixed",
            Self::Never => "never",
            Self::Null => "null",
            Self::Object => "object",
            Self::Resource => "resource",
            Self::String => "string",
            Self::True => "true",
            Self::Void => "void",
        }
    }

    /// Try to convert a name to an identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    /// Types that cannot take part in a union or intersection.
    pub fn is_standalone(self) -> bool {
        matches!(self, Self::Mixed | Self::Never | Self::Void)
    }

    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::String | Self::Bool | Self::True | Self::False
        )
    }

    pub fn is_bool(self) -> bool {
        matches!(self, Self::Bool | Self::True | Self::False)
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeIdentifier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TypeError::UnknownIdentifier(s.to_owned()))
    }
}

/// What an identity test compares against: a builtin identifier or a
/// class/interface name.
///
/// A name that spells a builtin identifier (e.g. `"int"`) matches the
/// corresponding builtin type as well.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Identifier<'a> {
    Builtin(TypeIdentifier),
    Name(&'a str),
}

impl Identifier<'_> {
    /// Whether this identifier designates the given builtin.
    pub fn is_builtin(&self, id: TypeIdentifier) -> bool {
        match *self {
            Self::Builtin(own) => own == id,
            Self::Name(name) => name == id.as_str(),
        }
    }
}

impl From<TypeIdentifier> for Identifier<'_> {
    fn from(id: TypeIdentifier) -> Self {
        Self::Builtin(id)
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}
