//! Shorthand constructors on [`Type`].
//!
//! ```
//! use typekit::Type;
//!
//! let ty = Type::nullable(Type::list(Type::string())?);
//! assert_eq!(ty.to_string(), "null|array<int,string>");
//! # Ok::<(), typekit::TypeError>(())
//! ```

use crate::error::Result;
use crate::identifier::TypeIdentifier;
use crate::types::{
    BackedEnumType, BuiltinType, CollectionType, EnumType, GenericType, IntersectionType,
    NullableType, ObjectType, TemplateType, Type, TypeNode, UnionType,
};

impl Type {
    pub const fn builtin(identifier: TypeIdentifier) -> Self {
        Self::Builtin(BuiltinType::new(identifier))
    }

    pub const fn int() -> Self {
        Self::builtin(TypeIdentifier::Int)
    }

    pub const fn float() -> Self {
        Self::builtin(TypeIdentifier::Float)
    }

    pub const fn string() -> Self {
        Self::builtin(TypeIdentifier::String)
    }

    pub const fn bool() -> Self {
        Self::builtin(TypeIdentifier::Bool)
    }

    pub const fn true_() -> Self {
        Self::builtin(TypeIdentifier::True)
    }

    pub const fn false_() -> Self {
        Self::builtin(TypeIdentifier::False)
    }

    pub const fn null() -> Self {
        Self::builtin(TypeIdentifier::Null)
    }

    pub const fn mixed() -> Self {
        Self::builtin(TypeIdentifier::Mixed)
    }

    pub const fn void() -> Self {
        Self::builtin(TypeIdentifier::Void)
    }

    pub const fn never() -> Self {
        Self::builtin(TypeIdentifier::Never)
    }

    pub const fn callable() -> Self {
        Self::builtin(TypeIdentifier::Callable)
    }

    pub const fn resource() -> Self {
        Self::builtin(TypeIdentifier::Resource)
    }

    /// The `object` builtin. Use [`Type::class`] for a named class.
    pub const fn object() -> Self {
        Self::builtin(TypeIdentifier::Object)
    }

    /// `int|string`, the default key of a collection.
    pub fn array_key() -> Self {
        Self::Union(UnionType::flattened(vec![Self::int(), Self::string()]))
    }

    pub fn class(class_name: impl AsRef<str>) -> Result<Self> {
        ObjectType::new(class_name).map(Self::Object)
    }

    pub fn enum_(class_name: impl AsRef<str>) -> Result<Self> {
        EnumType::new(class_name).map(Self::Enum)
    }

    pub fn backed_enum(class_name: impl AsRef<str>, backing: TypeIdentifier) -> Result<Self> {
        BackedEnumType::new(class_name, BuiltinType::new(backing)).map(Self::BackedEnum)
    }

    pub fn template(name: impl AsRef<str>, bound: Type) -> Result<Self> {
        TemplateType::new(name, bound).map(Self::Template)
    }

    pub fn generic(subject: Type, variable_types: impl IntoIterator<Item = Type>) -> Result<Self> {
        GenericType::new(subject, variable_types).map(Self::Generic)
    }

    pub fn collection(subject: Type, is_list: bool) -> Result<Self> {
        CollectionType::new(subject, is_list).map(Self::Collection)
    }

    /// An `array` collection.
    ///
    /// Without key nor value (and not a list) this is the bare `array`
    /// collection. Otherwise the subject becomes `array<K,V>`, with `K`
    /// defaulting to `int` for lists and `int|string` otherwise, and `V` to
    /// `mixed`.
    pub fn array(value: Option<Type>, key: Option<Type>, as_list: bool) -> Result<Self> {
        Self::collection_of(Self::builtin(TypeIdentifier::Array), value, key, as_list)
    }

    /// An `iterable` collection, with the same defaults as [`Type::array`].
    pub fn iterable(value: Option<Type>, key: Option<Type>, as_list: bool) -> Result<Self> {
        Self::collection_of(Self::builtin(TypeIdentifier::Iterable), value, key, as_list)
    }

    /// `array<int,V>` marked as a list.
    pub fn list(value: Type) -> Result<Self> {
        Self::array(Some(value), None, true)
    }

    /// `array<string,V>`.
    pub fn dict(value: Type) -> Result<Self> {
        Self::array(Some(value), Some(Self::string()), false)
    }

    fn collection_of(
        subject: Type,
        value: Option<Type>,
        key: Option<Type>,
        as_list: bool,
    ) -> Result<Self> {
        if value.is_none() && key.is_none() && !as_list {
            return Self::collection(subject, false);
        }

        let key = key.unwrap_or_else(|| {
            if as_list {
                Self::int()
            } else {
                Self::array_key()
            }
        });
        let value = value.unwrap_or_else(Self::mixed);

        Self::collection(Self::generic(subject, [key, value])?, as_list)
    }

    pub fn union(types: impl IntoIterator<Item = Type>) -> Result<Self> {
        UnionType::new(types).map(Self::Union)
    }

    pub fn intersection(types: impl IntoIterator<Item = Type>) -> Result<Self> {
        IntersectionType::new(types).map(Self::Intersection)
    }

    /// `null|ty`, or `ty` itself when it already accepts `null`.
    ///
    /// Unlike [`NullableType::new`], wrapping a nullable type is not an
    /// error here.
    pub fn nullable(ty: Type) -> Self {
        if ty.is_nullable() {
            return ty;
        }
        Self::Nullable(NullableType::wrap(ty))
    }
}
