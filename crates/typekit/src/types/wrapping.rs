//! Contract of types decorating exactly one wrapped type.

use super::Type;

/// A type built around a single wrapped type: nullable, collection, generic
/// and template types.
pub trait WrappingType {
    fn wrapped_type(&self) -> &Type;

    /// Test `predicate` against the wrapped type without unwrapping it
    /// by hand.
    fn wrapped_type_is_satisfied_by(&self, predicate: &dyn Fn(&Type) -> bool) -> bool {
        self.wrapped_type().is_satisfied_by(predicate)
    }
}
