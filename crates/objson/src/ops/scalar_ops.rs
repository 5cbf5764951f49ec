use serde_json::Value;

use crate::Mapped;
use crate::convert::ConvertError;

// -----------------------------------------------------------------------------
// MappedScalar trait

/// Type-erased access to a scalar shape: a leaf value with a direct JSON
/// representation (boolean, number or string).
///
/// Implemented for `bool`, the primitive integers, `f32`/`f64` and `String`.
/// Scalars own both conversion directions themselves; the recursive converter
/// only adds path context to their errors.
pub trait MappedScalar: Mapped {
    /// Converts this scalar into its JSON representation.
    ///
    /// Fails with [`ConvertError::Unsupported`] when the value has no JSON
    /// representation (a non-finite float).
    fn scalar_to_value(&self) -> Result<Value, ConvertError>;

    /// Overwrites this scalar from a JSON value.
    ///
    /// Fails with [`ConvertError::MismatchedTypes`] when the JSON value's tag
    /// does not match, or a number does not fit the target type.
    fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError>;
}
