//! The recursive value conversion algorithm and its failure modes.
//!
//! [`to_value`] walks a mapped value and produces a JSON tree;
//! [`value_try_apply`] walks a JSON tree and writes a mapped target in
//! place. Both dispatch purely on runtime shape, so nested objects, lists of
//! lists and mixed "any" lists all go through the same two functions.

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::value_try_apply;
pub use error::{ConvertError, FieldPath, PathSegment, ValueKind};
pub use ser::to_value;
