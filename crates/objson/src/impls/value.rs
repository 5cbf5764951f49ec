//! The `serde_json::Value` passthrough — the "any JSON" shape.
//!
//! A `Value` field stores whatever JSON it is given and serializes back to
//! exactly that, which is also what makes `Vec<Value>` a heterogeneous list:
//! each element carries its own runtime shape.

use serde_json::Value;

use crate::Mapped;
use crate::ops::{ShapeMut, ShapeRef};

impl Mapped for Value {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Json(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Json(self)
    }
}
