use core::fmt;

use serde_json::Value;

use crate::ops::{MappedEnum, MappedList, MappedObject, MappedOption, MappedScalar};

// -----------------------------------------------------------------------------
// ShapeKind

/// An enumeration of the "shapes" a mapped value can take.
///
/// Each shape corresponds to one access trait (such as [`MappedObject`] or
/// [`MappedList`]) and to one arm of the conversion algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Scalar,
    Enum,
    Object,
    List,
    Optional,
    Json,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Enum => f.pad("Enum"),
            Self::Object => f.pad("Object"),
            Self::List => f.pad("List"),
            Self::Optional => f.pad("Optional"),
            Self::Json => f.pad("Json"),
        }
    }
}

// -----------------------------------------------------------------------------
// ShapeRef

/// An immutable view of a [`Mapped`](crate::Mapped) value, classified by
/// shape.
///
/// Returned by [`Mapped::shape_ref`](crate::Mapped::shape_ref); the
/// serialization half of the converter dispatches on this.
pub enum ShapeRef<'a> {
    Scalar(&'a dyn MappedScalar),
    Enum(&'a dyn MappedEnum),
    Object(&'a dyn MappedObject),
    List(&'a dyn MappedList),
    Optional(&'a dyn MappedOption),
    /// A raw JSON value carried through unchanged (the "any" shape).
    Json(&'a Value),
}

impl ShapeRef<'_> {
    /// Returns the [`ShapeKind`] of this view.
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Scalar(_) => ShapeKind::Scalar,
            Self::Enum(_) => ShapeKind::Enum,
            Self::Object(_) => ShapeKind::Object,
            Self::List(_) => ShapeKind::List,
            Self::Optional(_) => ShapeKind::Optional,
            Self::Json(_) => ShapeKind::Json,
        }
    }
}

// -----------------------------------------------------------------------------
// ShapeMut

/// A mutable view of a [`Mapped`](crate::Mapped) value, classified by shape.
///
/// Returned by [`Mapped::shape_mut`](crate::Mapped::shape_mut); the
/// deserialization half of the converter dispatches on this and writes the
/// target in place.
pub enum ShapeMut<'a> {
    Scalar(&'a mut dyn MappedScalar),
    Enum(&'a mut dyn MappedEnum),
    Object(&'a mut dyn MappedObject),
    List(&'a mut dyn MappedList),
    Optional(&'a mut dyn MappedOption),
    /// A raw JSON value carried through unchanged (the "any" shape).
    Json(&'a mut Value),
}

impl ShapeMut<'_> {
    /// Returns the [`ShapeKind`] of this view.
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Scalar(_) => ShapeKind::Scalar,
            Self::Enum(_) => ShapeKind::Enum,
            Self::Object(_) => ShapeKind::Object,
            Self::List(_) => ShapeKind::List,
            Self::Optional(_) => ShapeKind::Optional,
            Self::Json(_) => ShapeKind::Json,
        }
    }
}
