#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::objson::...` paths; this alias makes the generated
// code valid inside this crate's own tests and doc examples as well.
extern crate self as objson;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod mapped;
mod mapper;

pub mod cache;
pub mod convert;
pub mod hash;
pub mod info;
pub mod ops;

#[doc(hidden)]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use convert::{ConvertError, FieldPath, PathSegment, ValueKind};
pub use mapped::Mapped;
pub use mapper::ObjectMapper;
pub use ops::{ShapeKind, ShapeMut, ShapeRef};

pub use objson_derive as derive;
