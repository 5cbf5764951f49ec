//! Per-shape access traits and the shape dispatch views.

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod list_ops;
mod object_ops;
mod option_ops;
mod scalar_ops;
mod shape_ref;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::MappedEnum;
pub use list_ops::{ListIter, MappedList};
pub use object_ops::{MappedObject, ObjectFieldIter};
pub use option_ops::MappedOption;
pub use scalar_ops::MappedScalar;
pub use shape_ref::{ShapeKind, ShapeMut, ShapeRef};
