//! Static shape metadata, built once per type and cached for the process
//! lifetime.

// -----------------------------------------------------------------------------
// Modules

mod enum_info;
mod object_info;

// -----------------------------------------------------------------------------
// Exports

pub use enum_info::{EnumInfo, VariantInfo};
pub use object_info::{FieldInfo, ObjectInfo};
