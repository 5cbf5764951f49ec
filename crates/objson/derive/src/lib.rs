//! `derive` macro for the `objson` mapping traits.
//!
//! See [`Mapped`].

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MAPPED_ATTRIBUTE_NAME: &str = "mapped";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod enum_kind;
mod struct_kind;

// -----------------------------------------------------------------------------
// Macros

/// # Mapping Derivation
///
/// `#[derive(Mapped)]` implements the `objson` conversion traits for a data
/// type:
///
/// - `Mapped` plus `MappedObject` for a struct with named fields,
/// - `Mapped` plus `MappedEnum` for a fieldless enum.
///
/// ## Structs
///
/// Fields take part in conversion only when marked with `#[mapped]`; an
/// unmarked field is invisible to the mapper and keeps its default value on
/// deserialization. The attribute accepts two options:
///
/// - `rename = "..."` — the name used for the field in JSON objects instead
///   of the Rust identifier.
/// - `required` — deserialization fails when the field's serialized name is
///   missing from the input object.
///
/// ```rust, ignore
/// #[derive(Mapped, Default)]
/// struct Frame {
///     #[mapped(required)]
///     id: u64,
///     #[mapped(rename = "frameUrl")]
///     url: String,
///     #[mapped]
///     children: Vec<Frame>,
///     internal: usize, // not mapped
/// }
/// ```
///
/// ## Enums
///
/// Every variant must be a unit variant and declare the external value it
/// serializes to. The declared value — not the variant name — is the
/// variant's identity on the wire.
///
/// ```rust, ignore
/// #[derive(Mapped, Default)]
/// enum Channel {
///     #[default]
///     #[mapped(value = "page")]
///     Page,
///     #[mapped(value = "worker")]
///     Worker,
/// }
/// ```
///
/// ## Restrictions
///
/// Generic types, tuple/unit structs, unions and enums with payload-carrying
/// variants are rejected with a compile error. Mapped field types must
/// themselves implement `Mapped` (and `Default`, for deserialization).
#[proc_macro_derive(Mapped, attributes(mapped))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_data::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
