//! Input classification and `#[mapped(...)]` attribute parsing.

use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Error, Field, Fields, LitStr, Meta, Result, Variant};

use crate::{MAPPED_ATTRIBUTE_NAME, enum_kind, struct_kind};

/// Expands the derive input into the matching trait implementations.
pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    if let Some(param) = input.generics.params.iter().next() {
        return Err(Error::new_spanned(
            param,
            "`#[derive(Mapped)]` does not support generic types",
        ));
    }

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => struct_kind::expand_struct(input, fields),
            _ => Err(Error::new_spanned(
                &input.ident,
                "`#[derive(Mapped)]` requires a struct with named fields",
            )),
        },
        Data::Enum(data) => enum_kind::expand_enum(input, data),
        Data::Union(data) => Err(Error::new_spanned(
            &data.union_token,
            "`#[derive(Mapped)]` does not support unions",
        )),
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Parsed options of one `#[mapped]` field.
pub(crate) struct FieldAttrs {
    pub required: bool,
    pub rename: Option<String>,
}

/// Parses the `#[mapped]` attributes of a struct field.
///
/// Returns `None` for unmarked fields, which do not take part in mapping.
pub(crate) fn field_attrs(field: &Field) -> Result<Option<FieldAttrs>> {
    let mut marked = false;
    let mut attrs = FieldAttrs {
        required: false,
        rename: None,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident(MAPPED_ATTRIBUTE_NAME) {
            continue;
        }
        marked = true;

        // A bare `#[mapped]` carries no options.
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                attrs.required = true;
                return Ok(());
            }
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                attrs.rename = Some(name.value());
                return Ok(());
            }
            Err(meta.error("expected `required` or `rename = \"...\"`"))
        })?;
    }

    Ok(marked.then_some(attrs))
}

// -----------------------------------------------------------------------------
// Variant attributes

/// Parses the `#[mapped(value = "...")]` attribute of an enum variant.
pub(crate) fn variant_value(variant: &Variant) -> Result<Option<String>> {
    let mut value = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident(MAPPED_ATTRIBUTE_NAME) {
            continue;
        }
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                let external: LitStr = meta.value()?.parse()?;
                value = Some(external.value());
                return Ok(());
            }
            Err(meta.error("expected `value = \"...\"`"))
        })?;
    }

    Ok(value)
}
