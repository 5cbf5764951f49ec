//! Codegen for fieldless enums.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Error, Fields, Ident, Result};

use crate::derive_data::variant_value;

/// Implements `Mapped` + `MappedEnum` for a fieldless enum.
pub(crate) fn expand_enum(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let ident = &input.ident;

    if data.variants.is_empty() {
        return Err(Error::new_spanned(
            ident,
            "`#[derive(Mapped)]` requires at least one enum variant",
        ));
    }

    let mut variant_idents: Vec<Ident> = Vec::new();
    let mut variant_infos: Vec<TokenStream> = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "`#[derive(Mapped)]` enum variants may not carry data",
            ));
        }
        let Some(value) = variant_value(variant)? else {
            return Err(Error::new_spanned(
                variant,
                "enum variants need a `#[mapped(value = \"...\")]` attribute",
            ));
        };

        let name = variant.ident.to_string();
        variant_infos.push(quote!(::objson::info::VariantInfo::new(#name, #value)));
        variant_idents.push(variant.ident.clone());
    }

    let indices: Vec<usize> = (0..variant_idents.len()).collect();

    Ok(quote! {
        impl ::objson::Mapped for #ident {
            #[inline]
            fn shape_ref(&self) -> ::objson::ShapeRef<'_> {
                ::objson::ShapeRef::Enum(self)
            }

            #[inline]
            fn shape_mut(&mut self) -> ::objson::ShapeMut<'_> {
                ::objson::ShapeMut::Enum(self)
            }
        }

        impl ::objson::ops::MappedEnum for #ident {
            fn enum_info(&self) -> &'static ::objson::info::EnumInfo {
                static INFO: ::objson::__macro_exports::OnceLock<::objson::info::EnumInfo> =
                    ::objson::__macro_exports::OnceLock::new();
                INFO.get_or_init(|| {
                    ::objson::info::EnumInfo::new::<#ident>(&[#(#variant_infos),*])
                })
            }

            fn variant_index(&self) -> usize {
                match self {
                    #(Self::#variant_idents => #indices,)*
                }
            }

            fn set_variant(&mut self, index: usize) {
                match index {
                    #(#indices => *self = Self::#variant_idents,)*
                    _ => {}
                }
            }
        }
    })
}
