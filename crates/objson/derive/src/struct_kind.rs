//! Codegen for structs with named fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, FieldsNamed, Ident, Result};

use crate::derive_data::field_attrs;

/// Implements `Mapped` + `MappedObject` for a named-field struct.
pub(crate) fn expand_struct(input: &DeriveInput, fields: &FieldsNamed) -> Result<TokenStream> {
    let ident = &input.ident;

    let mut field_idents: Vec<Ident> = Vec::new();
    let mut field_infos: Vec<TokenStream> = Vec::new();

    for field in &fields.named {
        let Some(attrs) = field_attrs(field)? else {
            // Unmarked fields are invisible to the mapper.
            continue;
        };

        let field_ident = field
            .ident
            .as_ref()
            .expect("named field has an identifier")
            .clone();
        let ident_str = field_ident.to_string();

        let mut info = quote!(::objson::info::FieldInfo::new(#ident_str));
        if let Some(rename) = &attrs.rename {
            info = quote!(#info.with_rename(#rename));
        }
        if attrs.required {
            info = quote!(#info.with_required());
        }

        field_idents.push(field_ident);
        field_infos.push(info);
    }

    let field_count = field_idents.len();
    let indices: Vec<usize> = (0..field_count).collect();

    Ok(quote! {
        impl ::objson::Mapped for #ident {
            #[inline]
            fn shape_ref(&self) -> ::objson::ShapeRef<'_> {
                ::objson::ShapeRef::Object(self)
            }

            #[inline]
            fn shape_mut(&mut self) -> ::objson::ShapeMut<'_> {
                ::objson::ShapeMut::Object(self)
            }
        }

        impl ::objson::ops::MappedObject for #ident {
            fn object_info(&self) -> &'static ::objson::info::ObjectInfo {
                static INFO: ::objson::__macro_exports::OnceLock<::objson::info::ObjectInfo> =
                    ::objson::__macro_exports::OnceLock::new();
                INFO.get_or_init(|| {
                    ::objson::info::ObjectInfo::new::<#ident>(&[#(#field_infos),*])
                })
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn ::objson::Mapped> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::objson::Mapped> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    })
}
