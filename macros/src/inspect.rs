// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of `#[derive(Inspect)]`.
//!
//! For a struct the macro registers one field descriptor per field (the
//! `extends` field becomes the superclass link), a field-wise constructor that
//! bypasses any hand-written `new`, and the equality and hash slots. For a
//! fieldless enum it registers the variants.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Index, Member};

use crate::attrs::{FieldAttrs, Method, TypeAttrs};

/// Main entry point for the `#[derive(Inspect)]` macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let body = match &input.data {
        Data::Struct(data) => describe_struct(&data.fields)?,
        Data::Enum(data) => {
            let mut variants = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "Inspect can only be derived for enums without fields",
                    ));
                }
                let ident = &variant.ident;
                variants.push(quote!(Self::#ident));
            }
            quote! {
                class.variants(|| ::std::vec![#(#variants),*]);
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Inspect does not support unions",
            ))
        }
    };
    let methods = describe_methods(&attrs);

    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(::eqverify::Inspect));
    }
    let where_clause = input.generics.make_where_clause();
    if matches!(attrs.eq, Method::Derived | Method::Exact) {
        where_clause
            .predicates
            .push(parse_quote!(Self: ::core::cmp::PartialEq));
    }
    if matches!(attrs.hash, Method::Derived) {
        where_clause
            .predicates
            .push(parse_quote!(Self: ::core::hash::Hash));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::eqverify::Inspect for #name #ty_generics #where_clause {
            fn describe(class: &mut ::eqverify::ClassBuilder<Self>) {
                #body
                #methods
            }
        }
    })
}

fn describe_struct(fields: &Fields) -> syn::Result<TokenStream2> {
    let mut registrations = Vec::new();
    let mut initializers = Vec::new();
    let mut extends_seen = false;

    for (position, field) in fields.iter().enumerate() {
        let field_attrs = FieldAttrs::from_field(field)?;
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };
        let label = match &field.ident {
            Some(ident) => ident.to_string(),
            None => position.to_string(),
        };
        let ty = &field.ty;

        if field_attrs.skip {
            initializers.push(quote!(#member: ::core::default::Default::default()));
            continue;
        }
        initializers.push(quote!(#member: args.take()?));

        if field_attrs.extends {
            if extends_seen {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked `extends`",
                ));
            }
            extends_seen = true;
            registrations.push(quote! {
                class.extends::<#ty>(|this| &this.#member, |this| &mut this.#member);
            });
            continue;
        }

        let mut options = Vec::new();
        if field_attrs.mutable {
            options.push(format_ident!("mutable"));
        }
        if field_attrs.nonnull {
            options.push(format_ident!("nonnull"));
        }
        if field_attrs.synthetic {
            options.push(format_ident!("synthetic"));
        }
        registrations.push(quote! {
            class
                .field::<#ty>(#label, |this| &this.#member, |this| &mut this.#member)
                #(.#options())*;
        });
    }

    Ok(quote! {
        #(#registrations)*
        class.raw_constructor(|args| {
            ::core::result::Result::Ok(Self { #(#initializers),* })
        });
    })
}

fn describe_methods(attrs: &TypeAttrs) -> TokenStream2 {
    let mut calls = Vec::new();
    match &attrs.eq {
        Method::Derived => calls.push(quote!(class.equals_by_partial_eq();)),
        Method::Exact => calls.push(quote!(class.equals_by_exact_type();)),
        Method::Inherit => {}
        Method::Abstract => calls.push(quote!(class.abstract_equals();)),
        Method::Custom(path) => calls.push(quote!(class.equals_with(#path);)),
    }
    match &attrs.hash {
        Method::Derived => calls.push(quote!(class.hash_by_hash();)),
        Method::Inherit | Method::Exact => {}
        Method::Abstract => calls.push(quote!(class.abstract_hash();)),
        Method::Custom(path) => calls.push(quote!(class.hash_with(#path);)),
    }
    if attrs.sealed_eq {
        calls.push(quote!(class.seal_equals();));
    }
    if attrs.sealed_hash {
        calls.push(quote!(class.seal_hash();));
    }
    if attrs.open {
        calls.push(quote!(class.open();));
    }
    if let Some(subclass) = &attrs.subclass {
        calls.push(quote!(class.trivial_subclass::<#subclass>();));
    }
    if attrs.abstract_class {
        calls.push(quote!(class.abstract_class();));
    }
    if attrs.immutable {
        calls.push(quote!(class.immutable();));
    }
    quote!(#(#calls)*)
}
