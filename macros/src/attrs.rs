// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing of `#[inspect(...)]` attributes.

use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Field, Lit, Meta, Path, Token, Type};

/// How equality or hash is provided.
pub(crate) enum Method {
    /// The derive-based default: `PartialEq` or `Hash`.
    Derived,
    /// `PartialEq`, but only between identical dynamic types.
    Exact,
    Inherit,
    Abstract,
    /// A function path.
    Custom(Path),
}

/// Type-level options.
pub(crate) struct TypeAttrs {
    pub(crate) eq: Method,
    pub(crate) hash: Method,
    pub(crate) sealed_eq: bool,
    pub(crate) sealed_hash: bool,
    pub(crate) open: bool,
    pub(crate) subclass: Option<Type>,
    pub(crate) abstract_class: bool,
    pub(crate) immutable: bool,
}

impl Default for TypeAttrs {
    fn default() -> Self {
        TypeAttrs {
            eq: Method::Derived,
            hash: Method::Derived,
            sealed_eq: false,
            sealed_hash: false,
            open: false,
            subclass: None,
            abstract_class: false,
            immutable: false,
        }
    }
}

/// Field-level options.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) extends: bool,
    pub(crate) mutable: bool,
    pub(crate) nonnull: bool,
    pub(crate) synthetic: bool,
    pub(crate) skip: bool,
}

impl TypeAttrs {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = TypeAttrs::default();
        for meta in inspect_metas(attrs)? {
            let key = key_of(&meta)?;
            match (key.as_str(), &meta) {
                ("eq", Meta::NameValue(nv)) => {
                    result.eq = method(&nv.value, "partial_eq", true)?;
                }
                ("hash", Meta::NameValue(nv)) => {
                    result.hash = method(&nv.value, "hash", false)?;
                }
                ("subclass", Meta::NameValue(nv)) => {
                    result.subclass = Some(string(&nv.value)?.parse::<Type>()?);
                }
                ("sealed_eq", Meta::Path(_)) => result.sealed_eq = true,
                ("sealed_hash", Meta::Path(_)) => result.sealed_hash = true,
                ("open", Meta::Path(_)) => result.open = true,
                ("abstract_class", Meta::Path(_)) => result.abstract_class = true,
                ("immutable", Meta::Path(_)) => result.immutable = true,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &meta,
                        format!("unknown inspect option `{}`", key),
                    ))
                }
            }
        }
        Ok(result)
    }
}

impl FieldAttrs {
    pub(crate) fn from_field(field: &Field) -> syn::Result<Self> {
        let mut result = FieldAttrs::default();
        for meta in inspect_metas(&field.attrs)? {
            let key = key_of(&meta)?;
            if !matches!(meta, Meta::Path(_)) {
                return Err(syn::Error::new_spanned(
                    &meta,
                    format!("field option `{}` takes no value", key),
                ));
            }
            match key.as_str() {
                "extends" => result.extends = true,
                "mutable" => result.mutable = true,
                "nonnull" => result.nonnull = true,
                "synthetic" => result.synthetic = true,
                "skip" => result.skip = true,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &meta,
                        format!("unknown inspect field option `{}`", key),
                    ))
                }
            }
        }
        Ok(result)
    }
}

fn inspect_metas(attrs: &[Attribute]) -> syn::Result<Vec<Meta>> {
    let mut metas = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("inspect") {
            let nested =
                attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            metas.extend(nested);
        }
    }
    Ok(metas)
}

fn key_of(meta: &Meta) -> syn::Result<String> {
    meta.path()
        .get_ident()
        .map(|ident| ident.to_string())
        .ok_or_else(|| syn::Error::new_spanned(meta.path(), "expected a plain option name"))
}

fn string(value: &Expr) -> syn::Result<syn::LitStr> {
    match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) => Ok(lit_str.clone()),
        _ => Err(syn::Error::new_spanned(value, "expected a string literal")),
    }
}

fn method(value: &Expr, derived: &str, allow_exact: bool) -> syn::Result<Method> {
    let lit_str = string(value)?;
    match lit_str.value().as_str() {
        name if name == derived => Ok(Method::Derived),
        "exact" if allow_exact => Ok(Method::Exact),
        "inherit" => Ok(Method::Inherit),
        "abstract" => Ok(Method::Abstract),
        _ => Ok(Method::Custom(lit_str.parse::<Path>()?)),
    }
}
