/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *  
 */
use proc_macro_error::abort;
use quote::ToTokens;
use syn::{self, parse_quote, spanned::Spanned};

#[derive(Debug)]
pub struct FieldInformation {
    pub field: syn::Field,
    pub name: String,
    pub extra: Vec<FieldExtra>,
}

impl FieldInformation {
    pub fn new(field: syn::Field, name: String, extra: Vec<FieldExtra>) -> Self {
        FieldInformation { field, name, extra }
    }

    pub fn is_skipped(&self) -> bool {
        self.extra.iter().any(|ext| matches!(ext, FieldExtra::Skip))
    }

    pub fn is_nested(&self) -> bool {
        self.extra.iter().any(|ext| matches!(ext, FieldExtra::Nested))
    }

    /// The property name, `#[property(name = "..")]` wins over the field ident.
    pub fn property_name(&self) -> String {
        self.extra
            .iter()
            .find_map(|ext| match ext {
                FieldExtra::Name(name) => Some(name.clone()),
                _ => None,
            })
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Clone)]
pub enum FieldExtra {
    Name(String),
    Skip,
    Nested,
}

/// collect the ast fields
pub fn collect_fields(ast: &syn::DeriveInput) -> Vec<syn::Field> {
    match ast.data {
        syn::Data::Struct(syn::DataStruct { ref fields, .. }) => {
            if fields.iter().any(|field| field.ident.is_none()) {
                abort!(
                    fields.span(),
                    "struct has unnamed fields";
                    help = "#[derive(Properties)] can only be used on structs with named fields";
                );
            }
            fields.iter().cloned().collect::<Vec<_>>()
        }
        _ => abort!(ast.span(), "#[derive(Properties)] can only be used with structs"),
    }
}

pub fn collect_field_info(ast: &syn::DeriveInput) -> Vec<FieldInformation> {
    collect_fields(ast)
        .into_iter()
        .map(|field| {
            let (name, extra) = find_extra_for_field(&field);
            FieldInformation::new(field, name, extra)
        })
        .collect()
}

/// Find everything we need to know about a field
pub fn find_extra_for_field(field: &syn::Field) -> (String, Vec<FieldExtra>) {
    let field_ident = field.ident.clone().unwrap().to_string();
    let mut extras = vec![];

    for attr in &field.attrs {
        if attr.path != parse_quote!(property) {
            continue;
        }

        match attr.parse_meta() {
            Ok(syn::Meta::List(syn::MetaList { ref nested, .. })) => {
                for meta_item in nested.iter() {
                    match *meta_item {
                        syn::NestedMeta::Meta(syn::Meta::Path(ref path)) => {
                            match path.get_ident().map(ToString::to_string).as_deref() {
                                Some("skip") => extras.push(FieldExtra::Skip),
                                Some("nested") => extras.push(FieldExtra::Nested),
                                _ => {
                                    let mut ident = proc_macro2::TokenStream::new();
                                    path.to_tokens(&mut ident);
                                    abort!(path.span(), "Unexpected annotion: {}", ident)
                                }
                            }
                        }
                        syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue { ref path, ref lit, .. })) => {
                            if !path.is_ident("name") {
                                abort!(path.span(), "unexpected name value annotion on field `{}`", field_ident);
                            }
                            match lit_to_string(lit) {
                                Some(s) if !s.is_empty() => extras.push(FieldExtra::Name(s)),
                                _ => abort!(
                                    lit.span(),
                                    "Invalid attribute #[property] on field `{}`: `name` must be a non-empty string",
                                    field_ident
                                ),
                            }
                        }
                        _ => abort!(meta_item.span(), "unexpected annotion on field `{}`", field_ident),
                    }
                }
            }
            Ok(_) => abort!(
                attr.span(),
                "This attributes for the field `{}` seem to be misformed, expected #[property(...)]",
                field_ident
            ),
            Err(e) => abort!(
                attr.span(),
                "Unable to parse this attribute for the field `{}` with the error: {:?}",
                field_ident, e
            ),
        }
    }

    (field_ident, extras)
}

pub fn lit_to_string(lit: &syn::Lit) -> Option<String> {
    match *lit {
        syn::Lit::Str(ref s) => Some(s.value()),
        _ => None,
    }
}
