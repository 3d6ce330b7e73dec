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
use proc_macro::TokenStream;
use quote::quote;
use syn::{self, DeriveInput};
use crate::comm::collect_field_info;

pub fn impl_properties(input: TokenStream) -> TokenStream {
    let ast = syn::parse::<DeriveInput>(input).unwrap();
    let struct_name = &ast.ident;
    let struct_label = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let fields = collect_field_info(&ast);

    let arms: Vec<proc_macro2::TokenStream> = fields
        .iter()
        .filter(|field| !field.is_skipped())
        .map(|field| {
            let ident = field.field.ident.as_ref().unwrap();
            let property = field.property_name();
            if field.is_nested() {
                quote!(
                    #property => {
                        return match rest {
                            Some(rest) => sqlhelper::core::PropertyAccess::get_property(&self.#ident, rest),
                            None => Err(sqlhelper::core::SqlHelperError::resolution_error(
                                format!("property '{}' of '{}' is an object, not a value", #property, #struct_label)
                            )),
                        };
                    }
                )
            } else {
                quote!(
                    #property => sqlhelper::core::ToSqlValue::to_sql_value(&self.#ident),
                )
            }
        })
        .collect();

    quote!(
        impl #impl_generics sqlhelper::core::PropertyAccess for #struct_name #ty_generics #where_clause {
            fn get_property(&self, name: &str) -> sqlhelper::core::Result<sqlhelper::core::SqlValue> {
                let (head, rest) = match name.split_once('.') {
                    Some((head, rest)) => (head, Some(rest)),
                    None => (name, None),
                };
                #[allow(unreachable_code)]
                let value: sqlhelper::core::SqlValue = match head {
                    #(#arms)*
                    _ => return Err(sqlhelper::core::SqlHelperError::missing_property(name, #struct_label)),
                };
                match rest {
                    Some(rest) => sqlhelper::core::PropertyAccess::get_property(&value, rest),
                    None => Ok(value),
                }
            }

            fn type_name(&self) -> &'static str {
                #struct_label
            }
        }
    ).into()
}
