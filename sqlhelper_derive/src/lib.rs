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
//!
//! Generate property access for parameter objects.
//!
use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

mod property_derive;
mod comm;

/// Expose the named fields of a struct as statement parameter properties.
/// ```rust,ignore
/// /// Annotion Support: property (name, skip, nested)
/// #[derive(Properties)]
/// struct UserQuery {
///     id: i64,
///     #[property(name = "userName")]
///     name: String,
///     #[property(skip)]
///     cache_key: String,
///     #[property(nested)]
///     dept: Dept,
/// }
/// ```
///
#[proc_macro_derive(Properties, attributes(property))]
#[proc_macro_error]
pub fn to_properties(input: TokenStream) -> TokenStream {
    property_derive::impl_properties(input)
}
