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

/// Build a named parameter table (`IndexMap<String, SqlValue>`), keeping insertion order.
///
/// ```rust
/// # use sqlhelper_core::{params, SqlValue};
/// let params = params! {
///     "name" => "Jack",
///     "id" => 1,
/// };
/// assert_eq!(params.get("id"), Some(&SqlValue::Int(1)));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::IndexMap::<std::string::String, $crate::SqlValue>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        {
            let mut output = $crate::IndexMap::<std::string::String, $crate::SqlValue>::new();
            $(
                output.insert(std::string::String::from($name), $crate::ToSqlValue::to_sql_value(&$value));
            )+
            output
        }
    };
}
