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
use crate::{SqlValue, ValueType};
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

/// Conversion of a Rust value into a bound [`SqlValue`].
///
/// `value_type` is the static descriptor of the implementing type, used as the
/// declared value type of a parameter mapping.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> SqlValue;

    fn value_type() -> ValueType;
}

macro_rules! impl_to_sql_value {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(&self) -> SqlValue {
                    SqlValue::$variant(self.to_owned())
                }

                fn value_type() -> ValueType {
                    ValueType::$variant
                }
            }
        )*
    };
}

macro_rules! impl_widen_to_sql_value {
    ($ty:ty, $variant:ident, $target:ident) => {
        impl ToSqlValue for $ty {
            fn to_sql_value(&self) -> SqlValue {
                SqlValue::$variant(*self as $target)
            }

            fn value_type() -> ValueType {
                ValueType::$variant
            }
        }
    };
}

macro_rules! impl_large_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(&self) -> SqlValue {
                    match i64::try_from(*self) {
                        Ok(v) => SqlValue::Bigint(v),
                        Err(_) => self
                            .to_string()
                            .parse::<BigDecimal>()
                            .map(SqlValue::BigDecimal)
                            .unwrap_or_else(|_| SqlValue::Text(self.to_string())),
                    }
                }

                fn value_type() -> ValueType {
                    ValueType::Bigint
                }
            }
        )*
    };
}

impl_widen_to_sql_value!(u8, Smallint, i16);
impl_widen_to_sql_value!(u16, Int, i32);
impl_widen_to_sql_value!(u32, Bigint, i64);
impl_large_to_sql_value!(u64, usize, isize, i128, u128);

impl_to_sql_value! {
    bool => Bool,
    i8 => Tinyint,
    i16 => Smallint,
    i32 => Int,
    i64 => Bigint,
    f32 => Float,
    f64 => Double,
    BigDecimal => BigDecimal,
    char => Char,
    String => Text,
    JsonValue => Json,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => Timestamp
}

impl ToSqlValue for str {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }

    fn value_type() -> ValueType {
        ValueType::Text
    }
}

impl ToSqlValue for DateTime<Local> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(self.with_timezone(&Utc))
    }

    fn value_type() -> ValueType {
        ValueType::Timestamp
    }
}

impl ToSqlValue for DateTime<FixedOffset> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(self.with_timezone(&Utc))
    }

    fn value_type() -> ValueType {
        ValueType::Timestamp
    }
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(&self) -> SqlValue {
        self.clone()
    }

    fn value_type() -> ValueType {
        ValueType::Unknown
    }
}

impl ToSqlValue for () {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Null
    }

    fn value_type() -> ValueType {
        ValueType::Unknown
    }
}

// Option Type support
impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> SqlValue {
        match self {
            Some(val) => val.to_sql_value(),
            None => SqlValue::Null,
        }
    }

    fn value_type() -> ValueType {
        T::value_type()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> SqlValue {
        (**self).to_sql_value()
    }

    fn value_type() -> ValueType {
        T::value_type()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for Box<T> {
    fn to_sql_value(&self) -> SqlValue {
        (**self).to_sql_value()
    }

    fn value_type() -> ValueType {
        T::value_type()
    }
}

impl<T: ToSqlValue> ToSqlValue for [T] {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::List(self.iter().map(ToSqlValue::to_sql_value).collect())
    }

    fn value_type() -> ValueType {
        ValueType::List
    }
}

impl<T: ToSqlValue> ToSqlValue for Vec<T> {
    fn to_sql_value(&self) -> SqlValue {
        self.as_slice().to_sql_value()
    }

    fn value_type() -> ValueType {
        ValueType::List
    }
}

impl<V: ToSqlValue> ToSqlValue for HashSet<V> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::List(self.iter().map(ToSqlValue::to_sql_value).collect())
    }

    fn value_type() -> ValueType {
        ValueType::List
    }
}

macro_rules! impl_map_to_sql_value {
    ($($map:ident),*) => {
        $(
            impl<K, V> ToSqlValue for $map<K, V>
            where
                K: AsRef<str>,
                V: ToSqlValue,
            {
                fn to_sql_value(&self) -> SqlValue {
                    let converted: IndexMap<String, SqlValue> = self
                        .iter()
                        .map(|(k, v)| (k.as_ref().to_string(), v.to_sql_value()))
                        .collect();
                    SqlValue::Object(converted)
                }

                fn value_type() -> ValueType {
                    ValueType::Object
                }
            }
        )*
    };
}

impl_map_to_sql_value!(IndexMap, HashMap, BTreeMap);
