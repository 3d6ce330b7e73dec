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

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

mod to_value;

pub use to_value::*;

use crate::ValueType;

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Bool(bool),
    Tinyint(i8),
    Smallint(i16),
    Int(i32),
    Bigint(i64),
    Float(f32),
    Double(f64),
    BigDecimal(BigDecimal),
    Char(char),
    Text(String),
    Blob(Vec<u8>),
    Json(JsonValue),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    List(Vec<SqlValue>),
    Object(IndexMap<String, SqlValue>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// The runtime type descriptor of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            SqlValue::Null => ValueType::Unknown,
            SqlValue::Bool(_) => ValueType::Bool,
            SqlValue::Tinyint(_) => ValueType::Tinyint,
            SqlValue::Smallint(_) => ValueType::Smallint,
            SqlValue::Int(_) => ValueType::Int,
            SqlValue::Bigint(_) => ValueType::Bigint,
            SqlValue::Float(_) => ValueType::Float,
            SqlValue::Double(_) => ValueType::Double,
            SqlValue::BigDecimal(_) => ValueType::BigDecimal,
            SqlValue::Char(_) => ValueType::Char,
            SqlValue::Text(_) => ValueType::Text,
            SqlValue::Blob(_) => ValueType::Blob,
            SqlValue::Json(_) => ValueType::Json,
            SqlValue::Uuid(_) => ValueType::Uuid,
            SqlValue::Date(_) => ValueType::Date,
            SqlValue::Time(_) => ValueType::Time,
            SqlValue::DateTime(_) => ValueType::DateTime,
            SqlValue::Timestamp(_) => ValueType::Timestamp,
            SqlValue::List(_) => ValueType::List,
            SqlValue::Object(_) => ValueType::Object,
        }
    }

    /// Look up a (possibly dotted) property path inside an object or JSON object value.
    pub fn get(&self, path: &str) -> Option<SqlValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = match self {
            SqlValue::Object(map) => map.get(first)?.clone(),
            SqlValue::Json(JsonValue::Object(map)) => SqlValue::from(map.get(first)?.clone()),
            _ => return None,
        };
        for segment in segments {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

impl From<JsonValue> for SqlValue {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => SqlValue::Null,
            JsonValue::Bool(b) => SqlValue::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Bigint(i)
                } else {
                    n.as_f64().map(SqlValue::Double).unwrap_or_else(|| SqlValue::Text(n.to_string()))
                }
            }
            JsonValue::String(s) => SqlValue::Text(s),
            JsonValue::Array(items) => SqlValue::List(items.into_iter().map(SqlValue::from).collect()),
            obj @ JsonValue::Object(_) => SqlValue::Json(obj),
        }
    }
}

/// The plain `toString` form; quoting is decided by the formatter.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "null"),
            SqlValue::Bool(v) => write!(f, "{}", v),
            SqlValue::Tinyint(v) => write!(f, "{}", v),
            SqlValue::Smallint(v) => write!(f, "{}", v),
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Bigint(v) => write!(f, "{}", v),
            // `{:?}` keeps the trailing `.0` on whole floats
            SqlValue::Float(v) => write!(f, "{:?}", v),
            SqlValue::Double(v) => write!(f, "{:?}", v),
            SqlValue::BigDecimal(v) => write!(f, "{}", v),
            SqlValue::Char(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "{}", v),
            SqlValue::Blob(v) => write!(f, "{}", String::from_utf8_lossy(v)),
            SqlValue::Json(JsonValue::String(s)) => write!(f, "{}", s),
            SqlValue::Json(v) => write!(f, "{}", v),
            SqlValue::Uuid(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            SqlValue::Time(v) => write!(f, "{}", v.format("%H:%M:%S")),
            SqlValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            SqlValue::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            SqlValue::List(v) => {
                let items: Vec<String> = v.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            SqlValue::Object(v) => {
                let items: Vec<String> = v.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                write!(f, "{{{}}}", items.join(", "))
            }
        }
    }
}
