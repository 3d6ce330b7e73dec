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
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::SqlHelperError;

/// Explicit type tag declared on a parameter mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JdbcType {
    Bit,
    Tinyint,
    Smallint,
    Integer,
    Bigint,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    Longvarchar,
    Nchar,
    Nvarchar,
    Longnvarchar,
    Clob,
    Nclob,
    Binary,
    Varbinary,
    Longvarbinary,
    Blob,
    Boolean,
    Date,
    Time,
    Timestamp,
    TimeWithTimezone,
    TimestampWithTimezone,
    Array,
    Struct,
    Json,
    Other,
    Null,
    Undefined,
    Cursor,
}

impl JdbcType {
    /// Numeric tags are rendered bare, every other tag is quoted.
    pub fn is_numeric(&self) -> bool {
        matches!(
            *self,
            JdbcType::Bit
                | JdbcType::Tinyint
                | JdbcType::Smallint
                | JdbcType::Integer
                | JdbcType::Bigint
                | JdbcType::Float
                | JdbcType::Real
                | JdbcType::Double
                | JdbcType::Numeric
                | JdbcType::Decimal
        )
    }

    /// Parse a tag name, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        let tag = match s.trim().to_uppercase().as_str() {
            "BIT" => JdbcType::Bit,
            "TINYINT" => JdbcType::Tinyint,
            "SMALLINT" => JdbcType::Smallint,
            "INTEGER" | "INT" => JdbcType::Integer,
            "BIGINT" => JdbcType::Bigint,
            "FLOAT" => JdbcType::Float,
            "REAL" => JdbcType::Real,
            "DOUBLE" => JdbcType::Double,
            "NUMERIC" => JdbcType::Numeric,
            "DECIMAL" => JdbcType::Decimal,
            "CHAR" => JdbcType::Char,
            "VARCHAR" => JdbcType::Varchar,
            "LONGVARCHAR" => JdbcType::Longvarchar,
            "NCHAR" => JdbcType::Nchar,
            "NVARCHAR" => JdbcType::Nvarchar,
            "LONGNVARCHAR" => JdbcType::Longnvarchar,
            "CLOB" => JdbcType::Clob,
            "NCLOB" => JdbcType::Nclob,
            "BINARY" => JdbcType::Binary,
            "VARBINARY" => JdbcType::Varbinary,
            "LONGVARBINARY" => JdbcType::Longvarbinary,
            "BLOB" => JdbcType::Blob,
            "BOOLEAN" => JdbcType::Boolean,
            "DATE" => JdbcType::Date,
            "TIME" => JdbcType::Time,
            "TIMESTAMP" => JdbcType::Timestamp,
            "TIME_WITH_TIMEZONE" => JdbcType::TimeWithTimezone,
            "TIMESTAMP_WITH_TIMEZONE" => JdbcType::TimestampWithTimezone,
            "ARRAY" => JdbcType::Array,
            "STRUCT" => JdbcType::Struct,
            "JSON" => JdbcType::Json,
            "OTHER" => JdbcType::Other,
            "NULL" => JdbcType::Null,
            "UNDEFINED" => JdbcType::Undefined,
            "CURSOR" => JdbcType::Cursor,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JdbcType::Bit => "BIT",
            JdbcType::Tinyint => "TINYINT",
            JdbcType::Smallint => "SMALLINT",
            JdbcType::Integer => "INTEGER",
            JdbcType::Bigint => "BIGINT",
            JdbcType::Float => "FLOAT",
            JdbcType::Real => "REAL",
            JdbcType::Double => "DOUBLE",
            JdbcType::Numeric => "NUMERIC",
            JdbcType::Decimal => "DECIMAL",
            JdbcType::Char => "CHAR",
            JdbcType::Varchar => "VARCHAR",
            JdbcType::Longvarchar => "LONGVARCHAR",
            JdbcType::Nchar => "NCHAR",
            JdbcType::Nvarchar => "NVARCHAR",
            JdbcType::Longnvarchar => "LONGNVARCHAR",
            JdbcType::Clob => "CLOB",
            JdbcType::Nclob => "NCLOB",
            JdbcType::Binary => "BINARY",
            JdbcType::Varbinary => "VARBINARY",
            JdbcType::Longvarbinary => "LONGVARBINARY",
            JdbcType::Blob => "BLOB",
            JdbcType::Boolean => "BOOLEAN",
            JdbcType::Date => "DATE",
            JdbcType::Time => "TIME",
            JdbcType::Timestamp => "TIMESTAMP",
            JdbcType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            JdbcType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
            JdbcType::Array => "ARRAY",
            JdbcType::Struct => "STRUCT",
            JdbcType::Json => "JSON",
            JdbcType::Other => "OTHER",
            JdbcType::Null => "NULL",
            JdbcType::Undefined => "UNDEFINED",
            JdbcType::Cursor => "CURSOR",
        }
    }
}

impl FromStr for JdbcType {
    type Err = SqlHelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JdbcType::from_name(s).ok_or_else(|| SqlHelperError::config_error(format!("unknown jdbc type `{}`", s)))
    }
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static type of a bound value, consulted when no [`JdbcType`] is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueType {
    Bool,
    Tinyint,
    Smallint,
    Int,
    Bigint,
    Float,
    Double,
    BigDecimal,
    Char,
    Text,
    Blob,
    Json,
    Uuid,
    Date,
    Time,
    DateTime,
    Timestamp,
    List,
    Object,
    #[default]
    Unknown,
}

impl ValueType {
    /// Assignable to a number.
    pub fn is_numeric(&self) -> bool {
        matches!(
            *self,
            ValueType::Tinyint
                | ValueType::Smallint
                | ValueType::Int
                | ValueType::Bigint
                | ValueType::Float
                | ValueType::Double
                | ValueType::BigDecimal
        )
    }

    /// Has a primitive counterpart: the numbers, `bool` and `char`.
    ///
    /// `BigDecimal` is a number but not a primitive.
    pub fn is_primitive_like(&self) -> bool {
        matches!(
            *self,
            ValueType::Bool
                | ValueType::Char
                | ValueType::Tinyint
                | ValueType::Smallint
                | ValueType::Int
                | ValueType::Bigint
                | ValueType::Float
                | ValueType::Double
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(*self, ValueType::Text | ValueType::Char)
    }

    pub fn is_array(&self) -> bool {
        matches!(*self, ValueType::List | ValueType::Blob)
    }
}
