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

mod source;

pub use source::*;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{JdbcType, SqlHelperError, ToSqlValue, ValueType};

/// Direction of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParameterMode {
    #[default]
    In,
    /// Carries no input value, never substituted.
    Out,
    InOut,
}

impl ParameterMode {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "IN" => Some(ParameterMode::In),
            "OUT" => Some(ParameterMode::Out),
            "INOUT" | "IN_OUT" => Some(ParameterMode::InOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterMode::In => "IN",
            ParameterMode::Out => "OUT",
            ParameterMode::InOut => "INOUT",
        }
    }
}

impl FromStr for ParameterMode {
    type Err = SqlHelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterMode::from_name(s).ok_or_else(|| SqlHelperError::config_error(format!("unknown parameter mode `{}`", s)))
    }
}

impl fmt::Display for ParameterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Describes one `?` marker of the SQL template, in template order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMapping {
    property: String,
    #[serde(default)]
    mode: ParameterMode,
    #[serde(default)]
    jdbc_type: Option<JdbcType>,
    #[serde(default)]
    value_type: ValueType,
}

impl ParameterMapping {
    pub fn new<S: Into<String>>(property: S) -> Self {
        Self {
            property: property.into(),
            mode: ParameterMode::In,
            jdbc_type: None,
            value_type: ValueType::Unknown,
        }
    }

    /// A mapping whose declared value type is taken from `T`.
    pub fn typed<T: ToSqlValue + ?Sized>(property: &str) -> Self {
        Self::new(property).with_value_type(T::value_type())
    }

    pub fn with_mode(mut self, mode: ParameterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_jdbc_type(mut self, jdbc_type: JdbcType) -> Self {
        self.jdbc_type = Some(jdbc_type);
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn mode(&self) -> ParameterMode {
        self.mode
    }

    pub fn jdbc_type(&self) -> Option<JdbcType> {
        self.jdbc_type
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_output_only(&self) -> bool {
        self.mode == ParameterMode::Out
    }
}
