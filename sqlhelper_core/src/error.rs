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

pub type Result<T> = std::result::Result<T, SqlHelperError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlHelperError {
    /// The exclusion expression could not be compiled.
    InvalidPattern {
        pattern: String,
        message: String,
    },
    ConfigError(String),
    /// The structured parameter object has no such property.
    MissingProperty {
        property: String,
        type_name: String,
    },
    ResolutionError(String),
}

impl fmt::Display for SqlHelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlHelperError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid exclusion pattern `{}`: {}", pattern, message)
            }
            SqlHelperError::ConfigError(err) => write!(f, "Configuration error: {}", err),
            SqlHelperError::MissingProperty { property, type_name } => write!(
                f,
                "There is no property named '{}' in '{}'",
                property, type_name
            ),
            SqlHelperError::ResolutionError(err) => write!(f, "Resolution failed: {}", err),
        }
    }
}

impl std::error::Error for SqlHelperError {}

impl SqlHelperError {
    pub fn config_error<T: Into<String>>(err: T) -> Self {
        Self::ConfigError(err.into())
    }

    pub fn resolution_error<T: Into<String>>(err: T) -> Self {
        Self::ResolutionError(err.into())
    }

    pub fn missing_property<T: Into<String>, E: Into<String>>(property: T, type_name: E) -> Self {
        Self::MissingProperty {
            property: property.into(),
            type_name: type_name.into(),
        }
    }

    /// Whether the error belongs to the setup phase rather than a single invocation.
    pub fn is_config_error(&self) -> bool {
        matches!(self, SqlHelperError::InvalidPattern { .. } | SqlHelperError::ConfigError(_))
    }
}
