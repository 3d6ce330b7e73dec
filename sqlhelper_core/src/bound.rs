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
use indexmap::IndexMap;
use crate::{ParameterMapping, ParameterObject, SqlValue, ToSqlValue};

/// Everything the host pipeline knows about one statement invocation.
#[derive(Debug, Clone, Default)]
pub struct BoundSql {
    sql: String,
    parameter_mappings: Vec<ParameterMapping>,
    parameter_object: ParameterObject,
    additional_parameters: IndexMap<String, SqlValue>,
}

impl BoundSql {
    pub fn new<S: Into<String>>(sql: S, parameter_mappings: Vec<ParameterMapping>, parameter_object: ParameterObject) -> Self {
        Self {
            sql: sql.into(),
            parameter_mappings,
            parameter_object,
            additional_parameters: IndexMap::new(),
        }
    }

    pub fn with_additional_parameter<K: Into<String>, V: ToSqlValue + ?Sized>(mut self, name: K, value: &V) -> Self {
        self.additional_parameters.insert(name.into(), value.to_sql_value());
        self
    }

    pub fn with_additional_parameters(mut self, params: IndexMap<String, SqlValue>) -> Self {
        self.additional_parameters.extend(params);
        self
    }

    pub fn set_additional_parameter<K: Into<String>>(&mut self, name: K, value: SqlValue) {
        self.additional_parameters.insert(name.into(), value);
    }

    pub fn has_additional_parameter(&self, name: &str) -> bool {
        self.additional_parameters.contains_key(name)
    }

    pub fn additional_parameter(&self, name: &str) -> Option<&SqlValue> {
        self.additional_parameters.get(name)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameter_mappings(&self) -> &[ParameterMapping] {
        &self.parameter_mappings
    }

    pub fn parameter_object(&self) -> &ParameterObject {
        &self.parameter_object
    }

    /// Number of `?` markers in the template.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
