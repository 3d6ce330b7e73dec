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
use std::sync::Arc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::info;
use sqlhelper_core::{
    BoundSql, JdbcType, ParameterMapping, ParameterObject, PropertyAccess, Result, SqlHelperError, SqlValue,
    ValueType,
};
use crate::cache::TypeClassCache;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Formatting stopped at a marker whose value could not be resolved.
#[derive(Debug, Clone)]
pub struct FormatError {
    /// The template with every marker before the failing one substituted.
    pub partial_sql: String,
    pub source: SqlHelperError,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (sql so far: {})", self.source, self.partial_sql)
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Rebuilds the literal SQL of a bound statement.
#[derive(Debug, Clone, Default)]
pub struct SqlFormatter {
    cache: Arc<TypeClassCache>,
}

impl SqlFormatter {
    pub fn new(cache: Arc<TypeClassCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<TypeClassCache> {
        &self.cache
    }

    /// Best effort: on failure the error and the SQL built so far are logged,
    /// and that partial SQL (which may still contain `?`) is returned.
    pub fn format_sql(&self, bound: &BoundSql) -> String {
        match self.try_format(bound) {
            Ok(sql) => sql,
            Err(err) => {
                info!("sqlhelper error:{}", err.partial_sql);
                info!("{}", err.source);
                err.partial_sql
            }
        }
    }

    /// Substitute every non-OUT marker left to right, stopping at the first failure.
    pub fn try_format(&self, bound: &BoundSql) -> std::result::Result<String, FormatError> {
        let mut sql = bound.sql().to_string();
        for mapping in bound.parameter_mappings() {
            if mapping.is_output_only() {
                continue;
            }
            let value = match self.resolve_value(bound, mapping) {
                Ok(value) => value,
                Err(source) => return Err(FormatError { partial_sql: sql, source }),
            };
            let mut jdbc_type = mapping.jdbc_type();
            if value.is_null() && jdbc_type.is_none() {
                jdbc_type = Some(JdbcType::Null);
            }
            sql = replace_parameter(&sql, &value, jdbc_type, mapping.value_type());
        }
        Ok(sql)
    }

    /// Resolve the value bound to one marker.
    ///
    /// Precedence: additional parameters, null source, map lookup and scalar
    /// source (both only without a declared type), then property extraction.
    pub fn resolve_value(&self, bound: &BoundSql, mapping: &ParameterMapping) -> Result<SqlValue> {
        let property = mapping.property();
        if let Some(value) = bound.additional_parameter(property) {
            return Ok(value.clone());
        }
        let declared = mapping.jdbc_type().is_some();
        match bound.parameter_object() {
            ParameterObject::Null => Ok(SqlValue::Null),
            ParameterObject::Map(map) if !declared => Ok(map.get(property).cloned().unwrap_or_default()),
            ParameterObject::Value(value) if !declared && self.cache.is_scalar_like(value) => Ok(value.clone()),
            source => self.extract_property(source, property),
        }
    }

    fn extract_property(&self, source: &ParameterObject, property: &str) -> Result<SqlValue> {
        match source {
            ParameterObject::Null => Ok(SqlValue::Null),
            ParameterObject::Map(map) => map.get_property(property),
            ParameterObject::Value(value @ SqlValue::Json(JsonValue::Object(_))) => value.get_property(property),
            ParameterObject::Value(value) => Ok(value.clone()),
            ParameterObject::Object(object) => object.get_property(property).map_err(|err| match err {
                SqlHelperError::MissingProperty { .. } => err,
                other => SqlHelperError::resolution_error(format!(
                    "failed to read '{}' from {}: {}",
                    property,
                    object.type_name(),
                    other
                )),
            }),
        }
    }
}

/// Render `value` as a literal: bare for numeric types, single-quoted otherwise.
///
/// Quotes inside the value are not escaped, the output is for reading only.
pub fn to_literal(value: &SqlValue, jdbc_type: Option<JdbcType>, value_type: ValueType) -> String {
    let literal = value.to_string();
    let bare = match jdbc_type {
        Some(tag) => tag.is_numeric(),
        None => value_type.is_numeric(),
    };
    if bare {
        literal
    } else {
        format!("'{}'", literal)
    }
}

/// Replace the first remaining `?` of `sql` with the literal of `value`.
pub fn replace_parameter(sql: &str, value: &SqlValue, jdbc_type: Option<JdbcType>, value_type: ValueType) -> String {
    sql.replacen('?', &to_literal(value, jdbc_type, value_type), 1)
}

/// Collapse every run of whitespace into one space.
pub fn beautify_sql(sql: &str) -> String {
    WHITESPACE.replace_all(sql, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlhelper_core::{params, ParameterMode};

    fn formatter() -> SqlFormatter {
        SqlFormatter::new(Arc::new(TypeClassCache::new()))
    }

    #[test]
    fn test_map_source_with_declared_types() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE id = ? AND name = ?",
            vec![
                ParameterMapping::new("id").with_jdbc_type(JdbcType::Integer),
                ParameterMapping::new("name").with_jdbc_type(JdbcType::Varchar),
            ],
            params! { "id" => 7, "name" => "Bob" }.into(),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE id = 7 AND name = 'Bob'");
    }

    #[test]
    fn test_bare_scalar_source() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE id = ?",
            vec![ParameterMapping::typed::<i32>("id")],
            ParameterObject::value(&42),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE id = 42");
    }

    #[test]
    fn test_additional_parameter_wins() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE id = ?",
            vec![ParameterMapping::typed::<i64>("id")],
            params! { "id" => 1 }.into(),
        )
        .with_additional_parameter("id", &99);
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE id = 99");
    }

    #[test]
    fn test_out_mappings_are_skipped() {
        let bound = BoundSql::new(
            "{call p(?, ?)}",
            vec![
                ParameterMapping::typed::<i32>("id"),
                ParameterMapping::new("result").with_mode(ParameterMode::Out),
                ParameterMapping::typed::<String>("name"),
            ],
            params! { "id" => 3, "result" => 0, "name" => "x" }.into(),
        );
        assert_eq!(formatter().format_sql(&bound), "{call p(3, 'x')}");
    }

    #[test]
    fn test_null_value_is_quoted() {
        let bound = BoundSql::new(
            "UPDATE t SET note = ? WHERE id = ?",
            vec![ParameterMapping::typed::<String>("note"), ParameterMapping::typed::<i32>("id")],
            params! { "id" => 1 }.into(),
        );
        assert_eq!(formatter().format_sql(&bound), "UPDATE t SET note = 'null' WHERE id = 1");
    }

    #[test]
    fn test_null_source() {
        let bound = BoundSql::new(
            "SELECT ?",
            vec![ParameterMapping::new("id").with_jdbc_type(JdbcType::Integer)],
            ParameterObject::Null,
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT null");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE name = ?",
            vec![ParameterMapping::typed::<String>("name")],
            ParameterObject::value(&"O'Brien"),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE name = 'O'Brien'");
    }

    #[test]
    fn test_declared_type_with_map_uses_property_paths() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE name = ?",
            vec![ParameterMapping::new("user.name").with_jdbc_type(JdbcType::Varchar)],
            params! { "user" => params! { "name" => "Ann" } }.into(),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE name = 'Ann'");
    }

    #[test]
    fn test_declared_type_with_scalar_source() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE name = ?",
            vec![ParameterMapping::new("name").with_jdbc_type(JdbcType::Varchar)],
            ParameterObject::value(&"Bob"),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE name = 'Bob'");
    }

    #[test]
    fn test_json_source_is_extracted_by_key() {
        let bound = BoundSql::new(
            "SELECT * FROM t WHERE id = ?",
            vec![ParameterMapping::typed::<i64>("id")],
            ParameterObject::Value(SqlValue::Json(serde_json::json!({"id": 12}))),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT * FROM t WHERE id = 12");
    }

    #[test]
    fn test_template_without_enough_markers() {
        let bound = BoundSql::new(
            "SELECT 1",
            vec![ParameterMapping::typed::<i32>("id")],
            ParameterObject::value(&1),
        );
        assert_eq!(formatter().format_sql(&bound), "SELECT 1");
    }

    #[test]
    fn test_literal_shapes() {
        let value = SqlValue::Double(1.5);
        assert_eq!(to_literal(&value, Some(JdbcType::Decimal), ValueType::Unknown), "1.5");
        assert_eq!(to_literal(&value, Some(JdbcType::Varchar), ValueType::Double), "'1.5'");
        assert_eq!(to_literal(&value, None, ValueType::Double), "1.5");
        assert_eq!(to_literal(&SqlValue::Bool(true), None, ValueType::Bool), "'true'");
        assert_eq!(to_literal(&SqlValue::Bool(true), Some(JdbcType::Bit), ValueType::Bool), "true");
    }

    #[test]
    fn test_replace_parameter_is_leftmost() {
        let sql = replace_parameter("a = ? and b = ?", &SqlValue::Int(1), None, ValueType::Int);
        assert_eq!(sql, "a = 1 and b = ?");
        let sql = replace_parameter(&sql, &SqlValue::Text("$1\\".to_string()), None, ValueType::Text);
        assert_eq!(sql, "a = 1 and b = '$1\\'");
    }

    #[test]
    fn test_beautify() {
        assert_eq!(beautify_sql("SELECT *\n\tFROM  t\r\n WHERE id = 1"), "SELECT * FROM t WHERE id = 1");
        assert_eq!(beautify_sql(""), "");
        let once = beautify_sql("  a \n\n b  ");
        assert_eq!(once, " a b ");
        assert_eq!(beautify_sql(&once), once);
    }
}
