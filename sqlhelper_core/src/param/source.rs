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
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use crate::{Result, SqlHelperError, SqlValue, ToSqlValue};

/// Read access to the named properties of a structured parameter object.
///
/// Usually implemented through `#[derive(Properties)]`.
pub trait PropertyAccess: Send + Sync {
    fn get_property(&self, name: &str) -> Result<SqlValue>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Map-like values answer every key (missing ones are null), anything else has no properties.
impl PropertyAccess for SqlValue {
    fn get_property(&self, name: &str) -> Result<SqlValue> {
        match self {
            SqlValue::Object(_) | SqlValue::Json(JsonValue::Object(_)) => Ok(self.get(name).unwrap_or_default()),
            _ => Err(SqlHelperError::missing_property(name, format!("{:?}", self.value_type()))),
        }
    }

    fn type_name(&self) -> &'static str {
        "SqlValue"
    }
}

impl PropertyAccess for IndexMap<String, SqlValue> {
    fn get_property(&self, name: &str) -> Result<SqlValue> {
        let (head, rest) = match name.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (name, None),
        };
        let value = match (self.get(head), rest) {
            (Some(value), Some(rest)) => value.get(rest).unwrap_or_default(),
            (Some(value), None) => value.clone(),
            (None, _) => SqlValue::Null,
        };
        Ok(value)
    }
}

/// The parameter source supplied by the caller of a statement.
#[derive(Clone, Default)]
pub enum ParameterObject {
    #[default]
    Null,
    Map(IndexMap<String, SqlValue>),
    /// A single bound value, used as-is for every marker.
    Value(SqlValue),
    Object(Arc<dyn PropertyAccess>),
}

impl ParameterObject {
    pub fn value<T: ToSqlValue + ?Sized>(value: &T) -> Self {
        value.to_sql_value().into()
    }

    pub fn map(map: IndexMap<String, SqlValue>) -> Self {
        ParameterObject::Map(map)
    }

    pub fn object<T: PropertyAccess + 'static>(object: T) -> Self {
        ParameterObject::Object(Arc::new(object))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParameterObject::Null)
    }
}

impl From<SqlValue> for ParameterObject {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => ParameterObject::Null,
            SqlValue::Object(map) => ParameterObject::Map(map),
            value => ParameterObject::Value(value),
        }
    }
}

impl From<IndexMap<String, SqlValue>> for ParameterObject {
    fn from(map: IndexMap<String, SqlValue>) -> Self {
        ParameterObject::Map(map)
    }
}

impl From<Arc<dyn PropertyAccess>> for ParameterObject {
    fn from(object: Arc<dyn PropertyAccess>) -> Self {
        ParameterObject::Object(object)
    }
}

impl fmt::Debug for ParameterObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterObject::Null => write!(f, "Null"),
            ParameterObject::Map(map) => f.debug_tuple("Map").field(map).finish(),
            ParameterObject::Value(value) => f.debug_tuple("Value").field(value).finish(),
            ParameterObject::Object(object) => write!(f, "Object({})", object.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_value_normalization() {
        assert!(ParameterObject::value(&None::<i32>).is_null());
        let map = params! { "id" => 1 };
        assert!(matches!(ParameterObject::from(SqlValue::Object(map)), ParameterObject::Map(_)));
        assert!(matches!(ParameterObject::value(&42), ParameterObject::Value(SqlValue::Int(42))));
    }

    #[test]
    fn test_map_property_access() {
        let map = params! {
            "user" => params! { "name" => "Bob" },
            "id" => 7,
        };
        assert_eq!(map.get_property("id").unwrap(), SqlValue::Int(7));
        assert_eq!(map.get_property("user.name").unwrap(), SqlValue::Text("Bob".to_string()));
        assert_eq!(map.get_property("missing").unwrap(), SqlValue::Null);
    }

    #[test]
    fn test_scalar_has_no_properties() {
        let err = SqlValue::Uuid(uuid::Uuid::nil()).get_property("id").unwrap_err();
        assert!(matches!(err, SqlHelperError::MissingProperty { ref property, .. } if property == "id"));
    }
}
