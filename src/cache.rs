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
use dashmap::DashMap;
use sqlhelper_core::{SqlValue, ValueType};

/// Remembers which value types have a primitive counterpart.
///
/// Shared between formatters; entries are only ever added.
#[derive(Debug, Default)]
pub struct TypeClassCache {
    cache: DashMap<ValueType, bool>,
}

impl TypeClassCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Whether `ty` is a primitive or a boxed primitive.
    pub fn is_wrap_type(&self, ty: ValueType) -> bool {
        if let Some(hit) = self.cache.get(&ty) {
            return *hit;
        }
        // Concurrent first lookups may both compute, the result is the same.
        let wrap = ty.is_primitive_like();
        *self.cache.entry(ty).or_insert(wrap)
    }

    /// A source that is itself the single bound value: primitives, strings and arrays.
    pub fn is_scalar_like(&self, value: &SqlValue) -> bool {
        let ty = value.value_type();
        self.is_wrap_type(ty) || ty.is_text() || ty.is_array()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
