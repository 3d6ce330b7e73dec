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
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn, Level};
use sqlhelper_core::Result;
use crate::cache::TypeClassCache;
use crate::comm::ExecuteContext;
use crate::config::SqlHelperConfig;
use crate::filter::ExclusionFilter;
use crate::formatter::{beautify_sql, SqlFormatter};
use crate::interceptor::{LogLevel, SqlLog};

/// Prints every executed statement with its parameters inlined and the time it took.
#[derive(Debug, Clone)]
pub struct SqlLogInterceptor {
    config: SqlHelperConfig,
    filter: ExclusionFilter,
    formatter: SqlFormatter,
}

impl SqlLogInterceptor {
    /// Fails with `InvalidPattern` when the exclusion pattern does not compile.
    pub fn new(config: SqlHelperConfig) -> Result<Self> {
        Self::with_cache(config, Arc::new(TypeClassCache::new()))
    }

    pub fn with_cache(config: SqlHelperConfig, cache: Arc<TypeClassCache>) -> Result<Self> {
        let filter = ExclusionFilter::new(config.exclude_pattern())?;
        Ok(Self {
            config,
            filter,
            formatter: SqlFormatter::new(cache),
        })
    }

    pub fn config(&self) -> &SqlHelperConfig {
        &self.config
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    pub fn formatter(&self) -> &SqlFormatter {
        &self.formatter
    }

    /// Both the configured level and the installed subscriber must accept DEBUG.
    pub fn is_debug_enabled(&self) -> bool {
        self.config.log_level().should_log(LogLevel::Debug) && tracing::enabled!(Level::DEBUG)
    }

    /// Render and log the statement held by `ctx`.
    ///
    /// Returns `None` when nothing was logged: the configured level is above
    /// DEBUG, the statement id is excluded, or the rendered SQL is blank.
    pub fn after_execute(&self, ctx: &ExecuteContext, elapsed: Duration) -> Option<SqlLog> {
        self.warn_if_slow(ctx, elapsed);
        if !self.config.log_level().should_log(LogLevel::Debug) {
            return None;
        }
        if self.filter.should_skip(ctx.statement_id()) {
            return None;
        }
        let mut sql = self.formatter.format_sql(ctx.bound_sql());
        if self.config.beautify() {
            sql = beautify_sql(&sql);
        }
        if sql.trim().is_empty() {
            return None;
        }
        let log = SqlLog::new(sql, elapsed.as_millis());
        debug!("{}", log);
        Some(log)
    }

    pub(crate) fn warn_if_slow(&self, ctx: &ExecuteContext, elapsed: Duration) {
        if let Some(threshold) = self.config.slow_query_threshold() {
            if elapsed > threshold && self.config.log_level().should_log(LogLevel::Warn) {
                warn!("Slow Query! Statement: {}, Cost: {} ms", ctx.statement_id(), elapsed.as_millis());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlhelper_core::{params, BoundSql, ParameterMapping, ParameterObject};

    fn context(statement_id: &str) -> ExecuteContext {
        let bound = BoundSql::new(
            "SELECT *\n  FROM t\n WHERE id = ?",
            vec![ParameterMapping::typed::<i32>("id")],
            ParameterObject::map(params! { "id" => 7 }),
        );
        ExecuteContext::new(statement_id, bound)
    }

    #[test]
    fn test_after_execute_logs_formatted_sql() {
        let interceptor = SqlLogInterceptor::new(SqlHelperConfig::default()).unwrap();
        let log = interceptor.after_execute(&context("UserMapper.selectById"), Duration::from_millis(12)).unwrap();
        assert_eq!(log.sql, "SELECT * FROM t WHERE id = 7");
        assert_eq!(log.cost_ms, 12);
    }

    #[test]
    fn test_after_execute_without_beautify() {
        let cfg = SqlHelperConfig::default().set_beautify(false);
        let interceptor = SqlLogInterceptor::new(cfg).unwrap();
        let log = interceptor.after_execute(&context("UserMapper.selectById"), Duration::ZERO).unwrap();
        assert_eq!(log.sql, "SELECT *\n  FROM t\n WHERE id = 7");
    }

    #[test]
    fn test_after_execute_skips_excluded() {
        let cfg = SqlHelperConfig::default().set_exclude_pattern(r"UserMapper\..*");
        let interceptor = SqlLogInterceptor::new(cfg).unwrap();
        assert!(interceptor.after_execute(&context("UserMapper.selectById"), Duration::ZERO).is_none());
        assert!(interceptor.after_execute(&context("OrderMapper.selectById"), Duration::ZERO).is_some());
    }

    #[test]
    fn test_after_execute_respects_level() {
        let cfg = SqlHelperConfig::default().set_log_level(LogLevel::Info);
        let interceptor = SqlLogInterceptor::new(cfg).unwrap();
        assert!(interceptor.after_execute(&context("UserMapper.selectById"), Duration::ZERO).is_none());
    }

    #[test]
    fn test_blank_sql_is_not_logged() {
        let interceptor = SqlLogInterceptor::new(SqlHelperConfig::default()).unwrap();
        let ctx = ExecuteContext::new("Blank.stmt", BoundSql::new("  \n ", vec![], ParameterObject::Null));
        assert!(interceptor.after_execute(&ctx, Duration::ZERO).is_none());
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let cfg = SqlHelperConfig::default().set_exclude_pattern("(unclosed");
        let err = SqlLogInterceptor::new(cfg).unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_shared_cache() {
        let cache = Arc::new(TypeClassCache::new());
        let a = SqlLogInterceptor::with_cache(SqlHelperConfig::default(), cache.clone()).unwrap();
        let b = SqlLogInterceptor::with_cache(SqlHelperConfig::default(), cache.clone()).unwrap();
        let scalar = || {
            ExecuteContext::new(
                "A.count",
                BoundSql::new("SELECT ?", vec![ParameterMapping::typed::<i64>("n")], ParameterObject::value(&42i64)),
            )
        };
        assert_eq!(a.after_execute(&scalar(), Duration::ZERO).unwrap().sql, "SELECT 42");
        b.after_execute(&scalar(), Duration::ZERO);
        assert!(Arc::ptr_eq(a.formatter().cache(), b.formatter().cache()));
        assert!(!cache.is_empty());
    }
}
