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
use crate::comm::ExecuteContext;
use crate::interceptor::SqlLogInterceptor;

impl SqlLogInterceptor {
    /// Run `proceed` and log the statement afterwards.
    ///
    /// The result of `proceed` is handed back untouched, errors included.
    /// Nothing is formatted unless DEBUG is enabled.
    pub fn intercept<T, E, F>(&self, ctx: &mut ExecuteContext, proceed: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        ctx.reset_timer();
        let result = proceed();
        let elapsed = ctx.elapsed();
        if self.is_debug_enabled() {
            self.after_execute(ctx, elapsed);
        } else {
            self.warn_if_slow(ctx, elapsed);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use crate::comm::ExecuteContext;
    use crate::config::SqlHelperConfig;
    use crate::interceptor::SqlLogInterceptor;
    use sqlhelper_core::{BoundSql, ParameterObject};

    #[test]
    fn test_intercept_passes_result_through() {
        let interceptor = SqlLogInterceptor::new(SqlHelperConfig::default()).unwrap();
        let mut ctx = ExecuteContext::new("T.select", BoundSql::new("SELECT 1", vec![], ParameterObject::Null));

        let ok: Result<u64, String> = interceptor.intercept(&mut ctx, || Ok(3));
        assert_eq!(ok, Ok(3));

        let err: Result<u64, String> = interceptor.intercept(&mut ctx, || Err("connection reset".to_string()));
        assert_eq!(err, Err("connection reset".to_string()));
    }

    #[test]
    fn test_intercept_times_from_context() {
        let interceptor = SqlLogInterceptor::new(SqlHelperConfig::default()).unwrap();
        let mut ctx = ExecuteContext::new("T.select", BoundSql::new("SELECT 1", vec![], ParameterObject::Null));
        let created = ctx.start_time();
        std::thread::sleep(Duration::from_millis(30));

        let ok: Result<(), ()> = interceptor.intercept(&mut ctx, || {
            std::thread::sleep(Duration::from_millis(5));
            Ok(())
        });
        assert!(ok.is_ok());
        // the timer restarts when execution begins, so the wait before it is not counted
        assert!(ctx.start_time() > created);
        assert!(ctx.start_time() - created >= Duration::from_millis(30));
        assert!(ctx.elapsed() >= Duration::from_millis(5));
    }
}
