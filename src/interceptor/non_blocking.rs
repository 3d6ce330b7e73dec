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
use std::future::Future;
use crate::comm::ExecuteContext;
use crate::interceptor::SqlLogInterceptor;

impl SqlLogInterceptor {
    /// Async counterpart of [`SqlLogInterceptor::intercept`].
    pub async fn intercept_async<T, E, Fut>(&self, ctx: &mut ExecuteContext, proceed: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        ctx.reset_timer();
        let result = proceed.await;
        let elapsed = ctx.elapsed();
        if self.is_debug_enabled() {
            self.after_execute(ctx, elapsed);
        } else {
            self.warn_if_slow(ctx, elapsed);
        }
        result
    }
}
