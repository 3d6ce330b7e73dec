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
use std::time::{Duration, Instant};
use sqlhelper_core::BoundSql;

/// Execution context
pub struct ExecuteContext {
    /// Fully qualified statement id, e.g. `UserMapper.selectById`
    statement_id: String,

    /// Statement and its bound parameters
    bound_sql: BoundSql,

    /// Start time - Set when the context is created
    start_time: Instant,
}

impl ExecuteContext {
    /// Create a new execution context
    pub fn new<S: Into<String>>(statement_id: S, bound_sql: BoundSql) -> Self {
        Self {
            statement_id: statement_id.into(),
            bound_sql,
            start_time: Instant::now(),
        }
    }

    pub fn statement_id(&self) -> &str {
        &self.statement_id
    }

    pub fn bound_sql(&self) -> &BoundSql {
        &self.bound_sql
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Restart the timer right before the statement is handed to the driver.
    pub fn reset_timer(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl std::fmt::Debug for ExecuteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecuteContext")
            .field("statement_id", &self.statement_id)
            .field("sql", &self.bound_sql.sql())
            .field("start_time", &self.start_time)
            .finish()
    }
}
