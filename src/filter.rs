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
use once_cell::sync::Lazy;
use regex::Regex;
use sqlhelper_core::{Result, SqlHelperError};

static FLAG_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\?([a-zA-Z-]+)\)").unwrap());

/// Decides which statements are not worth formatting.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    source: Option<String>,
    pattern: Option<Regex>,
}

impl ExclusionFilter {
    /// Compile the exclusion expression once. An invalid expression is a configuration error.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Ok(Self::default()),
        };
        // Anchored so that only a full match of the statement id counts.
        // A trailing `#` comment in verbose mode runs to the end of the line.
        let anchored = if ends_in_verbose_mode(pattern) {
            format!("^(?:{}\n)$", pattern)
        } else {
            format!("^(?:{})$", pattern)
        };
        let compiled = Regex::new(&anchored).map_err(|err| SqlHelperError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            source: Some(pattern.to_string()),
            pattern: Some(compiled),
        })
    }

    pub fn should_skip(&self, statement_id: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(statement_id),
            None => false,
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.pattern.is_some()
    }
}

/// Whether the last inline flag group of `pattern` leaves `x` switched on.
fn ends_in_verbose_mode(pattern: &str) -> bool {
    let mut verbose = false;
    for caps in FLAG_GROUP.captures_iter(pattern) {
        let (Some(whole), Some(flags)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if pattern[..whole.start()].ends_with('\\') {
            continue;
        }
        let (on, off) = flags.as_str().split_once('-').unwrap_or((flags.as_str(), ""));
        if on.contains('x') {
            verbose = true;
        }
        if off.contains('x') {
            verbose = false;
        }
    }
    verbose
}
