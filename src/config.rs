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

use std::collections::HashMap;
use std::time::Duration;
use serde::Deserialize;
use tracing::warn;
use sqlhelper_core::{Result, SqlHelperError};
use crate::interceptor::LogLevel;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SqlHelperConfig {
    /// Statements whose id fully matches this expression are not formatted.
    exclude_pattern: Option<String>,
    log_level: LogLevel,
    slow_query_threshold_ms: Option<u64>,
    beautify: bool,
}

impl Default for SqlHelperConfig {
    fn default() -> Self {
        SqlHelperConfig {
            exclude_pattern: None,
            log_level: LogLevel::Debug,
            slow_query_threshold_ms: None,
            beautify: true,
        }
    }
}

impl SqlHelperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the interceptor properties (`noPrint`, `logLevel`, `slowQueryThreshold`, `beautify`).
    ///
    /// Unknown keys are ignored.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let mut cfg = SqlHelperConfig::default();
        for (key, value) in properties.iter() {
            match key.as_str() {
                "noPrint" | "exclude_pattern" => {
                    cfg = cfg.set_exclude_pattern(value.clone());
                }
                "logLevel" | "log_level" => {
                    let level = LogLevel::from_str(value)
                        .ok_or_else(|| SqlHelperError::config_error(format!("unknown log level `{}`", value)))?;
                    cfg = cfg.set_log_level(level);
                }
                "slowQueryThreshold" | "slow_query_threshold_ms" => {
                    let threshold = value.trim().parse::<u64>().map_err(|e| {
                        SqlHelperError::config_error(format!("invalid slow query threshold `{}`: {}", value, e))
                    })?;
                    cfg = cfg.set_slow_query_threshold(Duration::from_millis(threshold));
                }
                "beautify" => {
                    let beautify = value.trim().parse::<bool>().map_err(|e| {
                        SqlHelperError::config_error(format!("invalid beautify flag `{}`: {}", value, e))
                    })?;
                    cfg = cfg.set_beautify(beautify);
                }
                _ => {
                    warn!("ignoring unknown sqlhelper property `{}`", key);
                }
            }
        }
        Ok(cfg)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SqlHelperError::config_error(e.to_string()))
    }

    pub fn set_exclude_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        let pattern = pattern.into();
        self.exclude_pattern = if pattern.trim().is_empty() { None } else { Some(pattern) };
        self
    }

    pub fn exclude_pattern(&self) -> Option<&str> {
        self.exclude_pattern.as_deref()
    }

    pub fn set_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_slow_query_threshold(mut self, threshold: Duration) -> Self {
        self.slow_query_threshold_ms = Some(u64::try_from(threshold.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn slow_query_threshold(&self) -> Option<Duration> {
        self.slow_query_threshold_ms.map(Duration::from_millis)
    }

    pub fn set_beautify(mut self, beautify: bool) -> Self {
        self.beautify = beautify;
        self
    }

    pub fn beautify(&self) -> bool {
        self.beautify
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = SqlHelperConfig::default();
        assert_eq!(cfg.exclude_pattern(), None);
        assert_eq!(cfg.log_level(), LogLevel::Debug);
        assert_eq!(cfg.slow_query_threshold(), None);
        assert!(cfg.beautify());
    }

    #[test]
    fn test_from_properties() {
        let cfg = SqlHelperConfig::from_properties(&props(&[
            ("noPrint", r"UserMapper\..*"),
            ("logLevel", "info"),
            ("slowQueryThreshold", "250"),
            ("beautify", "false"),
            ("dialect", "mysql"),
        ]))
        .unwrap();
        assert_eq!(cfg.exclude_pattern(), Some(r"UserMapper\..*"));
        assert_eq!(cfg.log_level(), LogLevel::Info);
        assert_eq!(cfg.slow_query_threshold(), Some(Duration::from_millis(250)));
        assert!(!cfg.beautify());
    }

    #[test]
    fn test_from_properties_rejects_bad_values() {
        assert!(SqlHelperConfig::from_properties(&props(&[("logLevel", "loud")])).is_err());
        assert!(SqlHelperConfig::from_properties(&props(&[("slowQueryThreshold", "-1")])).is_err());
    }

    #[test]
    fn test_from_json() {
        let cfg = SqlHelperConfig::from_json(r#"{"exclude_pattern": "Audit.*", "log_level": "WARN"}"#).unwrap();
        assert_eq!(cfg.exclude_pattern(), Some("Audit.*"));
        assert_eq!(cfg.log_level(), LogLevel::Warn);
        assert!(cfg.beautify());

        let err = SqlHelperConfig::from_json(r#"{"log_level": "LOUD"}"#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_huge_threshold_saturates() {
        let cfg = SqlHelperConfig::new().set_slow_query_threshold(Duration::MAX);
        assert_eq!(cfg.slow_query_threshold(), Some(Duration::from_millis(u64::MAX)));
    }

    #[test]
    fn test_blank_pattern_is_unset() {
        let cfg = SqlHelperConfig::new().set_exclude_pattern("   ");
        assert_eq!(cfg.exclude_pattern(), None);
    }
}
