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

//!
//! Shared fixtures.
//!
#![allow(dead_code)]

use chrono::NaiveDate;
use sqlhelper::prelude::*;

#[derive(Properties, Clone, Default)]
pub struct Dept {
    pub id: i64,
    pub name: String,
}

#[derive(Properties, Clone, Default)]
pub struct User {
    pub id: i64,
    #[property(name = "userName")]
    pub name: String,
    pub birthday: Option<NaiveDate>,
    /// 状态
    pub status: u8,
    #[property(skip)]
    pub password: String,
    #[property(nested)]
    pub dept: Dept,
}

pub fn user() -> User {
    User {
        id: 7,
        name: "Bob".to_string(),
        birthday: NaiveDate::from_ymd_opt(1990, 5, 17),
        status: 1,
        password: "secret".to_string(),
        dept: Dept { id: 3, name: "R&D".to_string() },
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
