// Copyright (c) 2021 sqlhelper contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! This create offers:
//!
//! *   Reconstruction of an executed SQL statement with its bound parameters inlined;
//! *   A logging interceptor that reports the statement and how long it took;
//! *   Exclusion of statements by id pattern.
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sqlhelper = "0.1.0"
//! ```
//!
//! ## Annotions.
//! * Properties - expose a struct's fields as statement parameters.
//! * name - rename the property. default struct' field name.
//! * skip - hide the field.
//! * nested - resolve dotted paths (`dept.name`) into the field.
//!
//! ## Example
//!
//! ```rust
//! use sqlhelper::*;
//!
//! let bound = BoundSql::new(
//!     "SELECT * FROM t WHERE id = ? AND name = ?",
//!     vec![ParameterMapping::typed::<i64>("id"), ParameterMapping::typed::<String>("name")],
//!     ParameterObject::map(params! { "id" => 7, "name" => "Bob" }),
//! );
//! let cfg = SqlHelperConfig::new().set_exclude_pattern(r"AuditMapper\..*");
//! let interceptor = SqlLogInterceptor::new(cfg).expect("valid pattern");
//! let mut ctx = ExecuteContext::new("UserMapper.selectById", bound);
//! let rows: std::result::Result<u64, String> = interceptor.intercept(&mut ctx, || Ok(1));
//! assert_eq!(rows, Ok(1));
//!
//! let sql = SqlFormatter::default().format_sql(ctx.bound_sql());
//! assert_eq!(sql, "SELECT * FROM t WHERE id = 7 AND name = 'Bob'");
//! ```
//!

#![deny(clippy::all)]

extern crate self as sqlhelper;

mod cache;
mod filter;
mod formatter;
mod config;
mod comm;
mod interceptor;
pub mod prelude;

#[doc(inline)]
pub use sqlhelper_core as core;
#[doc(inline)]
pub use sqlhelper_core::*;
#[doc(inline)]
pub use sqlhelper_derive::*;
#[doc(inline)]
pub use cache::TypeClassCache;
#[doc(inline)]
pub use filter::ExclusionFilter;
#[doc(inline)]
pub use formatter::{beautify_sql, replace_parameter, to_literal, FormatError, SqlFormatter};
#[doc(inline)]
pub use config::SqlHelperConfig;
#[doc(inline)]
pub use comm::ExecuteContext;
#[doc(inline)]
pub use interceptor::{LogLevel, SqlLog, SqlLogInterceptor};
