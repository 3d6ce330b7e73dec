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

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use criterion::{criterion_group, criterion_main, Criterion};
use sqlhelper::prelude::*;
use sqlhelper::{beautify_sql, TypeClassCache};

#[derive(Properties)]
struct Order {
    id: i64,
    customer: String,
    amount: f64,
    status: u8,
}

fn mapped_statement(width: usize) -> BoundSql {
    let columns: Vec<String> = (0..width).map(|i| format!("c{}", i)).collect();
    let sql = format!(
        "INSERT INTO wide ({})\n  VALUES ({})",
        columns.join(", "),
        vec!["?"; width].join(", ")
    );
    let mut params = IndexMap::new();
    let mut mappings = Vec::with_capacity(width);
    for (i, column) in columns.iter().enumerate() {
        if i % 2 == 0 {
            params.insert(column.clone(), SqlValue::Bigint(i as i64));
            mappings.push(ParameterMapping::typed::<i64>(column));
        } else {
            params.insert(column.clone(), SqlValue::Text(format!("value-{}", i)));
            mappings.push(ParameterMapping::typed::<String>(column));
        }
    }
    BoundSql::new(sql, mappings, ParameterObject::map(params))
}

pub fn bench_format_sql(c: &mut Criterion) {
    let formatter = SqlFormatter::new(Arc::new(TypeClassCache::new()));

    let mut group = c.benchmark_group("format_sql");
    group.measurement_time(Duration::from_secs(5));

    for width in [4usize, 32, 128] {
        let bound = mapped_statement(width);
        group.bench_function(format!("map_{}", width), |b| {
            b.iter(|| black_box(formatter.format_sql(black_box(&bound))));
        });
    }

    let bound = BoundSql::new(
        "UPDATE orders SET customer = ?, amount = ?, status = ? WHERE id = ?",
        vec![
            ParameterMapping::typed::<String>("customer"),
            ParameterMapping::typed::<f64>("amount"),
            ParameterMapping::typed::<u8>("status"),
            ParameterMapping::typed::<i64>("id"),
        ],
        ParameterObject::object(Order { id: 1, customer: "ACME".to_string(), amount: 12.5, status: 2 }),
    );
    group.bench_function("object", |b| {
        b.iter(|| black_box(formatter.format_sql(black_box(&bound))));
    });

    let raw = mapped_statement(32);
    group.bench_function("beautify", |b| {
        b.iter(|| black_box(beautify_sql(black_box(raw.sql()))));
    });

    group.finish();
}

criterion_group!(benches, bench_format_sql);
criterion_main!(benches);
