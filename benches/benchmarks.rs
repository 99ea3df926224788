// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use covbadge::{BadgeColor, Threshold, badge_url, classify_coverage};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn benchmark_classify_coverage(c: &mut Criterion) {
    let threshold = Threshold::default();

    c.bench_function("classify_numeric_value", |b| {
        b.iter(|| classify_coverage(black_box("73.5%"), black_box(&threshold), None))
    });

    c.bench_function("classify_malformed_value", |b| {
        b.iter(|| classify_coverage(black_box("not-a-number"), black_box(&threshold), None))
    });

    c.bench_function("classify_with_override", |b| {
        b.iter(|| classify_coverage(black_box("73.5%"), black_box(&threshold), Some("purple")))
    });
}

fn benchmark_badge_url(c: &mut Criterion) {
    let color = BadgeColor::BrightGreen;

    c.bench_function("badge_url_plain", |b| {
        b.iter(|| badge_url(black_box("Coverage"), black_box("85%"), black_box(&color)))
    });

    c.bench_function("badge_url_escaped_label", |b| {
        b.iter(|| {
            badge_url(
                black_box("Line Coverage (unit)"),
                black_box("85.7%"),
                black_box(&color)
            )
        })
    });
}

criterion_group!(benches, benchmark_classify_coverage, benchmark_badge_url);
criterion_main!(benches);
