// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the zoom field path.
//!
//! Measures the work done on every keystroke:
//! - Parsing the typed percentage
//! - Pushing it into the debounced value and settling it

use criterion::{criterion_group, criterion_main, Criterion};
use iced_pager::ui::state::zoom::{parse_float, ZoomState};
use std::hint::black_box;

fn bench_parse_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_input");

    for input in ["150", "  12.5%", "1e2", "abc"] {
        group.bench_function(format!("parse_float/{input}"), |b| {
            b.iter(|| black_box(parse_float(black_box(input))));
        });
    }

    group.finish();
}

/// Typing "125" one character at a time, then settling the last window.
fn bench_type_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_input");

    group.bench_function("type_and_settle", |b| {
        b.iter(|| {
            let mut zoom = ZoomState::default();
            let mut ticket = None;
            for text in ["1", "12", "125"] {
                ticket = Some(zoom.on_zoom_input_changed(text.to_string()));
            }
            if let Some(ticket) = ticket {
                black_box(zoom.on_zoom_input_settled(ticket));
            }
            black_box(zoom.scale);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_float, bench_type_and_settle);
criterion_main!(benches);
