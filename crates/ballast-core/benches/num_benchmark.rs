// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use ballast_core::num::cast::{can_represent, try_numeric_cast};
use ballast_core::num::ops::clamp::clamp;
use ballast_core::num::pow2::next_power_of_two;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_can_represent(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_represent");

    group.bench_function("i32_to_i8", |b| {
        b.iter(|| {
            for v in -512i32..512 {
                black_box(can_represent::<i8, _>(black_box(v)));
            }
        })
    });

    group.bench_function("f64_to_i32", |b| {
        b.iter(|| {
            let mut v = -1024.5f64;
            while v < 1024.0 {
                black_box(can_represent::<i32, _>(black_box(v)));
                v += 1.0;
            }
        })
    });

    group.finish();
}

fn bench_try_numeric_cast(c: &mut Criterion) {
    c.bench_function("try_numeric_cast/i64_to_u16", |b| {
        b.iter(|| {
            for v in -512i64..70_000 {
                black_box(try_numeric_cast::<u16, _>(black_box(v)));
            }
        })
    });
}

fn bench_next_power_of_two(c: &mut Criterion) {
    c.bench_function("next_power_of_two/u32_sweep", |b| {
        b.iter(|| {
            for v in 0u32..4096 {
                black_box(next_power_of_two(black_box(v)));
            }
        })
    });
}

fn bench_clamp(c: &mut Criterion) {
    c.bench_function("clamp/i64_sweep", |b| {
        b.iter(|| {
            for v in -2048i64..2048 {
                black_box(clamp(black_box(v), -1024, 1024));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_can_represent,
    bench_try_numeric_cast,
    bench_next_power_of_two,
    bench_clamp
);
criterion_main!(benches);
