// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for activation kernels on both sides of the parallel threshold.

use activation_kernels::{glu, leaky_relu, prelu, relu};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tensor_core::{Shape, Tensor};

/// NCHW sizes: one below the parallel threshold, two above.
const SIZES: [[usize; 4]; 3] = [[1, 8, 16, 16], [1, 64, 32, 32], [8, 64, 56, 56]];

fn ramp(shape: &Shape) -> Tensor {
    let n = shape.num_elements();
    let values: Vec<f32> = (0..n).map(|i| (i % 97) as f32 / 48.0 - 1.0).collect();
    Tensor::from_vec(shape.clone(), values).expect("valid benchmark tensor")
}

fn bench_relu(c: &mut Criterion) {
    let mut group = c.benchmark_group("relu");
    for dims in SIZES {
        let shape = Shape::new(dims.to_vec());
        let x = ramp(&shape);
        group.bench_with_input(BenchmarkId::from_parameter(&shape), &x, |b, x| {
            b.iter(|| relu(black_box(&x.view())))
        });
    }
    group.finish();
}

fn bench_leaky_relu(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaky_relu");
    for dims in SIZES {
        let shape = Shape::new(dims.to_vec());
        let x = ramp(&shape);
        group.bench_with_input(BenchmarkId::from_parameter(&shape), &x, |b, x| {
            b.iter(|| leaky_relu(black_box(&x.view()), 0.01))
        });
    }
    group.finish();
}

fn bench_prelu(c: &mut Criterion) {
    let mut group = c.benchmark_group("prelu");
    for dims in SIZES {
        let shape = Shape::new(dims.to_vec());
        let x = ramp(&shape);
        let slope = Tensor::from_vec(Shape::vector(dims[1]), vec![0.25f32; dims[1]])
            .expect("valid slope");
        group.bench_with_input(BenchmarkId::from_parameter(&shape), &x, |b, x| {
            b.iter(|| prelu(black_box(&x.view()), &slope.view(), 1))
        });
    }
    group.finish();
}

fn bench_glu(c: &mut Criterion) {
    let mut group = c.benchmark_group("glu");
    for dims in SIZES {
        let shape = Shape::new(dims.to_vec());
        let x = ramp(&shape);
        group.bench_with_input(BenchmarkId::from_parameter(&shape), &x, |b, x| {
            b.iter(|| glu(black_box(&x.view()), 1))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_relu, bench_leaky_relu, bench_prelu, bench_glu);
criterion_main!(benches);
