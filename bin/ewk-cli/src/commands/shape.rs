// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewk shape` command: shape inference without data.

use std::path::PathBuf;

use tensor_core::Shape;

pub fn execute(pipeline: PathBuf, shape: String) -> anyhow::Result<()> {
    let pipeline = super::load_pipeline(&pipeline)?;
    let input = parse_shape(&shape)?;

    let shapes = pipeline.stage_shapes(&input)?;
    let mut current = &input;
    for ((index, op), next) in pipeline.ops().iter().enumerate().zip(&shapes) {
        println!("  {index:<3} {:<12} {:<10} {current} -> {next}", op.name(), op.pattern());
        current = next;
    }
    println!("{input} -> {current}");
    Ok(())
}

/// Parses `"2,3,4"` into a shape, rejecting zero or non-numeric extents.
fn parse_shape(s: &str) -> anyhow::Result<Shape> {
    let dims = s
        .split(',')
        .map(|d| {
            d.trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("invalid dimension '{d}': {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let shape = Shape::new(dims);
    shape.validate()?;
    Ok(shape)
}
