// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewk ops` command: list operators.

use activation_kernels::Activation;

pub fn execute() -> anyhow::Result<()> {
    let catalogue = [
        (Activation::Relu, "max(x, 0)"),
        (
            Activation::LeakyRelu { alpha: 0.01 },
            "x > 0 ? x : alpha * x          (alpha)",
        ),
        (
            Activation::Prelu {
                slope: Vec::new(),
                axis: 1,
            },
            "x > 0 ? x : slope[c] * x, 4-D  (slope, axis = 1)",
        ),
        (
            Activation::Glu { axis: -1 },
            "a * sigmoid(b), a|b = halves   (axis = -1)",
        ),
    ];

    println!("  {:<12} {:<10} Definition", "Op", "Pattern");
    println!("  {}", "-".repeat(70));
    for (op, definition) in &catalogue {
        println!("  {:<12} {:<10} {definition}", op.name(), op.pattern().as_str());
    }
    Ok(())
}
