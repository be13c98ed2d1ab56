// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewk apply` command: run a pipeline over a tensor file.

use std::path::PathBuf;

use anyhow::Context;

use crate::tensor_file::TensorFile;

pub fn execute(pipeline: PathBuf, input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let pipeline = super::load_pipeline(&pipeline)?;
    let tensor = TensorFile::load(&input)?.into_tensor()?;
    tracing::info!(
        "input '{}': {} {} ({:.1} KB)",
        input.display(),
        tensor.dtype(),
        tensor.shape(),
        tensor.size_bytes() as f64 / 1024.0,
    );

    let result = pipeline
        .run(&tensor.view())
        .with_context(|| format!("pipeline '{}' failed", pipeline.name()))?;

    let file = TensorFile::from_tensor(&result);
    match output {
        Some(path) => {
            file.save(&path)?;
            tracing::info!("wrote {} to '{}'", result.shape(), path.display());
        }
        None => println!("{}", file.to_json()?),
    }
    Ok(())
}
