// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations.

pub mod apply;
pub mod ops;
pub mod shape;

use std::path::Path;

use activation_kernels::{Pipeline, PipelineConfig};
use anyhow::Context;

/// Installs a `tracing` subscriber whose level follows the `-v` count.
///
/// `RUST_LOG` wins over the flag when it is set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads and validates a pipeline file.
pub fn load_pipeline(path: &Path) -> anyhow::Result<Pipeline> {
    let config = PipelineConfig::from_file(path)?;
    Pipeline::from_config(config)
        .with_context(|| format!("invalid pipeline '{}'", path.display()))
}
