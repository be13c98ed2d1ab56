// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for activation pipelines.

use tensor_core::TensorError;

/// Errors that can occur while loading or running a [`crate::Pipeline`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The pipeline configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The pipeline has no stages.
    #[error("pipeline '{0}' has no stages")]
    Empty(String),

    /// A stage rejected its input.
    #[error("stage {index} ({op}) failed: {source}")]
    Stage {
        index: usize,
        op: &'static str,
        #[source]
        source: TensorError,
    },
}
