// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # activation-kernels
//!
//! Pure elementwise and broadcast activation kernels over dense tensors.
//!
//! This crate provides:
//! - [`relu`] and [`leaky_relu`]: elementwise, shape-preserving, total.
//! - [`prelu`]: per-channel slope broadcast over a 4-D input.
//! - [`glu`]: gated linear unit, halving one axis.
//! - Shape inference for each kernel, usable without any data.
//! - [`Activation`]: a serialisable operator descriptor, and [`Pipeline`]
//!   to chain descriptors loaded from TOML.
//!
//! Every kernel reads a [`TensorView`](tensor_core::TensorView) and returns a
//! freshly allocated [`Tensor`](tensor_core::Tensor); the `*_into` variants
//! write into a caller-provided output instead. Large outputs are split across
//! the `rayon` thread pool.

mod activation;
mod error;
mod ops;
mod pattern;
mod pipeline;

pub use activation::Activation;
pub use error::PipelineError;
pub use ops::{
    glu, glu_into, glu_output_shape, leaky_relu, leaky_relu_into, prelu, prelu_into,
    prelu_output_shape, relu, relu_into, relu_output_shape, PAR_ELEMENT_THRESHOLD,
};
pub use pattern::OpPattern;
pub use pipeline::{Pipeline, PipelineConfig};
