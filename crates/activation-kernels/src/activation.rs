// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Serialisable activation descriptors.
//!
//! # TOML Format
//! ```toml
//! op = "leaky_relu"
//! alpha = 0.1
//! ```

use tensor_core::{Shape, Tensor, TensorError, TensorView};

use crate::ops;
use crate::OpPattern;

/// One activation operator together with its parameters.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Activation {
    /// `max(x, 0)`.
    Relu,
    /// `x > 0 ? x : alpha * x`.
    LeakyRelu { alpha: f64 },
    /// Per-channel slope along `axis` of a 4-D input.
    Prelu {
        slope: Vec<f64>,
        #[serde(default = "default_prelu_axis")]
        axis: usize,
    },
    /// Gated linear unit split along `axis` (negative counts from the end).
    Glu {
        #[serde(default = "default_glu_axis")]
        axis: isize,
    },
}

fn default_prelu_axis() -> usize {
    1
}

fn default_glu_axis() -> isize {
    -1
}

impl Activation {
    /// Returns the operator name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Relu => "relu",
            Activation::LeakyRelu { .. } => "leaky_relu",
            Activation::Prelu { .. } => "prelu",
            Activation::Glu { .. } => "glu",
        }
    }

    /// Returns the fusion pattern of this operator.
    pub fn pattern(&self) -> OpPattern {
        match self {
            Activation::Relu | Activation::LeakyRelu { .. } => OpPattern::ElemWise,
            Activation::Prelu { .. } => OpPattern::Broadcast,
            Activation::Glu { .. } => OpPattern::Injective,
        }
    }

    /// Infers the output shape for an input of shape `input` without
    /// touching any data.
    pub fn output_shape(&self, input: &Shape) -> Result<Shape, TensorError> {
        match self {
            Activation::Relu | Activation::LeakyRelu { .. } => ops::relu_output_shape(input),
            Activation::Prelu { slope, axis } => {
                ops::prelu_output_shape(input, &Shape::vector(slope.len()), *axis)
            }
            Activation::Glu { axis } => ops::glu_output_shape(input, *axis),
        }
    }

    /// Runs the operator on `input`.
    ///
    /// A PReLU slope is materialised in the input's dtype once its length has
    /// been checked against the channel extent.
    pub fn apply(&self, input: &TensorView<'_>) -> Result<Tensor, TensorError> {
        match self {
            Activation::Relu => ops::relu(input),
            Activation::LeakyRelu { alpha } => ops::leaky_relu(input, *alpha),
            Activation::Prelu { slope, axis } => {
                ops::prelu_output_shape(input.shape(), &Shape::vector(slope.len()), *axis)?;
                let slope = Tensor::from_f64_values(
                    Shape::vector(slope.len()),
                    input.dtype(),
                    slope.clone(),
                )?;
                ops::prelu(input, &slope.view(), *axis)
            }
            Activation::Glu { axis } => ops::glu(input, *axis),
        }
    }
}
