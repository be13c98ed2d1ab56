// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parametric ReLU with a learned per-channel negative slope.
//!
//! See He et al., "Delving Deep into Rectifiers" (arXiv:1502.01852).

use tensor_core::{DType, Element, Shape, Tensor, TensorError, TensorView};

use super::leaky_relu_op::leaky_relu_scalar;
use super::{check_output, map_indexed};

const OP: &str = "prelu";

/// Rank the input of [`prelu`] must have.
const INPUT_RANK: usize = 4;

/// Validates [`prelu`] arguments and returns the output shape.
///
/// Checks, in order: input rank is 4, slope rank is 1, `axis < 4`, and the
/// slope length equals the input extent along `axis`.
pub fn prelu_output_shape(input: &Shape, slope: &Shape, axis: usize) -> Result<Shape, TensorError> {
    input.validate()?;
    if input.rank() != INPUT_RANK {
        return Err(TensorError::RankMismatch {
            op: OP,
            operand: "input",
            expected: INPUT_RANK,
            actual: input.rank(),
        });
    }
    if slope.rank() != 1 {
        return Err(TensorError::RankMismatch {
            op: OP,
            operand: "slope",
            expected: 1,
            actual: slope.rank(),
        });
    }
    let channels = input.dim(axis).ok_or(TensorError::AxisOutOfRange {
        op: OP,
        axis: axis as isize,
        rank: input.rank(),
    })?;
    let slope_len = slope.dims()[0];
    if slope_len != channels {
        return Err(TensorError::SlopeSizeMismatch {
            op: OP,
            expected: channels,
            actual: slope_len,
        });
    }
    Ok(input.clone())
}

/// Applies `x > 0 ? x : x * slope[c]` where `c` is the index of each element
/// along `axis`, and returns a new tensor.
///
/// `axis` is 1 (NCHW channels) in the common case.
///
/// # Errors
/// Any violated precondition of [`prelu_output_shape`], or
/// [`TensorError::DTypeMismatch`] if `slope` and `input` dtypes differ.
/// Nothing is computed when validation fails.
pub fn prelu(
    input: &TensorView<'_>,
    slope: &TensorView<'_>,
    axis: usize,
) -> Result<Tensor, TensorError> {
    let shape = prelu_output_shape(input.shape(), slope.shape(), axis)?;
    let mut output = Tensor::zeros(shape, input.dtype());
    prelu_into(input, slope, axis, &mut output)?;
    Ok(output)
}

/// Applies PReLU into a pre-allocated `output`.
pub fn prelu_into(
    input: &TensorView<'_>,
    slope: &TensorView<'_>,
    axis: usize,
    output: &mut Tensor,
) -> Result<(), TensorError> {
    let shape = prelu_output_shape(input.shape(), slope.shape(), axis)?;
    if slope.dtype() != input.dtype() {
        return Err(TensorError::DTypeMismatch {
            op: OP,
            expected: input.dtype(),
            actual: slope.dtype(),
        });
    }
    check_output(OP, &shape, input.dtype(), output)?;

    let stride = shape.strides()[axis];
    match input.dtype() {
        DType::F32 => prelu_kernel(
            input.as_slice::<f32>()?,
            slope.as_slice::<f32>()?,
            stride,
            output.as_slice_mut::<f32>()?,
        ),
        DType::F64 => prelu_kernel(
            input.as_slice::<f64>()?,
            slope.as_slice::<f64>()?,
            stride,
            output.as_slice_mut::<f64>()?,
        ),
    }
    Ok(())
}

/// Flat index `i` lies in channel `(i / stride) % slope.len()`.
fn prelu_kernel<T: Element>(src: &[T], slope: &[T], stride: usize, dst: &mut [T]) {
    let channels = slope.len();
    map_indexed(src, dst, |i, x| {
        leaky_relu_scalar(x, slope[(i / stride) % channels])
    });
}
