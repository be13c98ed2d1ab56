// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Leaky rectified linear unit.

use tensor_core::{DType, Element, Tensor, TensorError, TensorView};

use super::{check_output, map_indexed, relu_output_shape};

/// Applies `x > 0 ? x : x * alpha` element-wise and returns a new tensor.
///
/// `alpha` is converted to the input's dtype before use. Any sign is
/// accepted; `alpha = 0` reduces to [`super::relu`] and `alpha = 1` to the
/// identity.
pub fn leaky_relu(input: &TensorView<'_>, alpha: f64) -> Result<Tensor, TensorError> {
    let mut output = Tensor::zeros(relu_output_shape(input.shape())?, input.dtype());
    leaky_relu_into(input, alpha, &mut output)?;
    Ok(output)
}

/// Applies leaky ReLU into a pre-allocated `output`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if input and output shapes differ,
/// or [`TensorError::DTypeMismatch`] if their dtypes differ.
pub fn leaky_relu_into(
    input: &TensorView<'_>,
    alpha: f64,
    output: &mut Tensor,
) -> Result<(), TensorError> {
    let shape = relu_output_shape(input.shape())?;
    check_output("leaky_relu", &shape, input.dtype(), output)?;

    match input.dtype() {
        DType::F32 => leaky_relu_kernel(
            input.as_slice::<f32>()?,
            f32::from_f64(alpha),
            output.as_slice_mut::<f32>()?,
        ),
        DType::F64 => leaky_relu_kernel(
            input.as_slice::<f64>()?,
            alpha,
            output.as_slice_mut::<f64>()?,
        ),
    }
    Ok(())
}

fn leaky_relu_kernel<T: Element>(src: &[T], alpha: T, dst: &mut [T]) {
    map_indexed(src, dst, |_, x| leaky_relu_scalar(x, alpha));
}

#[inline(always)]
pub(crate) fn leaky_relu_scalar<T: Element>(x: T, slope: T) -> T {
    if x > T::ZERO {
        x
    } else {
        x * slope
    }
}
