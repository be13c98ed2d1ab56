// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rectified linear unit.

use tensor_core::{DType, Element, Shape, Tensor, TensorError, TensorView};

use super::{check_output, map_indexed};

/// Infers the output shape of [`relu`] (and [`super::leaky_relu`]): the input
/// shape, unchanged.
///
/// # Errors
/// Returns [`TensorError::InvalidShape`] if the input has a zero dimension.
pub fn relu_output_shape(input: &Shape) -> Result<Shape, TensorError> {
    input.validate()?;
    Ok(input.clone())
}

/// Applies `max(x, 0)` element-wise and returns a new tensor of the same
/// shape and dtype.
///
/// NaN inputs stay NaN.
///
/// # Examples
/// ```
/// use activation_kernels::relu;
/// use tensor_core::{Shape, Tensor};
///
/// let x = Tensor::from_f32(Shape::vector(3), &[-2.0, 0.0, 3.0]).unwrap();
/// let y = relu(&x.view()).unwrap();
/// assert_eq!(y.as_f32_slice(), &[0.0, 0.0, 3.0]);
/// ```
pub fn relu(input: &TensorView<'_>) -> Result<Tensor, TensorError> {
    let mut output = Tensor::zeros(relu_output_shape(input.shape())?, input.dtype());
    relu_into(input, &mut output)?;
    Ok(output)
}

/// Applies `max(x, 0)` element-wise into a pre-allocated `output`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if input and output shapes differ,
/// or [`TensorError::DTypeMismatch`] if their dtypes differ.
pub fn relu_into(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), TensorError> {
    let shape = relu_output_shape(input.shape())?;
    check_output("relu", &shape, input.dtype(), output)?;

    match input.dtype() {
        DType::F32 => relu_kernel(input.as_slice::<f32>()?, output.as_slice_mut::<f32>()?),
        DType::F64 => relu_kernel(input.as_slice::<f64>()?, output.as_slice_mut::<f64>()?),
    }
    Ok(())
}

fn relu_kernel<T: Element>(src: &[T], dst: &mut [T]) {
    map_indexed(src, dst, |_, x| relu_scalar(x));
}

#[inline(always)]
pub(crate) fn relu_scalar<T: Element>(x: T) -> T {
    if x < T::ZERO {
        T::ZERO
    } else {
        x
    }
}
