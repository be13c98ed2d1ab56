// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Gated Linear Unit.
//!
//! `glu(x) = a * sigmoid(b)` where `a, b` are the two halves of `x` along an
//! axis (Dauphin et al., "Language Modeling with Gated Convolutional
//! Networks", arXiv:1612.08083).

use rayon::prelude::*;
use tensor_core::{DType, Element, Shape, Tensor, TensorError, TensorView};

use super::{check_output, PAR_ELEMENT_THRESHOLD};

const OP: &str = "glu";

/// Resolves a possibly negative `axis` against `rank`.
fn resolve_axis(axis: isize, rank: usize) -> Result<usize, TensorError> {
    let resolved = if axis >= 0 { axis } else { axis + rank as isize };
    if resolved < 0 || resolved as usize >= rank {
        return Err(TensorError::AxisOutOfRange { op: OP, axis, rank });
    }
    Ok(resolved as usize)
}

/// Validates [`glu`] arguments and returns the output shape: the input shape
/// with the extent along `axis` halved.
///
/// Negative `axis` counts from the end (`-1` is the last dimension).
///
/// # Errors
/// - [`TensorError::AxisOutOfRange`] if `axis` does not resolve to a
///   dimension (always the case for a rank-0 input).
/// - [`TensorError::OddSplit`] if the extent along `axis` is odd.
pub fn glu_output_shape(input: &Shape, axis: isize) -> Result<Shape, TensorError> {
    input.validate()?;
    let real_axis = resolve_axis(axis, input.rank())?;
    let extent = input.dims()[real_axis];
    if extent % 2 != 0 {
        return Err(TensorError::OddSplit {
            op: OP,
            axis: real_axis,
            extent,
        });
    }
    Ok(input.with_dim(real_axis, extent / 2))
}

/// Splits `input` into halves `a` and `b` along `axis` and returns
/// `a * sigmoid(b)`.
///
/// # Examples
/// ```
/// use activation_kernels::glu;
/// use tensor_core::{Shape, Tensor};
///
/// let x = Tensor::from_f32(Shape::vector(4), &[1.0, 2.0, 0.0, 0.0]).unwrap();
/// let y = glu(&x.view(), 0).unwrap();
/// assert_eq!(y.as_f32_slice(), &[0.5, 1.0]);
/// ```
pub fn glu(input: &TensorView<'_>, axis: isize) -> Result<Tensor, TensorError> {
    let mut output = Tensor::zeros(glu_output_shape(input.shape(), axis)?, input.dtype());
    glu_into(input, axis, &mut output)?;
    Ok(output)
}

/// Applies GLU into a pre-allocated `output` of the halved shape.
pub fn glu_into(input: &TensorView<'_>, axis: isize, output: &mut Tensor) -> Result<(), TensorError> {
    let shape = glu_output_shape(input.shape(), axis)?;
    check_output(OP, &shape, input.dtype(), output)?;

    let real_axis = resolve_axis(axis, shape.rank())?;
    let half = shape.dims()[real_axis];
    let inner: usize = shape.dims()[real_axis + 1..].iter().product();
    match input.dtype() {
        DType::F32 => glu_kernel(
            input.as_slice::<f32>()?,
            half * inner,
            output.as_slice_mut::<f32>()?,
        ),
        DType::F64 => glu_kernel(
            input.as_slice::<f64>()?,
            half * inner,
            output.as_slice_mut::<f64>()?,
        ),
    }
    Ok(())
}

/// Row-major layout puts every outer index's `a` half and `b` half in two
/// adjacent runs of `block` elements, so each output block is computed from
/// one contiguous input slice of `2 * block`.
fn glu_kernel<T: Element>(src: &[T], block: usize, dst: &mut [T]) {
    if dst.len() >= PAR_ELEMENT_THRESHOLD {
        tracing::trace!(len = dst.len(), block, "glu kernel on rayon pool");
        dst.par_chunks_mut(block)
            .zip(src.par_chunks(2 * block))
            .for_each(|(out, pair)| gate_block(pair, out));
    } else {
        for (out, pair) in dst.chunks_mut(block).zip(src.chunks(2 * block)) {
            gate_block(pair, out);
        }
    }
}

#[inline]
fn gate_block<T: Element>(pair: &[T], out: &mut [T]) {
    let (a, b) = pair.split_at(out.len());
    for ((d, &a), &b) in out.iter_mut().zip(a).zip(b) {
        *d = a * sigmoid(b);
    }
}

/// Logistic sigmoid evaluated without overflowing `exp` for large `|t|`.
#[inline(always)]
pub(crate) fn sigmoid<T: Element>(t: T) -> T {
    if t >= T::ZERO {
        T::ONE / (T::ONE + (-t).exp())
    } else {
        let e = t.exp();
        e / (T::ONE + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_sigmoid_values() {
        assert_eq!(sigmoid(0.0f32), 0.5);
        assert!(approx_eq(sigmoid(2.0f64), 0.8807970779778823, 1e-12));
        assert!(approx_eq(sigmoid(-2.0f64), 0.11920292202211755, 1e-12));
    }

    #[test]
    fn test_sigmoid_saturates_without_nan() {
        assert_eq!(sigmoid(-1000.0f32), 0.0);
        assert_eq!(sigmoid(1000.0f32), 1.0);
        assert!(sigmoid(f64::NAN).is_nan());
    }

    #[test]
    fn test_glu_example() {
        let input = Tensor::from_f32(Shape::vector(4), &[1.0, 2.0, 0.0, 0.0]).unwrap();
        let output = glu(&input.view(), 0).unwrap();
        assert_eq!(output.shape(), &Shape::vector(2));
        assert_eq!(output.as_f32_slice(), &[0.5, 1.0]);
    }

    #[test]
    fn test_glu_default_last_axis() {
        // Rows [a0, a1, b0, b1]; gates of 0 halve a.
        let input =
            Tensor::from_f64(Shape::matrix(2, 4), &[2.0, 4.0, 0.0, 0.0, -6.0, 8.0, 0.0, 0.0])
                .unwrap();
        let output = glu(&input.view(), -1).unwrap();
        assert_eq!(output.shape(), &Shape::matrix(2, 2));
        assert_eq!(output.as_f64_slice(), &[1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn test_glu_middle_axis() {
        // [1, 2, 2]: a = x[:, 0, :], b = x[:, 1, :].
        let input = Tensor::from_f64(Shape::new(vec![1, 2, 2]), &[3.0, 5.0, 0.0, 0.0]).unwrap();
        let output = glu(&input.view(), 1).unwrap();
        assert_eq!(output.shape(), &Shape::new(vec![1, 1, 2]));
        assert_eq!(output.as_f64_slice(), &[1.5, 2.5]);
    }

    #[test]
    fn test_glu_leading_axis() {
        // [2, 3]: a = row 0, b = row 1.
        let input =
            Tensor::from_f64(Shape::matrix(2, 3), &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]).unwrap();
        let output = glu(&input.view(), 0).unwrap();
        assert_eq!(output.shape(), &Shape::matrix(1, 3));
        assert_eq!(output.as_f64_slice(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_glu_odd_extent_rejected() {
        let input = Tensor::zeros(Shape::matrix(2, 3), DType::F32);
        assert_eq!(
            glu(&input.view(), -1).unwrap_err(),
            TensorError::OddSplit {
                op: "glu",
                axis: 1,
                extent: 3
            }
        );
    }

    #[test]
    fn test_glu_axis_out_of_range() {
        let input = Tensor::zeros(Shape::matrix(2, 4), DType::F32);
        assert!(matches!(
            glu(&input.view(), 2),
            Err(TensorError::AxisOutOfRange { axis: 2, rank: 2, .. })
        ));
        assert!(matches!(
            glu(&input.view(), -3),
            Err(TensorError::AxisOutOfRange { axis: -3, .. })
        ));
    }

    #[test]
    fn test_glu_scalar_rejected() {
        let input = Tensor::from_f32(Shape::scalar(), &[1.0]).unwrap();
        assert!(matches!(
            glu(&input.view(), -1),
            Err(TensorError::AxisOutOfRange { rank: 0, .. })
        ));
    }

    #[test]
    fn test_glu_into_wrong_output_shape() {
        let input = Tensor::zeros(Shape::vector(4), DType::F32);
        let mut output = Tensor::zeros(Shape::vector(4), DType::F32);
        assert!(matches!(
            glu_into(&input.view(), 0, &mut output),
            Err(TensorError::ShapeMismatch { op: "glu", .. })
        ));
    }

    #[test]
    fn test_glu_parallel_path() {
        let rows = 4;
        let cols = PAR_ELEMENT_THRESHOLD / 2;
        let mut data = vec![0.0f32; rows * cols];
        for r in 0..rows {
            for c in 0..cols / 2 {
                data[r * cols + c] = (r + 1) as f32;
            }
        }
        let input = Tensor::from_f32(Shape::matrix(rows, cols), &data).unwrap();
        let output = glu(&input.view(), -1).unwrap();
        assert_eq!(output.num_elements(), rows * cols / 2);
        for (i, &y) in output.as_f32_slice().iter().enumerate() {
            let r = i / (cols / 2);
            assert_eq!(y, (r + 1) as f32 * 0.5);
        }
    }
}
