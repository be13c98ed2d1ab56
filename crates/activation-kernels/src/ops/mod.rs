// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Activation kernels.
//!
//! Each operation validates its arguments, infers the output shape, then runs
//! a kernel generic over [`Element`]. Outputs at or above
//! [`PAR_ELEMENT_THRESHOLD`] elements are computed on the `rayon` pool; every
//! output element depends only on its own inputs, so no synchronisation is
//! needed beyond the final write.

mod glu_op;
mod leaky_relu_op;
mod prelu_op;
mod relu_op;

pub use glu_op::{glu, glu_into, glu_output_shape};
pub use leaky_relu_op::{leaky_relu, leaky_relu_into};
pub use prelu_op::{prelu, prelu_into, prelu_output_shape};
pub use relu_op::{relu, relu_into, relu_output_shape};

use rayon::prelude::*;
use tensor_core::{DType, Element, Shape, Tensor, TensorError};

/// Minimum number of output elements before kernels go parallel.
pub const PAR_ELEMENT_THRESHOLD: usize = 1 << 15;

/// Writes `f(i, src[i])` into `dst[i]` for every flat index `i`.
#[inline]
pub(crate) fn map_indexed<T, F>(src: &[T], dst: &mut [T], f: F)
where
    T: Element,
    F: Fn(usize, T) -> T + Sync + Send,
{
    debug_assert_eq!(src.len(), dst.len());
    if dst.len() >= PAR_ELEMENT_THRESHOLD {
        tracing::trace!(len = dst.len(), "elementwise kernel on rayon pool");
        dst.par_iter_mut()
            .zip(src.par_iter())
            .enumerate()
            .for_each(|(i, (d, &x))| *d = f(i, x));
    } else {
        for (i, (d, &x)) in dst.iter_mut().zip(src.iter()).enumerate() {
            *d = f(i, x);
        }
    }
}

/// Checks that a caller-provided output matches the inferred shape and dtype.
pub(crate) fn check_output(
    op: &'static str,
    expected_shape: &Shape,
    expected_dtype: DType,
    output: &Tensor,
) -> Result<(), TensorError> {
    if output.shape() != expected_shape {
        return Err(TensorError::ShapeMismatch {
            op,
            lhs: expected_shape.clone(),
            rhs: output.shape().clone(),
        });
    }
    if output.dtype() != expected_dtype {
        return Err(TensorError::DTypeMismatch {
            op,
            expected: expected_dtype,
            actual: output.dtype(),
        });
    }
    Ok(())
}
