// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use crate::{DType, Element, Shape, TensorError};

/// Typed, contiguous element buffer backing a [`Tensor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Storage {
    /// Returns the element type held by this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Storage::F32(_) => DType::F32,
            Storage::F64(_) => DType::F64,
        }
    }

    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Storage::F32(v) => v.len(),
            Storage::F64(v) => v.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::F32 => Storage::F32(vec![0.0; len]),
            DType::F64 => Storage::F64(vec![0.0; len]),
        }
    }

    fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Storage::F32(v) => v.iter().map(|&x| x.to_f64()).collect(),
            Storage::F64(v) => v.clone(),
        }
    }
}

/// An owned, n-dimensional tensor stored in contiguous memory.
///
/// `Tensor` is what every kernel returns. Kernels never take a `Tensor` by
/// value; they read a [`TensorView`] and allocate a fresh output.
///
/// # Memory Layout
/// Data is stored in row-major (C) order in a typed buffer.
/// Typed access is provided via [`as_slice`](Tensor::as_slice) and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    storage: Storage,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape, DType};
    /// let t = Tensor::zeros(Shape::matrix(2, 3), DType::F32);
    /// assert_eq!(t.size_bytes(), 24); // 2 * 3 * 4 bytes
    /// ```
    pub fn zeros(shape: Shape, dtype: DType) -> Self {
        let storage = Storage::zeros(dtype, shape.num_elements());
        Self { shape, storage }
    }

    /// Creates a tensor that takes ownership of a typed buffer.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidShape`] if any dimension is zero,
    /// [`TensorError::ElementCountOverflow`] if the element count does not fit
    /// in `usize`, or [`TensorError::BufferSizeMismatch`] if `values.len()`
    /// does not equal `shape.num_elements()`.
    pub fn from_vec<T: Element>(shape: Shape, values: Vec<T>) -> Result<Self, TensorError> {
        shape.validate()?;
        let expected = shape.num_elements();
        if values.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            shape,
            storage: T::into_storage(values),
        })
    }

    /// Creates a tensor from a slice of `f32` values.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::from_f32(Shape::vector(3), &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(t.as_f32_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_f32(shape: Shape, values: &[f32]) -> Result<Self, TensorError> {
        Self::from_vec(shape, values.to_vec())
    }

    /// Creates a tensor from a slice of `f64` values.
    pub fn from_f64(shape: Shape, values: &[f64]) -> Result<Self, TensorError> {
        Self::from_vec(shape, values.to_vec())
    }

    /// Creates a tensor of the given `dtype` from `f64` values, narrowing
    /// when `dtype` is [`DType::F32`].
    pub fn from_f64_values(
        shape: Shape,
        dtype: DType,
        values: Vec<f64>,
    ) -> Result<Self, TensorError> {
        match dtype {
            DType::F64 => Self::from_vec(shape, values),
            DType::F32 => {
                let narrowed: Vec<f32> = values.into_iter().map(|v| v as f32).collect();
                Self::from_vec(shape, narrowed)
            }
        }
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            shape: &self.shape,
            storage: &self.storage,
        }
    }

    /// Returns the number of elements.
    pub fn num_elements(&self) -> usize {
        self.storage.len()
    }

    /// Returns the memory footprint of this tensor's data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.shape.size_bytes(self.dtype())
    }

    /// Borrows the data as a typed slice.
    ///
    /// # Errors
    /// Returns [`TensorError::DTypeMismatch`] if `T` is not the tensor's dtype.
    pub fn as_slice<T: Element>(&self) -> Result<&[T], TensorError> {
        T::slice(&self.storage).ok_or(TensorError::DTypeMismatch {
            op: "as_slice",
            expected: T::DTYPE,
            actual: self.dtype(),
        })
    }

    /// Mutably borrows the data as a typed slice.
    ///
    /// # Errors
    /// Returns [`TensorError::DTypeMismatch`] if `T` is not the tensor's dtype.
    pub fn as_slice_mut<T: Element>(&mut self) -> Result<&mut [T], TensorError> {
        let actual = self.dtype();
        T::slice_mut(&mut self.storage).ok_or(TensorError::DTypeMismatch {
            op: "as_slice_mut",
            expected: T::DTYPE,
            actual,
        })
    }

    /// Interprets the buffer as a slice of `f32`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::F32`.
    pub fn as_f32_slice(&self) -> &[f32] {
        match &self.storage {
            Storage::F32(v) => v,
            Storage::F64(_) => panic!("as_f32_slice called on {:?} tensor", self.dtype()),
        }
    }

    /// Interprets the buffer as a slice of `f64`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::F64`.
    pub fn as_f64_slice(&self) -> &[f64] {
        match &self.storage {
            Storage::F64(v) => v,
            Storage::F32(_) => panic!("as_f64_slice called on {:?} tensor", self.dtype()),
        }
    }

    /// Copies the data out as `f64`, widening `f32` elements.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.storage.to_f64_vec()
    }
}

/// A borrowed, read-only view over a [`Tensor`]'s data.
///
/// Views are zero-copy and tied to the lifetime of the source tensor,
/// enforced by the borrow checker. Views are `Send + Sync`, so one input
/// can feed concurrent kernel calls.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    shape: &'a Shape,
    storage: &'a Storage,
}

impl<'a> TensorView<'a> {
    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Returns the data type of the viewed tensor.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Borrows the data as a typed slice.
    ///
    /// # Errors
    /// Returns [`TensorError::DTypeMismatch`] if `T` is not the view's dtype.
    pub fn as_slice<T: Element>(&self) -> Result<&'a [T], TensorError> {
        T::slice(self.storage).ok_or(TensorError::DTypeMismatch {
            op: "as_slice",
            expected: T::DTYPE,
            actual: self.dtype(),
        })
    }

    /// Copies the data out as `f64`, widening `f32` elements.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.storage.to_f64_vec()
    }

    /// Copies the viewed data into a new owned tensor.
    pub fn to_tensor(&self) -> Tensor {
        Tensor {
            shape: self.shape.clone(),
            storage: self.storage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let t = Tensor::zeros(Shape::matrix(2, 3), DType::F32);
        assert_eq!(t.size_bytes(), 24);
        assert_eq!(t.shape(), &Shape::matrix(2, 3));
        assert_eq!(t.dtype(), DType::F32);
        assert!(t.as_f32_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_f32() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let t = Tensor::from_f32(Shape::matrix(2, 3), &data).unwrap();
        assert_eq!(t.as_f32_slice(), &data);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let result = Tensor::from_vec(Shape::matrix(2, 3), vec![0.0f64; 5]);
        assert_eq!(
            result.unwrap_err(),
            TensorError::BufferSizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_from_vec_rejects_zero_dim() {
        let result = Tensor::from_vec::<f32>(Shape::new(vec![3, 0]), vec![]);
        assert!(matches!(result, Err(TensorError::InvalidShape { axis: 1, .. })));
    }

    #[test]
    fn test_typed_access_checks_dtype() {
        let t = Tensor::from_f64(Shape::vector(2), &[1.0, 2.0]).unwrap();
        assert_eq!(t.as_slice::<f64>().unwrap(), &[1.0, 2.0]);
        assert!(matches!(
            t.as_slice::<f32>(),
            Err(TensorError::DTypeMismatch {
                expected: DType::F32,
                actual: DType::F64,
                ..
            })
        ));
    }

    #[test]
    fn test_from_f64_values_narrows() {
        let t = Tensor::from_f64_values(Shape::vector(2), DType::F32, vec![0.5, -1.5]).unwrap();
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.as_f32_slice(), &[0.5, -1.5]);
        assert_eq!(t.to_f64_vec(), vec![0.5, -1.5]);
    }

    #[test]
    fn test_view_lifetime() {
        let t = Tensor::from_f32(Shape::vector(4), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = t.view();
        assert_eq!(v.shape(), &Shape::vector(4));
        assert_eq!(v.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.to_tensor(), t);
    }

    #[test]
    fn test_from_vec_rejects_element_count_overflow() {
        let result = Tensor::from_f32(Shape::new(vec![1 << 32, 1 << 32]), &[]);
        assert!(matches!(
            result,
            Err(TensorError::ElementCountOverflow { .. })
        ));
    }

    #[test]
    fn test_as_slice_mut() {
        let mut t = Tensor::zeros(Shape::vector(3), DType::F64);
        let slice = t.as_slice_mut::<f64>().unwrap();
        slice[0] = 10.0;
        slice[2] = 30.0;
        assert_eq!(t.as_f64_slice(), &[10.0, 0.0, 30.0]);
    }
}
