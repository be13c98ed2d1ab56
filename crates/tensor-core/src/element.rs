// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scalar element trait shared by every kernel.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg};

use crate::{DType, Storage};

/// A floating-point scalar that can live inside a [`crate::Tensor`].
///
/// Implemented for `f32` and `f64`. Kernels are written once against this
/// trait and monomorphised per [`DType`].
pub trait Element:
    Copy
    + PartialOrd
    + fmt::Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// The runtime tag matching this type.
    const DTYPE: DType;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// `e^self`, evaluated in this precision.
    fn exp(self) -> Self;

    /// Lossy conversion from `f64` (rounds to nearest for `f32`).
    fn from_f64(value: f64) -> Self;

    /// Widening conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Borrows the typed buffer out of `storage`, if it holds this type.
    fn slice(storage: &Storage) -> Option<&[Self]>;

    /// Mutably borrows the typed buffer out of `storage`, if it holds this type.
    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]>;

    /// Wraps a typed buffer into [`Storage`].
    fn into_storage(values: Vec<Self>) -> Storage;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn exp(self) -> Self {
        f32::exp(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn slice(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F32(v) => Some(v),
            Storage::F64(_) => None,
        }
    }

    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::F32(v) => Some(v),
            Storage::F64(_) => None,
        }
    }

    fn into_storage(values: Vec<Self>) -> Storage {
        Storage::F32(values)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    fn slice(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F64(v) => Some(v),
            Storage::F32(_) => None,
        }
    }

    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::F64(v) => Some(v),
            Storage::F32(_) => None,
        }
    }

    fn into_storage(values: Vec<Self>) -> Storage {
        Storage::F64(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
    }

    #[test]
    fn test_storage_access_is_type_checked() {
        let storage = f32::into_storage(vec![1.0, 2.0]);
        assert_eq!(f32::slice(&storage), Some(&[1.0f32, 2.0][..]));
        assert!(f64::slice(&storage).is_none());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f32 as Element>::from_f64(0.5), 0.5f32);
        assert_eq!(Element::to_f64(0.25f32), 0.25f64);
        assert!((Element::exp(1.0f64) - std::f64::consts::E).abs() < 1e-12);
    }
}
