// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Dense tensor types consumed and produced by the elementwise kernel library.
//!
//! This crate provides:
//! - [`Tensor`]: an owned, n-dimensional, row-major tensor of `f32` or `f64`.
//! - [`TensorView`]: a borrowed, read-only view handed to kernels.
//! - [`Shape`]: dimension descriptors with stride computation.
//! - [`DType`]: supported element data types (f32, f64).
//! - [`Element`]: the scalar trait kernels are generic over.
//!
//! # Design Goals
//! - Inputs are never mutated; kernels read views and allocate outputs.
//! - Typed storage, so slices are always correctly aligned.
//! - Clean error types via `thiserror`.

mod dtype;
mod element;
mod error;
mod shape;
mod tensor;

pub use dtype::DType;
pub use element::Element;
pub use error::TensorError;
pub use shape::Shape;
pub use tensor::{Storage, Tensor, TensorView};
