// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction and kernel validation.

use crate::{DType, Shape};

/// Errors that can occur while building tensors or validating kernel arguments.
///
/// Every kernel precondition maps to exactly one variant so callers can tell
/// which check failed without parsing the message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TensorError {
    /// The provided buffer length does not match the element count of the shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A shape contains a zero-sized dimension.
    #[error("invalid shape {shape}: dimension {axis} is zero")]
    InvalidShape { shape: Shape, axis: usize },

    /// The product of a shape's dimensions does not fit in `usize`.
    #[error("invalid shape {shape}: element count overflows usize")]
    ElementCountOverflow { shape: Shape },

    /// Two tensors have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// An operand does not have the rank the operation requires.
    #[error("rank mismatch in {op} for {operand}: expected {expected}, got {actual}")]
    RankMismatch {
        op: &'static str,
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The requested axis does not name a dimension of the input.
    #[error("axis out of range in {op}: axis {axis} for rank {rank}")]
    AxisOutOfRange {
        op: &'static str,
        axis: isize,
        rank: usize,
    },

    /// A per-channel parameter does not match the channel extent of the input.
    #[error("slope size mismatch in {op}: expected {expected}, got {actual}")]
    SlopeSizeMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An axis that must be split into two equal halves has an odd extent.
    #[error("cannot split axis {axis} of extent {extent} into two equal halves in {op}")]
    OddSplit {
        op: &'static str,
        axis: usize,
        extent: usize,
    },

    /// Operands or output buffers disagree on element type.
    #[error("dtype mismatch in {op}: expected {expected:?}, got {actual:?}")]
    DTypeMismatch {
        op: &'static str,
        expected: DType,
        actual: DType,
    },
}
