// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON tensor files.
//!
//! ```json
//! { "shape": [2, 2], "dtype": "f32", "data": [1.0, -2.0, 3.0, -4.0] }
//! ```

use std::path::Path;

use anyhow::Context;
use tensor_core::{DType, Shape, Tensor};

/// Serialised form of a [`Tensor`]; values are stored as `f64` regardless of dtype.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TensorFile {
    pub shape: Shape,
    #[serde(default = "default_dtype")]
    pub dtype: DType,
    pub data: Vec<f64>,
}

fn default_dtype() -> DType {
    DType::F32
}

impl TensorFile {
    /// Reads a tensor file from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read tensor '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid tensor JSON in '{}'", path.display()))
    }

    /// Writes the file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("cannot write tensor '{}'", path.display()))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_tensor(tensor: &Tensor) -> Self {
        Self {
            shape: tensor.shape().clone(),
            dtype: tensor.dtype(),
            data: tensor.to_f64_vec(),
        }
    }

    pub fn into_tensor(self) -> anyhow::Result<Tensor> {
        Ok(Tensor::from_f64_values(self.shape, self.dtype, self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_defaults_to_f32() {
        let file: TensorFile = serde_json::from_str(r#"{"shape": [2], "data": [1.0, 2.0]}"#).unwrap();
        let tensor = file.into_tensor().unwrap();
        assert_eq!(tensor.dtype(), DType::F32);
        assert_eq!(tensor.as_f32_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        let tensor = Tensor::from_f64(Shape::matrix(1, 2), &[0.5, -0.25]).unwrap();
        TensorFile::from_tensor(&tensor).save(&path).unwrap();
        let loaded = TensorFile::load(&path).unwrap().into_tensor().unwrap();
        assert_eq!(loaded, tensor);
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let file: TensorFile =
            serde_json::from_str(r#"{"shape": [4294967296, 4294967296], "data": []}"#).unwrap();
        let err = file.into_tensor().unwrap_err();
        assert!(err.to_string().contains("element count overflows"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let file = TensorFile {
            shape: Shape::vector(3),
            dtype: DType::F64,
            data: vec![1.0],
        };
        assert!(file.into_tensor().is_err());
    }
}
