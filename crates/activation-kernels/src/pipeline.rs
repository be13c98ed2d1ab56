// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Activation pipelines loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! name = "gated-block"
//!
//! [[ops]]
//! op = "glu"
//! axis = -1
//!
//! [[ops]]
//! op = "leaky_relu"
//! alpha = 0.01
//! ```

use std::path::Path;
use std::time::Instant;

use tensor_core::{Shape, Tensor, TensorView};

use crate::{Activation, PipelineError};

/// On-disk description of a [`Pipeline`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Human-readable pipeline name, used in logs.
    #[serde(default = "default_name")]
    pub name: String,
    /// Stages, applied in order.
    #[serde(default)]
    pub ops: Vec<Activation>,
}

fn default_name() -> String {
    "pipeline".to_string()
}

impl PipelineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PipelineError> {
        toml::from_str(toml_str)
            .map_err(|e| PipelineError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        toml::to_string_pretty(self)
            .map_err(|e| PipelineError::Config(format!("TOML serialise error: {e}")))
    }
}

/// An ordered chain of activations, each fed the previous stage's output.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    name: String,
    ops: Vec<Activation>,
}

impl Pipeline {
    /// Creates a pipeline from its stages.
    ///
    /// # Errors
    /// Returns [`PipelineError::Empty`] if `ops` is empty.
    pub fn new(name: impl Into<String>, ops: Vec<Activation>) -> Result<Self, PipelineError> {
        let name = name.into();
        if ops.is_empty() {
            return Err(PipelineError::Empty(name));
        }
        Ok(Self { name, ops })
    }

    /// Builds a pipeline from a parsed configuration.
    pub fn from_config(config: PipelineConfig) -> Result<Self, PipelineError> {
        Self::new(config.name, config.ops)
    }

    /// Returns the pipeline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stages in execution order.
    pub fn ops(&self) -> &[Activation] {
        &self.ops
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Always `false`; construction rejects empty pipelines.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Infers the output shape of every stage for `input`, in order, without
    /// running any kernel.
    pub fn stage_shapes(&self, input: &Shape) -> Result<Vec<Shape>, PipelineError> {
        let mut shapes: Vec<Shape> = Vec::with_capacity(self.ops.len());
        for (index, op) in self.ops.iter().enumerate() {
            let current = shapes.last().unwrap_or(input);
            let next = op.output_shape(current).map_err(|source| PipelineError::Stage {
                index,
                op: op.name(),
                source,
            })?;
            shapes.push(next);
        }
        Ok(shapes)
    }

    /// Infers the final output shape for `input` without running any kernel.
    pub fn output_shape(&self, input: &Shape) -> Result<Shape, PipelineError> {
        let shapes = self.stage_shapes(input)?;
        Ok(shapes.last().cloned().unwrap_or_else(|| input.clone()))
    }

    /// Runs every stage in order and returns the final tensor.
    ///
    /// Shapes are checked for the whole chain before the first kernel runs,
    /// so a failing stage never leaves work half done.
    pub fn run(&self, input: &TensorView<'_>) -> Result<Tensor, PipelineError> {
        let final_shape = self.output_shape(input.shape())?;
        let start = Instant::now();

        let mut current: Option<Tensor> = None;
        for (index, op) in self.ops.iter().enumerate() {
            let stage_start = Instant::now();
            let stage_input = match &current {
                Some(t) => t.view(),
                None => *input,
            };
            let output = op.apply(&stage_input).map_err(|source| PipelineError::Stage {
                index,
                op: op.name(),
                source,
            })?;
            tracing::debug!(
                "stage {index} {} ({}): {} -> {} in {:?}",
                op.name(),
                op.pattern(),
                stage_input.shape(),
                output.shape(),
                stage_start.elapsed(),
            );
            current = Some(output);
        }

        let output = current.ok_or_else(|| PipelineError::Empty(self.name.clone()))?;
        tracing::info!(
            "pipeline '{}': {} stages, {} -> {} in {:?}",
            self.name,
            self.ops.len(),
            input.shape(),
            final_shape,
            start.elapsed(),
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "gated"

[[ops]]
op = "glu"

[[ops]]
op = "leaky_relu"
alpha = 0.5
"#;

    #[test]
    fn test_parse_config() {
        let config = PipelineConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.name, "gated");
        assert_eq!(
            config.ops,
            vec![
                Activation::Glu { axis: -1 },
                Activation::LeakyRelu { alpha: 0.5 }
            ]
        );
    }

    #[test]
    fn test_config_roundtrip() {
        let config = PipelineConfig::from_toml(SAMPLE).unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(PipelineConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_op_is_config_error() {
        let err = PipelineConfig::from_toml("[[ops]]\nop = \"swish\"").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let config = PipelineConfig::from_toml("name = \"nothing\"").unwrap();
        assert!(matches!(
            Pipeline::from_config(config),
            Err(PipelineError::Empty(name)) if name == "nothing"
        ));
    }

    #[test]
    fn test_run_chains_stages() {
        let pipeline = Pipeline::from_config(PipelineConfig::from_toml(SAMPLE).unwrap()).unwrap();
        // glu: [4, -2 | 0, 0] -> [2, -1]; leaky 0.5 -> [2, -0.5].
        let x = Tensor::from_f64(Shape::vector(4), &[4.0, -2.0, 0.0, 0.0]).unwrap();
        let y = pipeline.run(&x.view()).unwrap();
        assert_eq!(y.as_f64_slice(), &[2.0, -0.5]);
    }

    #[test]
    fn test_output_shape_reports_failing_stage() {
        let pipeline = Pipeline::new(
            "double-glu",
            vec![Activation::Glu { axis: -1 }, Activation::Glu { axis: -1 }],
        )
        .unwrap();
        assert_eq!(
            pipeline.output_shape(&Shape::matrix(2, 8)).unwrap(),
            Shape::matrix(2, 2)
        );
        let err = pipeline.output_shape(&Shape::matrix(2, 6)).unwrap_err();
        assert!(matches!(err, PipelineError::Stage { index: 1, op: "glu", .. }));
    }

    #[test]
    fn test_stage_shapes_lists_every_stage() {
        let pipeline = Pipeline::new(
            "glu-relu",
            vec![Activation::Glu { axis: 0 }, Activation::Relu],
        )
        .unwrap();
        assert_eq!(
            pipeline.stage_shapes(&Shape::matrix(4, 3)).unwrap(),
            vec![Shape::matrix(2, 3), Shape::matrix(2, 3)]
        );
        let err = pipeline.stage_shapes(&Shape::matrix(3, 3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "stage 0 (glu) failed: cannot split axis 0 of extent 3 into two equal halves in glu"
        );
    }
}
