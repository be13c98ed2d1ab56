// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fusion-pattern tags attached to each operator.

use std::fmt;

/// How an operator's output indices relate to its input indices.
///
/// Tags are metadata for an external scheduler deciding what to fuse; they
/// never change a kernel's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpPattern {
    /// Output element `i` depends only on input element `i`.
    #[serde(rename = "elemwise")]
    ElemWise,
    /// Like `ElemWise`, plus a smaller operand replicated along other axes.
    Broadcast,
    /// Each output element reads a fixed set of input elements (gather-free
    /// index remapping).
    Injective,
}

impl OpPattern {
    /// Returns the lowercase tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            OpPattern::ElemWise => "elemwise",
            OpPattern::Broadcast => "broadcast",
            OpPattern::Injective => "injective",
        }
    }
}

impl fmt::Display for OpPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for p in [OpPattern::ElemWise, OpPattern::Broadcast, OpPattern::Injective] {
            let value = toml::Value::try_from(p).unwrap();
            assert_eq!(value.as_str(), Some(p.as_str()));
            assert_eq!(p.to_string(), p.as_str());
        }
    }
}
