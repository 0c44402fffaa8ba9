//! Shape configuration and generator dispatch.

use crate::branch::{BranchConfig, BranchGenerator};
use crate::leaf::{LeafConfig, LeafGenerator};
use crate::path::ShapePath;
use crate::spiral::{SpiralConfig, SpiralGenerator};
use crate::vesica::{VesicaConfig, VesicaGenerator};
use phikit_core::{GeometryError, GeometryResult, GoldenConstants};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common interface of every shape generator.
pub trait ShapeGenerator {
    fn name(&self) -> &'static str;

    /// Build the shape. Identical configuration yields identical output.
    fn generate(&self) -> GeometryResult<ShapePath>;
}

/// Kinds of shapes the engine can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Spiral,
    Leaf,
    Branch,
    Vesica,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Spiral => write!(f, "spiral"),
            ShapeType::Leaf => write!(f, "leaf"),
            ShapeType::Branch => write!(f, "branch"),
            ShapeType::Vesica => write!(f, "vesica"),
        }
    }
}

impl FromStr for ShapeType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spiral" => Ok(ShapeType::Spiral),
            "leaf" => Ok(ShapeType::Leaf),
            "branch" => Ok(ShapeType::Branch),
            "vesica" | "vesica_piscis" => Ok(ShapeType::Vesica),
            _ => Err(GeometryError::invalid_parameter(
                "shape",
                format!("unknown shape '{}'", s),
            )),
        }
    }
}

/// Per-generator parameter bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ShapeConfig {
    Spiral(SpiralConfig),
    Leaf(LeafConfig),
    Branch(BranchConfig),
    Vesica(VesicaConfig),
}

impl ShapeConfig {
    /// Default configuration for a shape kind.
    pub fn default_for(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Spiral => ShapeConfig::Spiral(SpiralConfig::default()),
            ShapeType::Leaf => ShapeConfig::Leaf(LeafConfig::default()),
            ShapeType::Branch => ShapeConfig::Branch(BranchConfig::default()),
            ShapeType::Vesica => ShapeConfig::Vesica(VesicaConfig::default()),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeConfig::Spiral(_) => ShapeType::Spiral,
            ShapeConfig::Leaf(_) => ShapeType::Leaf,
            ShapeConfig::Branch(_) => ShapeType::Branch,
            ShapeConfig::Vesica(_) => ShapeType::Vesica,
        }
    }

    pub fn validate(&self) -> GeometryResult<()> {
        match self {
            ShapeConfig::Spiral(c) => c.validate(),
            ShapeConfig::Leaf(c) => c.validate(),
            ShapeConfig::Branch(c) => c.validate(),
            ShapeConfig::Vesica(c) => c.validate(),
        }
    }
}

/// A validated generator for any shape kind.
#[derive(Debug, Clone)]
pub enum Shape {
    Spiral(SpiralGenerator),
    Leaf(LeafGenerator),
    Branch(BranchGenerator),
    Vesica(VesicaGenerator),
}

impl Shape {
    pub fn from_config(config: ShapeConfig, constants: GoldenConstants) -> GeometryResult<Self> {
        Ok(match config {
            ShapeConfig::Spiral(c) => Shape::Spiral(SpiralGenerator::new(c)?.with_constants(constants)),
            ShapeConfig::Leaf(c) => Shape::Leaf(LeafGenerator::new(c)?.with_constants(constants)),
            ShapeConfig::Branch(c) => Shape::Branch(BranchGenerator::new(c)?.with_constants(constants)),
            ShapeConfig::Vesica(c) => Shape::Vesica(VesicaGenerator::new(c)?.with_constants(constants)),
        })
    }
}

impl ShapeGenerator for Shape {
    fn name(&self) -> &'static str {
        match self {
            Shape::Spiral(s) => ShapeGenerator::name(s),
            Shape::Leaf(s) => ShapeGenerator::name(s),
            Shape::Branch(s) => ShapeGenerator::name(s),
            Shape::Vesica(s) => ShapeGenerator::name(s),
        }
    }

    fn generate(&self) -> GeometryResult<ShapePath> {
        match self {
            Shape::Spiral(s) => s.generate(),
            Shape::Leaf(s) => s.generate(),
            Shape::Branch(s) => s.generate(),
            Shape::Vesica(s) => s.generate(),
        }
    }
}

/// Validate `config` and run its generator with the standard constants.
pub fn generate_shape(config: &ShapeConfig) -> GeometryResult<ShapePath> {
    let shape = Shape::from_config(config.clone(), GoldenConstants::default()).inspect_err(|e| {
        tracing::warn!("Rejected {} configuration: {}", config.shape_type(), e);
    })?;
    shape.generate()
}
