//! Application-level output types for the root crate

use anyhow::Context;
use phikit_geometry::{generate_shape, GoldenRectangle, ScaleStep, ShapePath, ShapeType};
use phikit_settings::{Config, LayoutSettings};
use serde::Serialize;

/// One row of the spacing table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingEntry {
    pub step: ScaleStep,
    pub spacing: f64,
}

/// Layout metrics derived from the configured scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub golden_rectangle: GoldenRectangle,
    pub spacing: Vec<SpacingEntry>,
}

impl LayoutReport {
    pub fn from_settings(settings: &LayoutSettings) -> anyhow::Result<Self> {
        let golden_rectangle =
            GoldenRectangle::from_side(settings.golden_side, settings.side_is_width)
                .context("Failed to derive golden rectangle")?;
        let spacing = settings
            .scale
            .table()
            .context("Failed to build spacing table")?
            .into_iter()
            .map(|(step, spacing)| SpacingEntry { step, spacing })
            .collect();
        Ok(Self {
            golden_rectangle,
            spacing,
        })
    }
}

/// Run the configured generator for `shape_type`.
pub fn render_shape(config: &Config, shape_type: ShapeType) -> anyhow::Result<ShapePath> {
    let shape = generate_shape(&config.shape_config(shape_type))
        .with_context(|| format!("Failed to generate {}", shape_type))?;
    tracing::info!(
        "Generated {} with {} elements",
        shape_type,
        shape.elements.len()
    );
    Ok(shape)
}
