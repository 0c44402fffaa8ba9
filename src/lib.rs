//! # PhiKit
//!
//! Golden-ratio geometry engine. Generators turn a small parameter set into
//! resolution-independent path descriptions:
//! - Golden spirals built on a Fibonacci tiling of squares
//! - Bezier leaves with golden-biased veins, and branches carrying them
//! - The vesica piscis with golden-section guides
//! - Golden rectangles and a Fibonacci spacing scale for layout
//!
//! ## Architecture
//!
//! 1. **phikit-core** - PHI constants, the memoized Fibonacci table, points, errors
//! 2. **phikit-geometry** - curve math, shape generators, path assembly, layout
//! 3. **phikit-settings** - configuration file with defaults for every generator
//! 4. **phikit** - command-line binary printing generated paths as JSON

pub mod report;

pub use phikit_core::{
    fibonacci, golden_angle, golden_ratio, golden_ratio_inverse, Error, GeometryError,
    GoldenConstants, Point2D, Result, PHI, PHI_INVERSE,
};
pub use phikit_geometry::{
    generate_shape, golden_rectangle, spacing_for, PathCommand, ShapeConfig, ShapePath,
    ShapeType,
};
pub use phikit_settings::{Config, SettingsManager};
pub use report::{render_shape, LayoutReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Output goes to stderr so it never mixes with JSON on stdout. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
