//! # PhotonKit
//!
//! Parametric layout generation for photonic integrated-circuit masks.
//!
//! ## Architecture
//!
//! PhotonKit is organized as a workspace with multiple crates:
//!
//! 1. **photonkit-core** - Error taxonomy, unit and angle helpers, material and layer data
//! 2. **photonkit-settings** - Foundry configuration: process layers, materials, component defaults
//! 3. **photonkit-designer** - Curves, paths, patterns, devices and composite components
//! 4. **photonkit** - This facade, re-exporting the crates above
//!
//! ## Features
//!
//! - **Curves**: straights, partial Euler bends, s-bends, bezier s-bends, grating arcs
//! - **Paths**: constant and polynomial-taper widths swept along curves
//! - **Composition**: patterns with named ports, layered devices, port docking
//! - **Components**: directional and tap couplers, crossings, lattices, gratings
//! - **Export**: JSON layout snapshots resolved against a foundry layer table

pub use photonkit_core::data;
pub use photonkit_designer as designer;
pub use photonkit_settings as settings;

pub use photonkit_core::{CommonLayer, Error, LengthUnit, Result};

pub use photonkit_settings::{FoundryConfig, LayerRegistry, ProcessLayerSpec};

pub use photonkit_designer::{
    Array, Bounds, Cross, Curve, Dc, DcParams, Device, FocusingGrating, FocusingGratingParams,
    Grating, Layout, LayoutSnapshot, Pattern, Point, Port, Region, StraightGrating,
    StraightGratingParams, TapDc, WaveguideDevice, Width,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, defaulting to `info`
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!("PhotonKit v{} logging initialized", VERSION);
    Ok(())
}
