//! PhotonKit Settings Crate
//!
//! Handles foundry configuration (materials, process layers, component
//! defaults) and the layer registry used to resolve device layer tags.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{ComponentDefaults, FoundryConfig, MaterialSpec, ProcessLayerSpec};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use registry::LayerRegistry;
