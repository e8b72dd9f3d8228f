//! Layer registry lookup
//!
//! Layer tags on devices are opaque strings. A registry resolves them to the
//! physical process layer when a layout is handed to an exporter.

use photonkit_core::Result;

use crate::config::{FoundryConfig, ProcessLayerSpec};

/// Resolves layer names to process layers
pub trait LayerRegistry {
    /// Look up a layer, failing with `LookupError::UnknownLayer`
    fn process_layer(&self, name: &str) -> Result<&ProcessLayerSpec>;

    /// Whether the registry knows the layer
    fn contains_layer(&self, name: &str) -> bool {
        self.process_layer(name).is_ok()
    }
}

impl LayerRegistry for FoundryConfig {
    fn process_layer(&self, name: &str) -> Result<&ProcessLayerSpec> {
        FoundryConfig::process_layer(self, name)
    }
}
