//! Foundry configuration for PhotonKit
//!
//! Provides configuration file handling for the process stack a layout is
//! generated against. Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Materials (refractive indices)
//! - Process layers (layer name to GDS layer/datatype, material, thickness)
//! - Component defaults (wavelength, waveguide width, bend radius)

use indexmap::IndexMap;
use photonkit_core::data::materials::init_standard_library;
use photonkit_core::{CommonLayer, LengthUnit, LookupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Material entry of a foundry stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Refractive index at the design wavelength
    pub n: f64,
}

/// Process layer a layer name resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessLayerSpec {
    /// GDS layer number
    pub gds_layer: u16,
    /// GDS datatype
    #[serde(default)]
    pub datatype: u16,
    /// Material key into the materials table
    pub material: String,
    /// Deposited or etched thickness in micrometers
    pub thickness: f64,
}

impl ProcessLayerSpec {
    fn new(gds_layer: u16, datatype: u16, material: &str, thickness: f64) -> Self {
        Self {
            gds_layer,
            datatype,
            material: material.to_string(),
            thickness,
        }
    }
}

/// Default component parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefaults {
    /// Design wavelength in micrometers
    pub wavelength: f64,
    /// Single-mode waveguide width in micrometers
    pub waveguide_w: f64,
    /// Minimum bend radius in micrometers
    pub bend_radius: f64,
    /// Euler blend fraction of bends
    pub euler: f64,
    /// Growth of slab layers beyond the ridge in micrometers
    pub rib_grow: f64,
}

impl Default for ComponentDefaults {
    fn default() -> Self {
        Self {
            wavelength: 1.55,
            waveguide_w: 0.5,
            bend_radius: 5.0,
            euler: 0.2,
            rib_grow: 1.0,
        }
    }
}

/// Complete foundry configuration
///
/// Aggregates all sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundryConfig {
    /// Process name
    pub name: String,
    /// Database unit of exported layouts
    #[serde(default)]
    pub unit: LengthUnit,
    /// Component defaults
    #[serde(default)]
    pub defaults: ComponentDefaults,
    /// Materials keyed by name
    pub materials: IndexMap<String, MaterialSpec>,
    /// Process layers keyed by layer name
    pub layers: IndexMap<String, ProcessLayerSpec>,
}

impl Default for FoundryConfig {
    fn default() -> Self {
        let materials = init_standard_library()
            .iter()
            .map(|m| (m.id.to_string(), MaterialSpec { n: m.n }))
            .collect();

        let mut layers = IndexMap::new();
        let stack = [
            (CommonLayer::RidgeSi, ProcessLayerSpec::new(100, 0, "si", 0.22)),
            (CommonLayer::RibSi, ProcessLayerSpec::new(101, 0, "si", 0.09)),
            (CommonLayer::PassiveWg, ProcessLayerSpec::new(200, 0, "sin", 0.2)),
            (CommonLayer::SlabSi, ProcessLayerSpec::new(102, 0, "si", 0.15)),
            (CommonLayer::Heater, ProcessLayerSpec::new(300, 0, "al", 0.1)),
            (CommonLayer::Via, ProcessLayerSpec::new(301, 0, "al", 0.5)),
            (CommonLayer::Metal, ProcessLayerSpec::new(302, 0, "al", 0.5)),
            (CommonLayer::CladOpen, ProcessLayerSpec::new(400, 0, "sio2", 2.0)),
        ];
        for (layer, spec) in stack {
            layers.insert(layer.as_str().to_string(), spec);
        }

        Self {
            name: "soi220".to_string(),
            unit: LengthUnit::Micrometer,
            defaults: ComponentDefaults::default(),
            materials,
            layers,
        }
    }
}

impl FoundryConfig {
    /// Create new config with the default silicon-on-insulator stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the user foundry file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("photonkit")
            .join("foundry.toml")
    }

    /// Load the user foundry file, or the built-in stack when none exists
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(&Self::default_path())
    }

    /// Load `path` if it exists, otherwise fall back to the built-in stack
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No foundry file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        debug!(
            "Loaded foundry '{}' with {} layers from {}",
            config.name,
            config.layers.len(),
            path.display()
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        for (name, material) in &self.materials {
            if !(material.n.is_finite() && material.n >= 1.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("materials.{}.n", name),
                    value: material.n.to_string(),
                }
                .into());
            }
        }

        for (name, layer) in &self.layers {
            if !self.materials.contains_key(&layer.material) {
                return Err(SettingsError::InvalidSetting {
                    key: format!("layers.{}.material", name),
                    reason: format!("unknown material '{}'", layer.material),
                });
            }
            if !(layer.thickness.is_finite() && layer.thickness > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("layers.{}.thickness", name),
                    value: layer.thickness.to_string(),
                }
                .into());
            }
        }

        let d = &self.defaults;
        for (key, value) in [
            ("defaults.wavelength", d.wavelength),
            ("defaults.waveguide_w", d.waveguide_w),
            ("defaults.bend_radius", d.bend_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }
        if !(0.0..=1.0).contains(&d.euler) {
            return Err(ConfigError::ValueOutOfRange {
                key: "defaults.euler".to_string(),
                value: d.euler.to_string(),
            }
            .into());
        }
        if d.rib_grow < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "defaults.rib_grow".to_string(),
                value: d.rib_grow.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Merge another config into this one; entries of `other` win
    pub fn merge(&mut self, other: &FoundryConfig) {
        for (name, material) in &other.materials {
            self.materials.insert(name.clone(), material.clone());
        }
        for (name, layer) in &other.layers {
            self.layers.insert(name.clone(), layer.clone());
        }
        self.defaults = other.defaults.clone();
        self.unit = other.unit;
        if !other.name.is_empty() {
            self.name = other.name.clone();
        }
    }

    /// Resolve a layer name to its process layer
    pub fn process_layer(&self, name: &str) -> photonkit_core::Result<&ProcessLayerSpec> {
        self.layers.get(name).ok_or_else(|| {
            LookupError::UnknownLayer {
                layer: name.to_string(),
            }
            .into()
        })
    }

    /// Refractive index of the material a layer is made of
    pub fn layer_index(&self, name: &str) -> photonkit_core::Result<f64> {
        let layer = self.process_layer(name)?;
        self.materials
            .get(&layer.material)
            .map(|m| m.n)
            .ok_or_else(|| {
                LookupError::UnknownMaterial {
                    material: layer.material.clone(),
                }
                .into()
            })
    }
}
