//! Layout snapshots for downstream renderers and exporters.
//!
//! A snapshot flattens a [`Device`] into per-layer polygon lists plus the
//! device ports and stores it as JSON. Polygon order inside each layer follows
//! the device's authoring order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use photonkit_core::{LengthUnit, Result};
use photonkit_settings::FoundryConfig;

use crate::device::Device;
use crate::layout::Layout;
use crate::model::{PortMap, Region};

/// Snapshot file format version
const FILE_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub unit: LengthUnit,
    pub layers: Vec<LayerData>,
    #[serde(default)]
    pub ports: PortMap,
}

/// Polygons drawn on one layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerData {
    /// Layer tag, `None` for untagged patterns
    pub layer: Option<String>,
    /// GDS layer and datatype when resolved against a foundry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gds: Option<(u16, u16)>,
    pub polygons: Vec<Region>,
}

impl LayoutSnapshot {
    pub fn from_device(device: &Device) -> Self {
        let layers = device
            .polygons_by_layer()
            .into_iter()
            .map(|(layer, polygons)| LayerData {
                layer,
                gds: None,
                polygons,
            })
            .collect();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            name: device.name.clone(),
            unit: LengthUnit::Micrometer,
            layers,
            ports: device.ports().clone(),
        }
    }

    /// Snapshot with every layer resolved to its GDS layer; fails on unknown
    /// or untagged layers
    pub fn resolved(device: &Device, foundry: &FoundryConfig) -> Result<Self> {
        device.resolve_layers(foundry)?;
        let mut snapshot = Self::from_device(device);
        for data in &mut snapshot.layers {
            if let Some(name) = &data.layer {
                let spec = foundry.process_layer(name)?;
                data.gds = Some((spec.gds_layer, spec.datatype));
            }
        }
        snapshot.unit = foundry.unit;
        Ok(snapshot)
    }

    pub fn polygon_count(&self) -> usize {
        self.layers.iter().map(|l| l.polygons.len()).sum()
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
