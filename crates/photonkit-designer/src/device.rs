//! Layered devices.
//!
//! A [`Device`] keeps an ordered list of patterns, each optionally tagged with
//! a fabrication layer name. Layer names are opaque keys resolved against a
//! [`LayerRegistry`] at export time. Device ports are chosen explicitly by the
//! building recipe; member ports are never merged automatically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use photonkit_core::{CommonLayer, LookupError, Result};
use photonkit_settings::{LayerRegistry, ProcessLayerSpec};

use crate::layout::Layout;
use crate::model::{Bounds, Port, PortMap, Region, Transform};
use crate::pattern::Pattern;

/// Tag used in lookups for patterns that carry no layer
pub const UNTAGGED_LAYER: &str = "(untagged)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredPattern {
    pub pattern: Pattern,
    pub layer: Option<String>,
}

/// Construction entry of a [`Device`]
#[derive(Debug, Clone)]
pub enum DeviceEntry {
    Layered(Pattern, String),
    Bare(Pattern),
    /// Member patterns of another device, keeping their layers
    Device(Device),
}

impl From<(Pattern, CommonLayer)> for DeviceEntry {
    fn from((pattern, layer): (Pattern, CommonLayer)) -> Self {
        DeviceEntry::Layered(pattern, layer.into())
    }
}

impl From<(Pattern, &str)> for DeviceEntry {
    fn from((pattern, layer): (Pattern, &str)) -> Self {
        DeviceEntry::Layered(pattern, layer.to_string())
    }
}

impl From<(Pattern, String)> for DeviceEntry {
    fn from((pattern, layer): (Pattern, String)) -> Self {
        DeviceEntry::Layered(pattern, layer)
    }
}

impl From<Pattern> for DeviceEntry {
    fn from(pattern: Pattern) -> Self {
        DeviceEntry::Bare(pattern)
    }
}

impl From<Device> for DeviceEntry {
    fn from(device: Device) -> Self {
        DeviceEntry::Device(device)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    entries: Vec<LayeredPattern>,
    #[serde(default)]
    port: PortMap,
}

impl Device {
    pub fn new<E: Into<DeviceEntry>>(name: impl Into<String>, entries: impl IntoIterator<Item = E>) -> Self {
        let mut flat = Vec::new();
        for entry in entries {
            match entry.into() {
                DeviceEntry::Layered(pattern, layer) => flat.push(LayeredPattern {
                    pattern,
                    layer: Some(layer),
                }),
                DeviceEntry::Bare(pattern) => flat.push(LayeredPattern {
                    pattern,
                    layer: None,
                }),
                DeviceEntry::Device(device) => flat.extend(device.entries),
            }
        }
        Self {
            name: name.into(),
            entries: flat,
            port: PortMap::new(),
        }
    }

    pub fn entries(&self) -> &[LayeredPattern] {
        &self.entries
    }

    /// Distinct layer tags in first-use order
    pub fn layers(&self) -> Vec<Option<&str>> {
        let mut layers: Vec<Option<&str>> = Vec::new();
        for entry in &self.entries {
            let layer = entry.layer.as_deref();
            if !layers.contains(&layer) {
                layers.push(layer);
            }
        }
        layers
    }

    /// Regions grouped by layer tag, each group in authoring order
    pub fn polygons_by_layer(&self) -> IndexMap<Option<String>, Vec<Region>> {
        let mut groups: IndexMap<Option<String>, Vec<Region>> = IndexMap::new();
        for entry in &self.entries {
            groups
                .entry(entry.layer.clone())
                .or_default()
                .extend(entry.pattern.polygons().iter().cloned());
        }
        groups
    }

    /// Resolve every layer tag against `registry`.
    ///
    /// Fails on the first unknown layer; untagged patterns cannot be
    /// fabricated and fail as well.
    pub fn resolve_layers<'r, R: LayerRegistry + ?Sized>(
        &self,
        registry: &'r R,
    ) -> Result<IndexMap<String, &'r ProcessLayerSpec>> {
        let mut resolved = IndexMap::new();
        for layer in self.layers() {
            let name = layer.ok_or_else(|| LookupError::UnknownLayer {
                layer: UNTAGGED_LAYER.to_string(),
            })?;
            resolved.insert(name.to_string(), registry.process_layer(name)?);
        }
        Ok(resolved)
    }

    /// All geometry as one pattern with the device ports, layers dropped
    pub fn flatten(&self) -> Pattern {
        let mut pattern = Pattern::compose(self.entries.iter().map(|e| e.pattern.clone()));
        for (name, port) in &self.port {
            pattern.set_port(name.clone(), *port);
        }
        pattern
    }

    pub fn set_port(&mut self, name: impl Into<String>, port: Port) -> &mut Self {
        self.port.insert(name.into(), port);
        self
    }

    /// Re-expose a port of a member pattern under a device-level name
    pub fn expose_port(&mut self, name: impl Into<String>, member: usize, port: &str) -> Result<&mut Self> {
        let entry = self
            .entries
            .get(member)
            .ok_or_else(|| LookupError::MissingReference {
                name: format!("{}[{}]", self.name, member),
            })?;
        let port = entry.pattern.port(port)?;
        Ok(self.set_port(name, port))
    }
}

impl Layout for Device {
    fn apply(&mut self, t: &Transform) {
        for entry in &mut self.entries {
            entry.pattern.apply(t);
        }
        for port in self.port.values_mut() {
            *port = port.transformed(t);
        }
    }

    fn bounds(&self) -> Bounds {
        self.entries
            .iter()
            .filter(|e| !e.pattern.is_empty())
            .map(|e| e.pattern.bounds())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default()
    }

    fn ports(&self) -> &PortMap {
        &self.port
    }

    fn ports_mut(&mut self) -> &mut PortMap {
        &mut self.port
    }
}
