//! Common fabrication layer names
//!
//! Devices tag each member pattern with a layer name. The names are opaque keys
//! resolved against a foundry registry; `CommonLayer` provides the stable names
//! shared by the built-in components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known layer names of a silicon-photonics process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonLayer {
    /// Full-thickness silicon ridge
    RidgeSi,
    /// Partially etched silicon rib / slab
    RibSi,
    /// Passive nitride waveguide
    PassiveWg,
    /// Silicon slab for shallow-etch gratings
    SlabSi,
    /// Heater metal
    Heater,
    /// Via between metal layers
    Via,
    /// Routing metal
    Metal,
    /// Oxide cladding opening
    CladOpen,
}

impl CommonLayer {
    /// All common layers in registry order
    pub const ALL: [CommonLayer; 8] = [
        CommonLayer::RidgeSi,
        CommonLayer::RibSi,
        CommonLayer::PassiveWg,
        CommonLayer::SlabSi,
        CommonLayer::Heater,
        CommonLayer::Via,
        CommonLayer::Metal,
        CommonLayer::CladOpen,
    ];

    /// Stable registry key of this layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RidgeSi => "ridge_si",
            Self::RibSi => "rib_si",
            Self::PassiveWg => "passive_wg",
            Self::SlabSi => "slab_si",
            Self::Heater => "heater",
            Self::Via => "via",
            Self::Metal => "metal",
            Self::CladOpen => "clad_open",
        }
    }
}

impl fmt::Display for CommonLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommonLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommonLayer::ALL
            .iter()
            .copied()
            .find(|layer| layer.as_str() == s)
            .ok_or_else(|| format!("Unknown common layer: {}", s))
    }
}

impl From<CommonLayer> for String {
    fn from(layer: CommonLayer) -> Self {
        layer.as_str().to_string()
    }
}
